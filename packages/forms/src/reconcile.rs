// ABOUTME: The save procedure: task upsert followed by a link-set rewrite
// ABOUTME: Two sequential writes with no transaction spanning them

use std::collections::BTreeSet;

use tracing::warn;

use tasklight_auth::AuthError;
use tasklight_core::validate_title;
use tasklight_storage::StorageError;
use tasklight_tasks::Task;

use crate::context::FormContext;
use crate::draft::TaskDraft;
use crate::error::FormError;

/// What a successful save produced.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub task: Task,
    /// True when the save inserted a new task rather than updating one.
    pub created: bool,
    /// False when the task row was written but the category link rewrite
    /// failed; the save still counts as a success and the failure is logged.
    pub links_synced: bool,
}

/// Persist a draft and make the task's category links match its selection.
///
/// Step 1 upserts the task row: editing updates every field of the existing
/// row, creating inserts a new row and captures its id. Step 2 rewrites the
/// link set: an unconditional clear of the task's links (edit mode only,
/// a fresh task has none), then one batched insert of the current selection.
///
/// Pre-flight checks run before any write: no resolved user aborts with an
/// auth error, a whitespace-only title with a validation error. A Step 1
/// store failure aborts the save. A Step 2 failure does not undo Step 1 and
/// does not fail the save; it is logged and reported via
/// [`SubmitOutcome::links_synced`] so callers can show a partial-success
/// warning. The selection is never diffed against the stored links.
pub async fn reconcile(
    ctx: &FormContext,
    draft: &TaskDraft,
    existing_task_id: Option<&str>,
) -> Result<SubmitOutcome, FormError> {
    let user = ctx.auth.current_user().ok_or(AuthError::NotAuthenticated)?;
    validate_title(&draft.title)?;

    // Step 1: task write
    let input = draft.to_input();
    let (task, created) = match existing_task_id {
        Some(task_id) => (ctx.tasks.update_task(task_id, input).await?, false),
        None => (ctx.tasks.create_task(&user.id, input).await?, true),
    };

    // Step 2: link rewrite, only once Step 1 has produced a task id
    let links_synced = match rewrite_links(
        ctx,
        &task.id,
        &user.id,
        &draft.selected_category_ids,
        existing_task_id.is_some(),
    )
    .await
    {
        Ok(()) => true,
        Err(err) => {
            warn!("Category link rewrite failed for task {}: {}", task.id, err);
            false
        }
    };

    Ok(SubmitOutcome {
        task,
        created,
        links_synced,
    })
}

async fn rewrite_links(
    ctx: &FormContext,
    task_id: &str,
    user_id: &str,
    selected: &BTreeSet<String>,
    editing: bool,
) -> Result<(), StorageError> {
    if editing {
        ctx.links.delete_for_task(task_id).await?;
    }

    if !selected.is_empty() {
        let category_ids: Vec<String> = selected.iter().cloned().collect();
        ctx.links
            .insert_links(task_id, user_id, &category_ids)
            .await?;
    }

    Ok(())
}
