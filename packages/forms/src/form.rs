// ABOUTME: The task editing form: draft + catalog + submission state machine
// ABOUTME: One instance per open form; presentation binds to it however it likes

use tracing::debug;

use tasklight_auth::AuthError;
use tasklight_categories::{Category, CategoryCreateInput};
use tasklight_core::validate_category_name;
use tasklight_tasks::Task;

use crate::catalog::CategoryCatalog;
use crate::context::FormContext;
use crate::draft::TaskDraft;
use crate::error::FormError;
use crate::reconcile::{reconcile, SubmitOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { task_id: String },
}

/// Per-submission lifecycle. Terminal states hold until the caller
/// acknowledges or closes the form, which returns the form to Idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

type SavedCallback = Box<dyn Fn(&SubmitOutcome) + Send + Sync>;
type ErrorSink = Box<dyn Fn(&FormError) + Send + Sync>;

pub struct TaskForm {
    mode: FormMode,
    pub draft: TaskDraft,
    pub catalog: CategoryCatalog,
    state: SubmitState,
    open: bool,
    on_saved: Option<SavedCallback>,
    error_sink: Option<ErrorSink>,
}

impl TaskForm {
    /// Open a form: create mode with default fields, or edit mode populated
    /// from an existing task with its linked categories pre-selected.
    ///
    /// The catalog always loads, possibly empty; a failure there never
    /// blocks the form from opening.
    pub async fn open(ctx: &FormContext, existing: Option<&Task>) -> Self {
        let user_id = ctx
            .auth
            .current_user()
            .map(|user| user.id)
            .unwrap_or_default();
        let catalog = CategoryCatalog::load(&ctx.categories, &user_id).await;

        let (mode, draft) = match existing {
            Some(task) => {
                let mut draft = TaskDraft::from_task(task);
                draft.selected_category_ids =
                    CategoryCatalog::linked_ids(&ctx.links, &task.id).await;
                (
                    FormMode::Edit {
                        task_id: task.id.clone(),
                    },
                    draft,
                )
            }
            None => (FormMode::Create, TaskDraft::default()),
        };

        Self {
            mode,
            draft,
            catalog,
            state: SubmitState::Idle,
            open: true,
            on_saved: None,
            error_sink: None,
        }
    }

    /// Register a callback invoked after a successful save, typically a
    /// list refresh.
    pub fn on_saved(mut self, callback: impl Fn(&SubmitOutcome) + Send + Sync + 'static) -> Self {
        self.on_saved = Some(Box::new(callback));
        self
    }

    /// Register where errors should be displayed. The form never decides
    /// between an inline banner and a blocking alert; the sink does.
    pub fn with_error_sink(
        mut self,
        sink: impl Fn(&FormError) + Send + Sync + 'static,
    ) -> Self {
        self.error_sink = Some(Box::new(sink));
        self
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a submission is in flight; bind the submit trigger's
    /// disabled state to this.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Add or remove a category from the working selection.
    pub fn toggle_category(&mut self, category_id: &str) {
        self.draft.toggle_category(category_id);
    }

    /// Create a category mid-form: it is appended to the catalog and
    /// auto-selected into the draft.
    pub async fn create_category(
        &mut self,
        ctx: &FormContext,
        name: &str,
    ) -> Result<Category, FormError> {
        let name = validate_category_name(name)?;
        let user = ctx.auth.current_user().ok_or(AuthError::NotAuthenticated)?;

        let category = ctx
            .categories
            .create_category(
                &user.id,
                CategoryCreateInput {
                    name: name.to_string(),
                    color: None,
                },
            )
            .await?;

        self.catalog.categories.push(category.clone());
        self.draft
            .selected_category_ids
            .insert(category.id.clone());

        Ok(category)
    }

    /// Run the save procedure for the current draft.
    ///
    /// Returns `Ok(None)` when the submit is ignored: a submission is
    /// already in flight, or the form has been dismissed. On success the
    /// saved callback fires, the editing context closes, and a create-mode
    /// draft resets to defaults. On failure the error goes to the error
    /// sink and the form stays open for the user to retry.
    pub async fn submit(&mut self, ctx: &FormContext) -> Result<Option<SubmitOutcome>, FormError> {
        if !self.open {
            debug!("Submit ignored: form is closed");
            return Ok(None);
        }
        if self.is_submitting() {
            debug!("Submit ignored: a submission is already in flight");
            return Ok(None);
        }
        self.state = SubmitState::Submitting;

        let existing_task_id = match &self.mode {
            FormMode::Edit { task_id } => Some(task_id.clone()),
            FormMode::Create => None,
        };

        match reconcile(ctx, &self.draft, existing_task_id.as_deref()).await {
            Ok(outcome) => {
                self.state = SubmitState::Succeeded;
                if let Some(callback) = &self.on_saved {
                    callback(&outcome);
                }
                if self.mode == FormMode::Create {
                    self.draft.reset();
                }
                self.open = false;
                Ok(Some(outcome))
            }
            Err(err) => {
                self.state = SubmitState::Failed(err.to_string());
                if let Some(sink) = &self.error_sink {
                    sink(&err);
                }
                Err(err)
            }
        }
    }

    /// Acknowledge a terminal submission state, returning the form to Idle.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, SubmitState::Succeeded | SubmitState::Failed(_)) {
            self.state = SubmitState::Idle;
        }
    }

    /// Dismiss the form. Acknowledges any terminal state; a submission
    /// already in flight is not cancelled and completes against the
    /// dismissed form as a no-op.
    pub fn close(&mut self) {
        self.open = false;
        self.acknowledge();
    }
}
