// ABOUTME: Integration tests for the save procedure
// ABOUTME: Covers create, edit, link rewrites, and the non-transactional two-step write

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sqlx::SqlitePool;

use tasklight_auth::{CurrentUser, SessionAuth, UserCreateInput, UserStorage};
use tasklight_categories::CategoryCreateInput;
use tasklight_forms::{FormContext, FormError, TaskForm};
use tasklight_storage::{connect_memory, initialize_schema};
use tasklight_tasks::{TaskPriority, TaskStatus};

async fn setup() -> (SqlitePool, FormContext, CurrentUser) {
    let pool = connect_memory().await.unwrap();
    initialize_schema(&pool).await.unwrap();

    let users = UserStorage::new(pool.clone());
    let user = users
        .create_user(UserCreateInput {
            email: "ada@example.com".to_string(),
            name: None,
        })
        .await
        .unwrap();
    let current = CurrentUser::from(&user);

    let auth = Arc::new(SessionAuth::authenticated(current.clone()));
    let ctx = FormContext::new(pool.clone(), auth);
    (pool, ctx, current)
}

async fn task_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn linked_ids(pool: &SqlitePool, task_id: &str) -> Vec<String> {
    let mut ids: Vec<String> =
        sqlx::query_scalar("SELECT category_id FROM task_categories WHERE task_id = ?")
            .bind(task_id)
            .fetch_all(pool)
            .await
            .unwrap();
    ids.sort();
    ids
}

#[tokio::test]
async fn test_create_mode_inserts_exactly_one_task() {
    let (pool, ctx, current) = setup().await;

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Buy milk".to_string();

    let outcome = form.submit(&ctx).await.unwrap().unwrap();

    assert!(outcome.created);
    assert!(outcome.links_synced);
    assert_eq!(task_count(&pool).await, 1);

    let task = &outcome.task;
    assert_eq!(task.user_id, current.id);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.due_date, None);
    assert_eq!(linked_ids(&pool, &task.id).await, Vec::<String>::new());
}

#[tokio::test]
async fn test_create_mode_links_selected_categories() {
    let (pool, ctx, current) = setup().await;

    let work = ctx
        .categories
        .create_category(
            &current.id,
            CategoryCreateInput {
                name: "Work".to_string(),
                color: None,
            },
        )
        .await
        .unwrap();
    let home = ctx
        .categories
        .create_category(
            &current.id,
            CategoryCreateInput {
                name: "Home".to_string(),
                color: None,
            },
        )
        .await
        .unwrap();

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Sort mail".to_string();
    form.toggle_category(&work.id);
    form.toggle_category(&home.id);

    let outcome = form.submit(&ctx).await.unwrap().unwrap();

    let mut expected = vec![work.id.clone(), home.id.clone()];
    expected.sort();
    assert_eq!(linked_ids(&pool, &outcome.task.id).await, expected);

    let users_stamped: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM task_categories WHERE task_id = ? AND user_id = ?",
    )
    .bind(&outcome.task.id)
    .bind(&current.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(users_stamped, 2);
}

#[tokio::test]
async fn test_edit_mode_updates_fields_and_keeps_id() {
    let (pool, ctx, _current) = setup().await;

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Original".to_string();
    form.draft.description = "Old notes".to_string();
    let created = form.submit(&ctx).await.unwrap().unwrap().task;

    let mut edit = TaskForm::open(&ctx, Some(&created)).await;
    assert_eq!(edit.draft.title, "Original");
    assert_eq!(edit.draft.description, "Old notes");

    edit.draft.title = "Renamed".to_string();
    edit.draft.description = String::new();
    edit.draft.status = TaskStatus::Completed;
    edit.draft.priority = TaskPriority::Urgent;
    let outcome = edit.submit(&ctx).await.unwrap().unwrap();

    assert!(!outcome.created);
    assert_eq!(outcome.task.id, created.id);
    assert_eq!(outcome.task.title, "Renamed");
    assert_eq!(outcome.task.description, None);
    assert_eq!(outcome.task.status, TaskStatus::Completed);
    assert_eq!(outcome.task.priority, TaskPriority::Urgent);
    assert_eq!(task_count(&pool).await, 1);
}

#[tokio::test]
async fn test_edit_mode_rewrites_link_set_exactly() {
    let (pool, ctx, current) = setup().await;

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let category = ctx
            .categories
            .create_category(
                &current.id,
                CategoryCreateInput {
                    name: name.to_string(),
                    color: None,
                },
            )
            .await
            .unwrap();
        ids.push(category.id);
    }
    let (a, b, c) = (&ids[0], &ids[1], &ids[2]);

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Organize".to_string();
    form.toggle_category(a);
    form.toggle_category(b);
    let task = form.submit(&ctx).await.unwrap().unwrap().task;

    // Deselect A, select C: the stored set must become exactly {B, C}
    let mut edit = TaskForm::open(&ctx, Some(&task)).await;
    assert_eq!(
        edit.draft.selected_category_ids,
        [a.clone(), b.clone()].into_iter().collect()
    );
    edit.toggle_category(a);
    edit.toggle_category(c);
    edit.submit(&ctx).await.unwrap().unwrap();

    let mut expected = vec![b.clone(), c.clone()];
    expected.sort();
    assert_eq!(linked_ids(&pool, &task.id).await, expected);
}

#[tokio::test]
async fn test_edit_mode_empty_selection_clears_all_links() {
    let (pool, ctx, current) = setup().await;

    let category = ctx
        .categories
        .create_category(
            &current.id,
            CategoryCreateInput {
                name: "Work".to_string(),
                color: None,
            },
        )
        .await
        .unwrap();

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Untag me".to_string();
    form.toggle_category(&category.id);
    let task = form.submit(&ctx).await.unwrap().unwrap().task;
    assert_eq!(linked_ids(&pool, &task.id).await.len(), 1);

    let mut edit = TaskForm::open(&ctx, Some(&task)).await;
    edit.toggle_category(&category.id);
    edit.submit(&ctx).await.unwrap().unwrap();

    assert_eq!(linked_ids(&pool, &task.id).await, Vec::<String>::new());
}

#[tokio::test]
async fn test_resubmitting_unchanged_edit_is_idempotent() {
    let (pool, ctx, current) = setup().await;

    let category = ctx
        .categories
        .create_category(
            &current.id,
            CategoryCreateInput {
                name: "Work".to_string(),
                color: None,
            },
        )
        .await
        .unwrap();

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Stable".to_string();
    form.toggle_category(&category.id);
    let task = form.submit(&ctx).await.unwrap().unwrap().task;

    for _ in 0..2 {
        let mut edit = TaskForm::open(&ctx, Some(&task)).await;
        edit.submit(&ctx).await.unwrap().unwrap();
    }

    assert_eq!(task_count(&pool).await, 1);
    assert_eq!(linked_ids(&pool, &task.id).await, vec![category.id.clone()]);
}

#[tokio::test]
async fn test_empty_title_blocks_submission_before_any_write() {
    let (pool, ctx, _current) = setup().await;

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "   ".to_string();

    let err = form.submit(&ctx).await.unwrap_err();
    assert!(matches!(err, FormError::Validation(_)));
    assert_eq!(task_count(&pool).await, 0);
}

#[tokio::test]
async fn test_anonymous_session_blocks_submission() {
    let (pool, _ctx, _current) = setup().await;
    let ctx = FormContext::new(pool.clone(), Arc::new(SessionAuth::anonymous()));

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "No owner".to_string();

    let err = form.submit(&ctx).await.unwrap_err();
    assert!(matches!(err, FormError::Auth(_)));
    assert_eq!(task_count(&pool).await, 0);
}

#[tokio::test]
async fn test_link_insert_failure_still_reports_saved() {
    let (pool, ctx, current) = setup().await;

    let category = ctx
        .categories
        .create_category(
            &current.id,
            CategoryCreateInput {
                name: "Work".to_string(),
                color: None,
            },
        )
        .await
        .unwrap();

    let mut form = TaskForm::open(&ctx, None).await;
    form.draft.title = "Keep tagged".to_string();
    form.toggle_category(&category.id);
    let task = form.submit(&ctx).await.unwrap().unwrap().task;
    assert_eq!(linked_ids(&pool, &task.id).await.len(), 1);

    // Make inserts into the join table fail while deletes keep working
    sqlx::query(
        r#"
        CREATE TRIGGER reject_link_inserts
        BEFORE INSERT ON task_categories
        BEGIN SELECT RAISE(ABORT, 'links offline'); END
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let mut edit = TaskForm::open(&ctx, Some(&task)).await;
    edit.draft.title = "Still saved".to_string();
    let outcome = edit.submit(&ctx).await.unwrap().unwrap();

    // The save succeeds; the link set is left in the delete-only state
    assert!(!outcome.links_synced);
    assert_eq!(outcome.task.title, "Still saved");
    assert_eq!(linked_ids(&pool, &task.id).await, Vec::<String>::new());
}
