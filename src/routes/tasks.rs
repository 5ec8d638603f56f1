use crate::{
    error::AppError,
    models::{CreateTaskRequest, TaskId, TaskList, UpdateTaskRequest, UserId},
    store::Store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Lists every task belonging to the given owner.
///
/// The owner identifier comes straight from the path; nothing verifies
/// that the caller is that owner, or that the owner exists. An unknown
/// owner gets an empty list, not an error. Order is store-native and not
/// guaranteed to be stable across calls.
#[get("/{user_id}")]
pub async fn list_tasks(
    store: web::Data<Store>,
    user_id: web::Path<UserId>,
) -> Result<impl Responder, AppError> {
    let items = store.tasks_by_owner(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TaskList { items }))
}

/// Creates a task for the owner named in the body.
///
/// The task name must be non-empty. The owner identifier is accepted as
/// given: it is not checked against the accounts collection, so a task can
/// be created under an owner that was never registered.
#[post("")]
pub async fn create_task(
    store: web::Data<Store>,
    task_data: web::Json<CreateTaskRequest>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store
        .insert_task(
            task_data.user_id,
            &task_data.task_name,
            task_data.description.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Replaces a task's name and description in place.
///
/// The lookup matches on both task id and owner id; a task that exists but
/// belongs to a different owner answers 404, exactly like a task that does
/// not exist at all.
#[put("/{user_id}/{task_id}")]
pub async fn update_task(
    store: web::Data<Store>,
    path: web::Path<(UserId, TaskId)>,
    task_data: web::Json<UpdateTaskRequest>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let (user_id, task_id) = path.into_inner();

    let task = store
        .update_task(
            user_id,
            task_id,
            &task_data.task_name,
            task_data.description.as_deref(),
        )
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task and returns its pre-deletion snapshot.
///
/// Same owner-in-the-lookup matching rule as update; deleting the same
/// task twice answers 404 the second time.
#[delete("/{user_id}/{task_id}")]
pub async fn delete_task(
    store: web::Data<Store>,
    path: web::Path<(UserId, TaskId)>,
) -> Result<impl Responder, AppError> {
    let (user_id, task_id) = path.into_inner();

    let task = store
        .remove_task(user_id, task_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(task))
}
