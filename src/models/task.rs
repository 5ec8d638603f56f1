use crate::models::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Opaque identifier for a task, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single to-do item owned by exactly one account.
///
/// The owner reference is advisory: nothing checks that `user_id` names an
/// existing account, but every lookup of a task by id also matches on the
/// owner, so a task belonging to someone else reads as not found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub task_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating a task. The owner identifier is caller-supplied,
/// not derived from any verified session.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub user_id: UserId,
    #[validate(length(min = 1))]
    pub task_name: String,
    pub description: Option<String>,
}

/// Payload for updating a task in place. Name and description are replaced;
/// id and owner are preserved.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1))]
    pub task_name: String,
    pub description: Option<String>,
}

/// Response envelope for listing: `{"items": [...]}`.
#[derive(Debug, Serialize)]
pub struct TaskList {
    pub items: Vec<Task>,
}
