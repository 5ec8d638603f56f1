pub mod account;
pub mod task;

pub use account::{Account, UserId};
pub use task::{CreateTaskRequest, Task, TaskId, TaskList, UpdateTaskRequest};
