pub mod task;
pub mod user;

pub use task::{Task, TaskCreateRequest, TaskEditRequest, TaskStatus};
pub use user::User;
