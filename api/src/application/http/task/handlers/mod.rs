pub mod create_task;
pub mod delete_task;
pub mod get_task;
pub mod get_tasks;
pub mod replace_task;
pub mod restore_task;
pub mod update_task;
