pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod get_projects;
pub mod restore_project;
pub mod update_project;
