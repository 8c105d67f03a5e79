pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod get_users;
pub mod replace_user;
pub mod restore_user;
pub mod update_user;
