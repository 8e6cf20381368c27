pub mod create_user;
pub mod edit_user;
pub mod form;
pub mod list_users;
