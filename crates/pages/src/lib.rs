mod shared;
mod user;

pub use shared::outcome::{DeleteOutcome, FormState, LoadOutcome, Rejection, SubmitOutcome};
pub use user::create_user::CreateUserPage;
pub use user::edit_user::EditUserPage;
pub use user::form::{job_options, FormField, SelectOption, TextField, UserForm};
pub use user::list_users::UserListPage;
