mod base;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use std::sync::Arc;
use user::UserClient;
pub use user::{CreateUserInput, UpdateUserInput};
pub use user_admin_api_structs::dtos::*;
pub use user_admin_api_structs::update_user::RequestBody as UpdateUserBody;
pub use user_admin_domain::{Job, ID};

// Domain
pub use user_admin_api_structs::dtos::UserDTO as User;

/// User Admin SDK
///
/// The SDK contains methods for interacting with the users REST API. The
/// address is the url of the users collection, e.g.
/// `http://localhost:8080/api/users`.
#[derive(Clone)]
pub struct UserAdminSDK {
    pub user: UserClient,
}

impl UserAdminSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let user = UserClient::new(base);

        Self { user }
    }
}
