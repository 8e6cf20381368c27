mod http;
mod inmemory;

pub use http::HttpUserGateway;
pub use inmemory::{GatewayCall, InMemoryUserGateway};

use thiserror::Error;
use user_admin_api_structs::{create_user, dtos::ValidationErrorResponse, update_user};
use user_admin_domain::{User, ID};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("A user with id: {0}, was not found.")]
    NotFound(ID),
    #[error("The users API rejected the data. Error message: `{}`", .0.message)]
    Validation(ValidationErrorResponse),
    #[error("Could not reach the users API. Error message: `{0}`")]
    Transport(String),
}

/// Access to the users REST API.
///
/// Every call is a single request: no retries and no timeout other than the
/// one of the transport.
#[async_trait::async_trait]
pub trait IUserGateway: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>, GatewayError>;
    async fn get(&self, user_id: ID) -> Result<User, GatewayError>;
    async fn create(&self, body: create_user::RequestBody) -> Result<User, GatewayError>;
    async fn update(
        &self,
        user_id: ID,
        body: update_user::RequestBody,
    ) -> Result<User, GatewayError>;
    async fn delete(&self, user_id: ID) -> Result<(), GatewayError>;
}
