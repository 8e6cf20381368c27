use super::{GatewayError, IUserGateway};
use tracing::instrument;
use user_admin_api_structs::{create_user, dtos::ValidationErrorResponse, update_user};
use user_admin_domain::{User, ID};
use user_admin_sdk::{APIError, APIErrorVariant, UpdateUserInput, UserAdminSDK};

/// `IUserGateway` backed by the users REST API
pub struct HttpUserGateway {
    sdk: UserAdminSDK,
}

impl HttpUserGateway {
    pub fn new(api_url: &str) -> Self {
        Self {
            sdk: UserAdminSDK::new(api_url),
        }
    }
}

fn map_error(e: APIError, user_id: Option<ID>) -> GatewayError {
    match (e.variant, user_id) {
        (APIErrorVariant::NotFound, Some(user_id)) => GatewayError::NotFound(user_id),
        (APIErrorVariant::BadClientData(Some(body)), _) => GatewayError::Validation(body),
        (APIErrorVariant::BadClientData(None), _) => GatewayError::Validation(
            ValidationErrorResponse::new(400, "Bad Request", &e.message, ""),
        ),
        (variant, _) => GatewayError::Transport(
            APIError {
                variant,
                message: e.message,
            }
            .to_string(),
        ),
    }
}

#[async_trait::async_trait]
impl IUserGateway for HttpUserGateway {
    #[instrument(name = "Listing users", skip(self))]
    async fn list_all(&self) -> Result<Vec<User>, GatewayError> {
        self.sdk
            .user
            .list_all()
            .await
            .map(|users| users.into_iter().map(User::from).collect())
            .map_err(|e| map_error(e, None))
    }

    #[instrument(name = "Getting user", skip(self))]
    async fn get(&self, user_id: ID) -> Result<User, GatewayError> {
        self.sdk
            .user
            .get(user_id)
            .await
            .map(User::from)
            .map_err(|e| map_error(e, Some(user_id)))
    }

    #[instrument(name = "Creating user", skip(self))]
    async fn create(&self, body: create_user::RequestBody) -> Result<User, GatewayError> {
        self.sdk
            .user
            .create(body)
            .await
            .map(User::from)
            .map_err(|e| map_error(e, None))
    }

    #[instrument(name = "Updating user", skip(self))]
    async fn update(
        &self,
        user_id: ID,
        body: update_user::RequestBody,
    ) -> Result<User, GatewayError> {
        self.sdk
            .user
            .update(UpdateUserInput { user_id, body })
            .await
            .map(User::from)
            .map_err(|e| map_error(e, Some(user_id)))
    }

    #[instrument(name = "Deleting user", skip(self))]
    async fn delete(&self, user_id: ID) -> Result<(), GatewayError> {
        self.sdk
            .user
            .delete(user_id)
            .await
            .map_err(|e| map_error(e, Some(user_id)))
    }
}
