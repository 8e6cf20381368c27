use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use user_admin_api_structs::*;
use user_admin_domain::ID;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub type CreateUserInput = create_user::RequestBody;

pub struct UpdateUserInput {
    pub user_id: ID,
    pub body: update_user::RequestBody,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list_all(&self) -> APIResponse<list_users::APIResponse> {
        self.base.get("".into(), StatusCode::OK).await
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_user::APIResponse> {
        self.base.get(user_id.to_string(), StatusCode::OK).await
    }

    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        self.base
            .post(input, "".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(&self, input: UpdateUserInput) -> APIResponse<update_user::APIResponse> {
        self.base
            .put(input.body, input.user_id.to_string(), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, user_id: ID) -> APIResponse<()> {
        self.base
            .delete(user_id.to_string(), StatusCode::NO_CONTENT)
            .await
    }
}
