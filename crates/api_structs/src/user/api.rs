use crate::dtos::UserDTO;
use serde::{Deserialize, Serialize};
use user_admin_domain::{Job, ID};

pub type UserResponse = UserDTO;

pub mod list_users {
    use super::*;

    pub type APIResponse = Vec<UserDTO>;
}

pub mod get_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserResponse;
}

pub mod create_user {
    use super::*;

    /// Payload for creating a user. The server assigns the id and marks the
    /// user as active.
    #[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub firstname: String,
        pub lastname: String,
        #[serde(default)]
        pub address: String,
        #[serde(default)]
        pub telephone: String,
        pub job: Job,
    }

    pub type APIResponse = UserResponse;
}

pub mod update_user {
    use super::*;

    /// Full replacement of a user
    #[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub firstname: String,
        pub lastname: String,
        #[serde(default)]
        pub address: String,
        #[serde(default)]
        pub telephone: String,
        pub job: Job,
        pub active: bool,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserResponse;
}

pub mod delete_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }
}
