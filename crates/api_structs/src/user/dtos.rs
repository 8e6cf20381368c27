use serde::{Deserialize, Deserializer, Serialize};
use user_admin_domain::{Job, User, ID};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telephone: String,
    pub job: Job,
    pub active: bool,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            address: user.address,
            telephone: user.telephone,
            job: user.job,
            active: user.active,
        }
    }
}

impl From<UserDTO> for User {
    fn from(dto: UserDTO) -> Self {
        Self {
            id: dto.id,
            firstname: dto.firstname,
            lastname: dto.lastname,
            address: dto.address,
            telephone: dto.telephone,
            job: dto.job,
            active: dto.active,
        }
    }
}

/// The users API sends `null` for optional text columns that were never set
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
