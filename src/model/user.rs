use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as stored in the `u_info` cookie.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserInfoDto {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}
