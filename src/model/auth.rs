use serde::{Deserialize, Serialize};

use crate::model::user::UserInfoDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_info: Option<UserInfoDto>,
}
