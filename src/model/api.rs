use serde::{Deserialize, Serialize};

/// Business code the backend uses for success.
pub const SUCCESS_CODE: i64 = 0;

/// Envelope wrapping every backend response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiResponseDto<T> {
    pub code: i64,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponseDto<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}
