use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ApiResponseDto};

/// Decodes a backend response body into its payload.
///
/// Successful HTTP statuses still carry a business `code`; anything other than
/// the success code is reported as an error with the backend's message. Error
/// statuses are mapped to the messages shown to the user.
pub fn decode<T: DeserializeOwned>(status: u64, body: &str) -> Result<Option<T>, ApiError> {
    let envelope = serde_json::from_str::<ApiResponseDto<T>>(body);

    if (200..300).contains(&status) {
        let envelope = envelope.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })?;

        if envelope.is_success() {
            Ok(envelope.data)
        } else {
            Err(ApiError {
                status,
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("请求失败(code {})", envelope.code)),
            })
        }
    } else {
        let backend_message = serde_json::from_str::<ApiResponseDto<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message);

        Err(ApiError {
            status,
            message: status_message(status, backend_message),
        })
    }
}

fn status_message(status: u64, backend_message: Option<String>) -> String {
    match status {
        400 => backend_message.unwrap_or_else(|| "请求参数错误".to_string()),
        401 => "登录已过期，请重新登录".to_string(),
        403 => "没有权限访问该资源".to_string(),
        404 => "请求的资源不存在".to_string(),
        500 => "服务器内部错误".to_string(),
        _ => backend_message.unwrap_or_else(|| format!("请求失败({})", status)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::auth::LoginResultDto;

    /// Tests a successful login envelope.
    ///
    /// Expected: Ok(Some(result)) with token and user info
    #[test]
    fn decodes_success_payload() -> Result<(), ApiError> {
        let body = r#"{"code":0,"data":{"token":"abc","userInfo":{"id":3,"username":"ops"}},"message":"ok"}"#;

        let result = decode::<LoginResultDto>(200, body)?.unwrap();

        assert_eq!(result.token.as_deref(), Some("abc"));
        assert_eq!(result.user_info.map(|u| u.username), Some("ops".to_string()));

        Ok(())
    }

    /// Tests a success envelope without data.
    ///
    /// Expected: Ok(None)
    #[test]
    fn accepts_missing_data() -> Result<(), ApiError> {
        let result = decode::<LoginResultDto>(200, r#"{"code":0}"#)?;

        assert_eq!(result, None);

        Ok(())
    }

    /// Tests a business error carried in a 200 response.
    ///
    /// Expected: Err with the backend's message
    #[test]
    fn reports_business_errors() {
        let result = decode::<LoginResultDto>(200, r#"{"code":1001,"message":"密码错误"}"#);

        assert_eq!(
            result,
            Err(ApiError {
                status: 200,
                message: "密码错误".to_string()
            })
        );
    }

    /// Tests an expired session.
    ///
    /// Expected: Err with status 401
    #[test]
    fn maps_unauthorized_status() {
        let error = decode::<LoginResultDto>(401, "").unwrap_err();

        assert!(error.is_unauthorized());
        assert_eq!(error.message, "登录已过期，请重新登录");
    }

    /// Tests a bad request carrying a backend message and an unusual status without one.
    ///
    /// Expected: backend message for 400, generic message for 418
    #[test]
    fn maps_other_statuses() {
        let bad_request = decode::<LoginResultDto>(400, r#"{"code":400,"message":"邮箱格式错误"}"#);
        let teapot = decode::<LoginResultDto>(418, "I'm a teapot");

        assert_eq!(bad_request.unwrap_err().message, "邮箱格式错误");
        assert_eq!(teapot.unwrap_err().message, "请求失败(418)");
    }

    /// Tests an unparseable body with a success status.
    ///
    /// Expected: Err with status 500
    #[test]
    fn rejects_malformed_success_body() {
        let error = decode::<LoginResultDto>(200, "<html>").unwrap_err();

        assert_eq!(error.status, 500);
        assert!(error.message.starts_with("Failed to parse response"));
    }
}
