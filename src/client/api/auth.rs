use dioxus_logger::tracing;

use crate::{
    client::{
        api::helper::{fetch, post, serialize_json},
        config::AppConfig,
        model::{auth::AuthContext, error::ApiError},
    },
    model::auth::{LoginDto, LoginResultDto, RegisterDto},
};

pub async fn login(
    config: &AppConfig,
    auth: &mut AuthContext,
    payload: &LoginDto,
) -> Result<LoginResultDto, ApiError> {
    let body = serialize_json(payload)?;
    let request = post(&config.api_url("/api/auth/login"), auth.store()).body(body);

    fetch::<LoginResultDto>(request, auth)
        .await?
        .ok_or_else(|| ApiError {
            status: 500,
            message: "Login response did not contain a session".to_string(),
        })
}

pub async fn register(
    config: &AppConfig,
    auth: &mut AuthContext,
    payload: &RegisterDto,
) -> Result<(), ApiError> {
    let body = serialize_json(payload)?;
    let request = post(&config.api_url("/api/auth/register"), auth.store()).body(body);

    fetch::<serde_json::Value>(request, auth).await?;
    Ok(())
}

/// Tells the backend to end the session. Failures are only logged since the
/// local session is cleared regardless.
pub async fn logout(config: &AppConfig, auth: &mut AuthContext) {
    let request = post(&config.api_url("/api/auth/logout"), auth.store());

    if let Err(e) = fetch::<serde_json::Value>(request, auth).await {
        tracing::warn!("Logout request failed: {}", e);
    }
}
