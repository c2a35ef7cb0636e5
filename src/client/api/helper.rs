use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::client::{
    api::envelope::decode,
    model::{auth::AuthContext, error::ApiError},
    session::{SessionStore, TOKEN_KEY},
};

/// Attaches the bearer token from the session store, if there is one.
pub fn authorize(request: Request, store: &dyn SessionStore) -> Request {
    match store.get(TOKEN_KEY) {
        Ok(Some(token)) if !token.is_empty() => {
            request.header("Authorization", &format!("Bearer {}", token))
        }
        _ => request,
    }
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str, store: &dyn SessionStore) -> Request {
    authorize(
        Request::post(url)
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json"),
        store,
    )
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Reads the body and unwraps the response envelope.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let status = response.status() as u64;
    let body = response.text().await.unwrap_or_default();

    decode(status, &body)
}

/// Sends the request and decodes the envelope.
///
/// A 401 from the backend drops the local session, which sends the user back
/// to the login page through the protected guard.
pub async fn fetch<T: DeserializeOwned>(
    request: Request,
    auth: &mut AuthContext,
) -> Result<Option<T>, ApiError> {
    let result = match send_request(request).await {
        Ok(response) => parse_response::<T>(response).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        auth.expire(e);
    }

    result
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
