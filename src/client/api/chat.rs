use dioxus_logger::tracing;
use js_sys::{Reflect, Uint8Array};
use reqwasm::http::{Request, Response};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

use crate::{
    client::{
        api::{
            envelope::decode,
            helper::{send_request, serialize_json},
            stream::{parse_line, LineDecoder, StreamEvent},
        },
        config::AppConfig,
        model::error::ApiError,
    },
    model::chat::{ChatMessageDto, ChatRequestDto},
};

/// Sends the conversation to the chat endpoint and reports the reply as it
/// streams in.
///
/// Lines that fail to parse are logged and skipped.
pub async fn stream_chat(
    config: &AppConfig,
    messages: Vec<ChatMessageDto>,
    mut on_event: impl FnMut(StreamEvent),
) -> Result<(), ApiError> {
    let payload = ChatRequestDto {
        model: config.chat_model.clone(),
        messages,
        stream: true,
    };
    let request = Request::post(&config.chat_url)
        .header("Content-Type", "application/json")
        .body(serialize_json(&payload)?);

    let response = send_request(request).await?;
    if !response.ok() {
        let status = response.status() as u64;
        let body = response.text().await.unwrap_or_default();
        return decode::<serde_json::Value>(status, &body).map(|_| ());
    }

    read_lines(&response, |line| match parse_line(&line) {
        Ok(Some(event)) => on_event(event),
        Ok(None) => {}
        Err(e) => tracing::warn!("Skipping unreadable chat chunk {:?}: {}", line, e),
    })
    .await
}

/// Reads the response body chunk by chunk and hands over complete lines.
async fn read_lines(response: &Response, mut on_line: impl FnMut(String)) -> Result<(), ApiError> {
    let body = response.body().ok_or_else(|| ApiError {
        status: 500,
        message: "Response has no body to stream".to_string(),
    })?;
    let reader = body.get_reader().unchecked_into::<ReadableStreamDefaultReader>();
    let mut decoder = LineDecoder::default();

    loop {
        let chunk = JsFuture::from(reader.read()).await.map_err(stream_error)?;
        let done = Reflect::get(&chunk, &JsValue::from_str("done"))
            .map_err(stream_error)?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value = Reflect::get(&chunk, &JsValue::from_str("value")).map_err(stream_error)?;
        for line in decoder.push(&Uint8Array::new(&value).to_vec()) {
            on_line(line);
        }
    }

    if let Some(line) = decoder.finish() {
        on_line(line);
    }
    Ok(())
}

fn stream_error(e: JsValue) -> ApiError {
    ApiError {
        status: 500,
        message: format!("Failed to read response stream: {:?}", e),
    }
}
