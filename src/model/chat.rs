use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessageDto {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequestDto {
    pub model: String,
    pub messages: Vec<ChatMessageDto>,
    pub stream: bool,
}

/// One streamed chunk.
///
/// OpenAI-compatible servers send `choices`, Ollama's native endpoints send a
/// bare `response` fragment.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChatChunkDto {
    #[serde(default)]
    pub choices: Vec<ChatChoiceDto>,
    pub response: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChatChoiceDto {
    pub delta: Option<ChatContentDto>,
    pub message: Option<ChatContentDto>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChatContentDto {
    pub content: Option<String>,
}
