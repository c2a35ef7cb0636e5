pub const SITE_NAME: &str = "AICoder";

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/home";

/// Viewports narrower than this (in CSS pixels) start with a collapsed sidebar.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Local Ollama server speaking the OpenAI chat completions protocol.
pub const CHAT_URL: &str = "http://localhost:11434/v1/chat/completions";
pub const CHAT_MODEL: &str = "llama3.2:latest";
