use crate::{client::api::stream::StreamEvent, model::chat::ChatMessageDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Set while the reply is still arriving.
    pub streaming: bool,
}

/// Conversation shown in the assistant panel.
///
/// At most one reply streams at a time and it is always the last message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_streaming(&self) -> bool {
        self.messages.last().is_some_and(|message| message.streaming)
    }

    /// Adds the prompt and an empty streaming reply.
    ///
    /// Returns the history to send, or `None` when the prompt is blank or a
    /// reply is still streaming.
    pub fn send(&mut self, prompt: &str) -> Option<Vec<ChatMessageDto>> {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.is_streaming() {
            return None;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
            streaming: false,
        });

        let history = self
            .messages
            .iter()
            .filter(|message| !message.content.is_empty())
            .map(|message| ChatMessageDto {
                role: message.role.as_str().to_string(),
                content: message.content.clone(),
            })
            .collect();

        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: String::new(),
            streaming: true,
        });

        Some(history)
    }

    pub fn apply(&mut self, event: StreamEvent) {
        let Some(reply) = self.streaming_reply() else {
            return;
        };

        match event {
            StreamEvent::Append(fragment) => reply.content.push_str(&fragment),
            StreamEvent::Replace(full) => reply.content = full,
            StreamEvent::Done => reply.streaming = false,
        }
    }

    /// Marks the reply complete once the response body has ended.
    pub fn finish(&mut self) {
        if let Some(reply) = self.streaming_reply() {
            reply.streaming = false;
        }
    }

    /// Replaces the streaming reply with an error notice.
    pub fn fail(&mut self, notice: &str) {
        if let Some(reply) = self.streaming_reply() {
            reply.content = notice.to_string();
            reply.streaming = false;
        }
    }

    /// Empties the conversation unless a reply is still arriving.
    pub fn clear(&mut self) {
        if !self.is_streaming() {
            self.messages.clear();
        }
    }

    fn streaming_reply(&mut self) -> Option<&mut ChatMessage> {
        self.messages
            .last_mut()
            .filter(|message| message.streaming)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests a full exchange from prompt to finished reply.
    ///
    /// Expected: prompt sent alone, fragments accumulated, reply closed by Done
    #[test]
    fn streams_reply_into_last_message() {
        let mut log = ChatLog::default();

        let history = log.send("  你好  ");
        log.apply(StreamEvent::Append("你".to_string()));
        log.apply(StreamEvent::Append("好！".to_string()));
        assert!(log.is_streaming());
        log.apply(StreamEvent::Done);

        assert_eq!(
            history,
            Some(vec![ChatMessageDto {
                role: "user".to_string(),
                content: "你好".to_string()
            }])
        );
        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.messages()[1].content, "你好！");
        assert!(!log.is_streaming());
    }

    /// Tests that a second prompt waits for the running reply.
    ///
    /// Expected: None while streaming, history including the first reply after
    #[test]
    fn one_reply_at_a_time() {
        let mut log = ChatLog::default();
        log.send("first");

        assert_eq!(log.send("second"), None);

        log.apply(StreamEvent::Replace("answer".to_string()));
        log.finish();
        let history = log.send("second").unwrap_or_default();

        let roles: Vec<&str> = history.iter().map(|message| message.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "assistant", "user"]);
    }

    /// Tests a blank prompt.
    ///
    /// Expected: None, nothing recorded
    #[test]
    fn ignores_blank_prompt() {
        let mut log = ChatLog::default();

        assert_eq!(log.send("   "), None);
        assert!(log.messages().is_empty());
    }

    /// Tests a failed request.
    ///
    /// Expected: reply replaced by the notice and no longer streaming
    #[test]
    fn failure_replaces_reply() {
        let mut log = ChatLog::default();
        log.send("hello");
        log.apply(StreamEvent::Append("partial".to_string()));

        log.fail("请求失败");

        assert_eq!(log.messages()[1].content, "请求失败");
        assert!(!log.is_streaming());
    }

    /// Tests that late events and clearing leave finished replies alone.
    ///
    /// Expected: event after Done ignored, clear refused while streaming
    #[test]
    fn late_events_and_clear() {
        let mut log = ChatLog::default();
        log.send("hello");

        log.clear();
        assert_eq!(log.messages().len(), 2);

        log.apply(StreamEvent::Done);
        log.apply(StreamEvent::Append("late".to_string()));
        assert_eq!(log.messages()[1].content, "");

        log.clear();
        assert!(log.messages().is_empty());
    }
}
