use crate::model::chat::ChatChunkDto;

const DATA_PREFIX: &str = "data:";
const DONE_MARKER: &str = "[DONE]";

/// What a single line of a streamed chat response means for the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Fragment to append to the reply.
    Append(String),
    /// Full reply text, replacing what was received so far.
    Replace(String),
    Done,
}

/// Splits a byte stream into complete lines.
///
/// Chunks may end in the middle of a line or of a UTF-8 sequence; the tail is
/// kept until the next chunk completes it.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buffer: Vec<u8>,
}

impl LineDecoder {
    /// Feeds a chunk and returns the lines it completed, without line endings.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(end) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            lines.push(decode_line(&line[..end]));
        }
        lines
    }

    /// Returns the unterminated last line once the stream has ended.
    pub fn finish(self) -> Option<String> {
        (!self.buffer.is_empty()).then(|| decode_line(&self.buffer))
    }
}

fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\r')
        .to_string()
}

/// Interprets one line of a streamed response.
///
/// Server-sent `data:` lines and bare newline-delimited JSON are both
/// accepted. Blank lines, SSE comments and chunks without text yield `None`.
pub fn parse_line(line: &str) -> Result<Option<StreamEvent>, serde_json::Error> {
    let line = line.trim();
    let payload = match line.strip_prefix(DATA_PREFIX) {
        Some(data) => data.trim(),
        None if line.starts_with('{') => line,
        None => return Ok(None),
    };

    if payload == DONE_MARKER {
        return Ok(Some(StreamEvent::Done));
    }
    if payload.is_empty() {
        return Ok(None);
    }

    let chunk = serde_json::from_str::<ChatChunkDto>(payload)?;
    Ok(chunk_event(chunk))
}

fn chunk_event(chunk: ChatChunkDto) -> Option<StreamEvent> {
    match chunk.choices.into_iter().next() {
        Some(choice) => {
            let delta = choice.delta.and_then(|delta| delta.content);
            let message = choice.message.and_then(|message| message.content);

            match (delta, message) {
                (Some(fragment), _) if !fragment.is_empty() => Some(StreamEvent::Append(fragment)),
                (_, Some(full)) if !full.is_empty() => Some(StreamEvent::Replace(full)),
                _ => None,
            }
        }
        None => chunk
            .response
            .filter(|fragment| !fragment.is_empty())
            .map(StreamEvent::Append),
    }
}
