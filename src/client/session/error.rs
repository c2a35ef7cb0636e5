use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The backing storage could not be reached, e.g. no `document` outside a
    /// browser or cookies disabled.
    #[error("Session storage is unavailable: {0}")]
    Unavailable(String),

    /// A value could not be encoded as JSON before being stored.
    #[error("Failed to serialize session value `{0}`: {1}")]
    Serialize(String, String),

    /// A stored value is not valid JSON for the requested type.
    #[error("Failed to parse session value `{0}`: {1}")]
    Deserialize(String, String),
}
