use std::fmt;

/// The single plain-text outcome returned to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultMessage {
    Received { file_name: String },
    InvalidFormat,
    Rejected { reason: String },
}

impl ResultMessage {
    pub fn received(file_name: impl Into<String>) -> Self {
        ResultMessage::Received {
            file_name: file_name.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultMessage::Received { .. })
    }
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultMessage::Received { file_name } => {
                write!(f, "File {} received successfully", file_name)
            }
            ResultMessage::InvalidFormat => f.write_str("Error: Invalid file format"),
            ResultMessage::Rejected { reason } => write!(f, "Error: {}", reason),
        }
    }
}
