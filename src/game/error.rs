use crate::Position;

/// Contract violations by the host. Neither is ever shown to the player;
/// both mean the integration is wrong and the session was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidConfiguration(String),
    InvalidSelection { position: Position, count: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::InvalidSelection { position, count } => {
                write!(f, "invalid selection: position {} of {}", position, count)
            }
        }
    }
}

impl std::error::Error for Error {}
