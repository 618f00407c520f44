use crate::*;

/// Round outcome. `Playing` is the only non-terminal state;
/// nothing leaves `Won` or `Lost`.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    /// Pure status rule. Expiry is checked first, so an exact match
    /// on the last second still loses.
    pub fn evaluate(sum: Value, target: Value, remaining: Seconds) -> Self {
        if remaining == 0 {
            Self::Lost
        } else if sum == target {
            Self::Won
        } else if sum > target {
            Self::Lost
        } else {
            Self::Playing
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
    pub fn is_terminal(&self) -> bool {
        !self.is_playing()
    }

    /// modal heading shown when the round ends
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Won => Some("Congratulations!"),
            Self::Lost => Some("Game Over"),
        }
    }
    /// modal body shown when the round ends
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Won => Some("You have successfully matched the target!"),
            Self::Lost => Some("You ran out of time or exceeded the target."),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "PLAYING"),
            Self::Won => write!(f, "WON"),
            Self::Lost => write!(f, "LOST"),
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "PLAYING" => Ok(Self::Playing),
            "WON" => Ok(Self::Won),
            "LOST" => Ok(Self::Lost),
            _ => Err("invalid status"),
        }
    }
}
