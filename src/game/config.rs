use super::error::Error;
use crate::*;

/// Host-provided round parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub candidates: usize,
    pub seconds: Seconds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES,
            seconds: DEFAULT_SECONDS,
        }
    }
}

impl Config {
    pub fn new(candidates: usize, seconds: Seconds) -> Self {
        Self {
            candidates,
            seconds,
        }
    }

    /// at least two candidates and a one second countdown
    pub fn validate(&self) -> Result<(), Error> {
        Self::check_count(self.candidates)?;
        Self::check_seconds(self.seconds)
    }

    pub(crate) fn check_count(count: usize) -> Result<(), Error> {
        match count >= MIN_CANDIDATES {
            true => Ok(()),
            false => Err(Error::InvalidConfiguration(format!(
                "need at least {} candidates, got {}",
                MIN_CANDIDATES, count
            ))),
        }
    }

    pub(crate) fn check_seconds(seconds: Seconds) -> Result<(), Error> {
        match seconds >= 1 {
            true => Ok(()),
            false => Err(Error::InvalidConfiguration(String::from(
                "countdown must last at least one second",
            ))),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} numbers / {}s", self.candidates, self.seconds)
    }
}
