use super::status::Status;
use crate::*;

/// One rendered candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Number {
    pub value: Value,
    pub position: Position,
    pub selected: bool,
    pub disabled: bool,
}

/// Everything a host needs to draw the board after an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct View {
    pub target: Value,
    pub numbers: Vec<Number>,
    pub remaining: Seconds,
    pub status: Status,
}

impl View {
    /// positions still open for selection
    pub fn enabled(&self) -> impl Iterator<Item = &Number> {
        self.numbers.iter().filter(|n| !n.disabled)
    }
    pub fn selected(&self) -> impl Iterator<Item = &Number> {
        self.numbers.iter().filter(|n| n.selected)
    }
    pub fn sum(&self) -> Value {
        self.selected().map(|n| n.value).sum()
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:>3} | {} | {}s",
            self.status,
            self.target,
            self.numbers
                .iter()
                .map(|n| match n.selected {
                    true => format!("({})", n.value),
                    false => format!(" {} ", n.value),
                })
                .collect::<Vec<_>>()
                .join(""),
            self.remaining
        )
    }
}
