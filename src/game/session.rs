use super::config::Config;
use super::deal::Deal;
use super::error::Error;
use super::status::Status;
use super::view::Number;
use super::view::View;
use crate::*;
use rand::Rng;

/// One round of the puzzle.
///
/// The deal is generated exactly once; re-rolling means dropping the
/// session and creating another. Mutation happens only through
/// [`Session::tick`] and [`Session::select`], and stops for good once the
/// status leaves `Playing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    deal: Deal,
    target: Value,
    seconds: Seconds,
    remaining: Seconds,
    selected: Vec<Position>,
    status: Status,
}

impl Session {
    pub fn create<R>(config: Config, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;
        let deal = Deal::draw(config.candidates, rng)?;
        Self::deal(deal, config.seconds)
    }

    /// start a session over a known deal
    pub fn deal(deal: Deal, seconds: Seconds) -> Result<Self, Error> {
        Config::check_seconds(seconds)?;
        Ok(Self {
            target: deal.target(),
            deal,
            seconds,
            remaining: seconds,
            selected: Vec::new(),
            status: Status::Playing,
        })
    }

    /// Advance the countdown by one second.
    /// Returns the new status only when this tick ended the round.
    pub fn tick(&mut self) -> Option<Status> {
        if self.status.is_terminal() {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.settle()
    }

    /// Record a tap on a display position.
    /// Returns the new status only when this tap ended the round.
    pub fn select(&mut self, position: Position) -> Result<Option<Status>, Error> {
        if position >= self.len() {
            return Err(Error::InvalidSelection {
                position,
                count: self.len(),
            });
        }
        if self.status.is_terminal() || self.is_selected(position) {
            return Ok(None);
        }
        self.selected.push(position);
        Ok(self.settle())
    }

    fn settle(&mut self) -> Option<Status> {
        let before = self.status;
        self.status = Status::evaluate(self.sum(), self.target, self.remaining);
        match (before, self.status) {
            (Status::Playing, Status::Playing) => None,
            (Status::Playing, after) => Some(after),
            _ => None,
        }
    }
}

impl Session {
    pub fn view(&self) -> View {
        View {
            target: self.target,
            remaining: self.remaining,
            status: self.status,
            numbers: self
                .deal
                .displayed()
                .enumerate()
                .map(|(position, value)| {
                    let selected = self.is_selected(position);
                    Number {
                        value,
                        position,
                        selected,
                        disabled: selected || self.status.is_terminal(),
                    }
                })
                .collect(),
        }
    }

    /// sum of the displayed values at the selected positions
    pub fn sum(&self) -> Value {
        self.selected
            .iter()
            .filter_map(|&p| self.deal.value(p))
            .sum()
    }
    pub fn is_selected(&self, position: Position) -> bool {
        self.selected.contains(&position)
    }
    pub fn value(&self, position: Position) -> Option<Value> {
        self.deal.value(position)
    }
    pub fn len(&self) -> usize {
        self.deal.len()
    }
    pub fn is_empty(&self) -> bool {
        self.deal.is_empty()
    }
    pub fn target(&self) -> Value {
        self.target
    }
    pub fn remaining(&self) -> Seconds {
        self.remaining
    }
    pub fn seconds(&self) -> Seconds {
        self.seconds
    }
    pub fn status(&self) -> Status {
        self.status
    }
    /// positions in the order they were tapped
    pub fn selected(&self) -> &[Position] {
        &self.selected
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.view())
    }
}
