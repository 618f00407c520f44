use crate::*;
use crate::game::*;

/// Room → player. Every event is tagged with the round it belongs to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// fresh session dealt
    Start { round: Round, view: View },
    /// state after an accepted tick or selection
    Update { round: Round, view: View },
    /// delayed one-shot announcement of a terminal transition;
    /// `last` means the room closes right after and will not deal again
    Ended {
        round: Round,
        status: Status,
        last: bool,
    },
}

/// Player → room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Select { round: Round, position: Position },
    Again,
    Quit,
}

impl Event {
    pub fn round(&self) -> Round {
        match self {
            Self::Start { round, .. } | Self::Update { round, .. } | Self::Ended { round, .. } => {
                *round
            }
        }
    }
    pub fn view(&self) -> Option<&View> {
        match self {
            Self::Start { view, .. } | Self::Update { view, .. } => Some(view),
            Self::Ended { .. } => None,
        }
    }
    pub fn is_view(&self) -> bool {
        self.view().is_some()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start { round, view } => write!(f, "Round #{} {}", round, view),
            Self::Update { round, view } => write!(f, "Round #{} {}", round, view),
            Self::Ended { round, status, .. } => write!(
                f,
                "Round #{} {}: {}",
                round,
                status.title().unwrap_or_default(),
                status.message().unwrap_or_default()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_serializes_with_tag() {
        let event = Event::Ended {
            round: 3,
            status: Status::Lost,
            last: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "ended");
        assert_eq!(json["round"], 3);
        assert_eq!(json["status"], "LOST");
        assert_eq!(json["last"], true);
    }

    #[test]
    fn view_events_carry_view() {
        let deal = Deal::try_from((vec![2, 3, 4], vec![0, 1, 2])).unwrap();
        let view = Session::deal(deal, 5).unwrap().view();
        let event = Event::Start { round: 1, view };
        assert!(event.is_view());
        assert_eq!(event.round(), 1);
        assert_eq!(event.view().map(|v| v.target), Some(2));
    }
}
