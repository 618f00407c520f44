use crate::*;
use crate::game::*;
use crate::gameroom::*;

/// Spectator that never taps and writes every event as a JSON line.
#[derive(Debug, Default)]
pub struct Echo;

impl Echo {
    /// single-line JSON encoding of an event
    pub fn line(event: &Event) -> serde_json::Result<String> {
        serde_json::to_string(event)
    }
}

#[async_trait::async_trait]
impl Player for Echo {
    async fn decide(&mut self, _: &View) -> Option<Position> {
        None
    }

    async fn notify(&mut self, event: &Event) {
        match Self::line(event) {
            Ok(line) => println!("{}", line),
            Err(e) => log::warn!("failed to encode {}: {}", event, e),
        }
    }

    async fn again(&mut self, _: Status) -> bool {
        true
    }
}
