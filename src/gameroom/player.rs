use super::event::*;
use crate::*;
use crate::game::*;

/// Anything that can tap numbers: a bot, a terminal prompt, a socket.
///
/// The room never waits on a player. Ticks keep arriving while `decide`
/// runs, so a slow answer may land after the round is over, in which case
/// the room drops it.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Pick a display position to tap, or `None` to wait for the next update.
    /// Only called while the view is `Playing`.
    async fn decide(&mut self, view: &View) -> Option<Position>;

    /// Receive every event addressed to this player, before any decision.
    async fn notify(&mut self, event: &Event);

    /// Ask whether to deal another round once this one was announced.
    async fn again(&mut self, status: Status) -> bool;
}
