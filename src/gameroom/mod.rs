//! Async host for live rounds.
//!
//! - [`Room`] owns the [`Session`](crate::game::Session), the one-second
//!   [`Ticker`] and the delayed round-ended [`Notice`]
//! - [`Actor`] runs a single [`Player`] on its own task
//! - [`Event`] flows room → player, [`Input`] flows player → room
mod actor;
mod channel;
mod event;
mod player;
mod room;
mod timer;

pub mod players;

pub use actor::*;
pub use channel::*;
pub use event::*;
pub use player::*;
pub use players::*;
pub use room::*;
pub use timer::*;
