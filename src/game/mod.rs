//! Single-round arithmetic matching puzzle.
//!
//! A [`Session`] is dealt a shuffled set of candidate numbers and a target,
//! then driven by two external events: a one-second [`Session::tick`] and a
//! player [`Session::select`]ing a number by display position. Both events
//! are synchronous and report the terminal transition, if any, to the host.
pub mod config;
pub use config::*;

pub mod deal;
pub use deal::*;

pub mod error;
pub use error::*;

pub mod session;
pub use session::*;

pub mod solver;
pub use solver::*;

pub mod status;
pub use status::*;

pub mod view;
pub use view::*;
