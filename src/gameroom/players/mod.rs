mod echo;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod solver;

pub use echo::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use solver::*;
