use crate::*;
use crate::game::*;
use crate::gameroom::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;

/// CPU player that taps uniformly among the numbers still enabled.
/// Will overshoot the target more often than not.
pub struct Fish {
    rng: SmallRng,
    rounds: Option<usize>,
}

impl Fish {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng, rounds: None }
    }
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
    /// leave after this many rounds
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }
}

#[async_trait::async_trait]
impl Player for Fish {
    async fn decide(&mut self, view: &View) -> Option<Position> {
        view.enabled().map(|n| n.position).choose(&mut self.rng)
    }

    async fn notify(&mut self, _: &Event) {}

    async fn again(&mut self, _: Status) -> bool {
        match self.rounds.as_mut() {
            None => true,
            Some(left) => {
                *left = left.saturating_sub(1);
                *left > 0
            }
        }
    }
}
