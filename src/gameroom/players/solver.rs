use crate::*;
use crate::game::*;
use crate::gameroom::*;

/// CPU player that searches the displayed numbers for an exact subset
/// and taps it one position per update.
#[derive(Debug, Default)]
pub struct Solver {
    plan: Vec<Position>,
    rounds: Option<usize>,
}

impl Solver {
    /// leave after this many rounds
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// positions that complete the target from what is already selected
    fn replan(view: &View) -> Vec<Position> {
        let goal = match view.target.checked_sub(view.sum()) {
            Some(goal) => goal,
            None => return Vec::new(),
        };
        let open = view.enabled().collect::<Vec<&Number>>();
        let values = open.iter().map(|n| n.value).collect::<Vec<Value>>();
        solve(&values, goal)
            .unwrap_or_default()
            .into_iter()
            .map(|i| open[i].position)
            .collect()
    }
}

#[async_trait::async_trait]
impl Player for Solver {
    async fn decide(&mut self, view: &View) -> Option<Position> {
        self.plan.retain(|&p| view.numbers.get(p).is_some_and(|n| !n.disabled));
        let pending = self.plan.iter().map(|&p| view.numbers[p].value).sum::<Value>();
        if view.sum() + pending != view.target {
            self.plan = Self::replan(view);
        }
        self.plan.first().copied()
    }

    async fn notify(&mut self, event: &Event) {
        if let Event::Start { .. } = event {
            self.plan.clear();
        }
    }

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
