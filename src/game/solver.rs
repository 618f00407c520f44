use crate::*;

/// Find positions whose values add up to `goal` exactly.
///
/// 0/1 subset-sum over `values`, remembering for each reachable sum the
/// position that first reached it. Positions in the result are ascending.
pub fn solve(values: &[Value], goal: Value) -> Option<Vec<Position>> {
    let goal = goal as usize;
    let mut reached = vec![None::<(usize, Position)>; goal + 1];
    let mut reachable = vec![false; goal + 1];
    reachable[0] = true;
    for (position, &value) in values.iter().enumerate() {
        let value = value as usize;
        if value == 0 || value > goal {
            continue;
        }
        // descending so each position is used at most once
        for sum in (value..=goal).rev() {
            if !reachable[sum] && reachable[sum - value] {
                reachable[sum] = true;
                reached[sum] = Some((sum - value, position));
            }
        }
    }
    if !reachable[goal] {
        return None;
    }
    let mut picks = Vec::new();
    let mut sum = goal;
    while sum > 0 {
        let (prev, position) = reached[sum]?;
        picks.push(position);
        sum = prev;
    }
    picks.reverse();
    Some(picks)
}
