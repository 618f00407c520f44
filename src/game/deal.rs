use super::config::Config;
use super::error::Error;
use crate::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// The numbers of one round, fixed at creation.
///
/// `values` are kept in generation order, which only matters for the target.
/// `order` maps each display position to a generation index; everything the
/// player sees and selects is addressed by display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    values: Vec<Value>,
    order: Vec<usize>,
}

impl Deal {
    /// draw `count` uniform values from MIN_VALUE to MAX_VALUE and shuffle their display order
    pub fn draw<R>(count: usize, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        Config::check_count(count)?;
        let values = (0..count)
            .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
            .collect::<Vec<Value>>();
        let mut order = (0..count).collect::<Vec<usize>>();
        order.shuffle(rng);
        Ok(Self { values, order })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// sum of everything but the last two generated values
    pub fn target(&self) -> Value {
        self.values
            .iter()
            .take(self.len().saturating_sub(RESERVED_TAIL))
            .sum()
    }

    /// values in generation order
    pub fn generated(&self) -> &[Value] {
        &self.values
    }

    /// value shown at a display position
    pub fn value(&self, position: Position) -> Option<Value> {
        self.order
            .get(position)
            .and_then(|&i| self.values.get(i))
            .copied()
    }

    /// values in display order
    pub fn displayed(&self) -> impl Iterator<Item = Value> + '_ {
        self.order.iter().map(|&i| self.values[i])
    }

    /// generation index behind a display position
    pub fn origin(&self, position: Position) -> Option<usize> {
        self.order.get(position).copied()
    }
}

impl TryFrom<(Vec<Value>, Vec<usize>)> for Deal {
    type Error = Error;
    fn try_from((values, order): (Vec<Value>, Vec<usize>)) -> Result<Self, Self::Error> {
        Config::check_count(values.len())?;
        if let Some(v) = values
            .iter()
            .find(|v| !(MIN_VALUE..=MAX_VALUE).contains(*v))
        {
            return Err(Error::InvalidConfiguration(format!(
                "value {} outside {}..={}",
                v, MIN_VALUE, MAX_VALUE
            )));
        }
        if order.len() != values.len() {
            return Err(Error::InvalidConfiguration(String::from(
                "display order is not a permutation",
            )));
        }
        let mut seen = vec![false; values.len()];
        for &i in order.iter() {
            if i >= seen.len() || seen[i] {
                return Err(Error::InvalidConfiguration(String::from(
                    "display order is not a permutation",
                )));
            }
            seen[i] = true;
        }
        Ok(Self { values, order })
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} <- [{}]",
            self.target(),
            self.displayed()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn target_ignores_last_two() {
        let deal = Deal::try_from((vec![3, 5, 2, 4, 1, 7], vec![5, 4, 3, 2, 1, 0])).unwrap();
        assert_eq!(deal.target(), 14);
    }

    #[test]
    fn target_independent_of_shuffle() {
        let values = vec![3, 5, 2, 4, 1, 7];
        let a = Deal::try_from((values.clone(), vec![0, 1, 2, 3, 4, 5])).unwrap();
        let b = Deal::try_from((values.clone(), vec![2, 0, 5, 1, 3, 4])).unwrap();
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn pair_has_empty_target() {
        let deal = Deal::try_from((vec![5, 5], vec![1, 0])).unwrap();
        assert_eq!(deal.target(), 0);
    }

    #[test]
    fn shuffled_values_are_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for count in 2..32 {
            let deal = Deal::draw(count, rng).unwrap();
            let mut shown = deal.displayed().collect::<Vec<_>>();
            let mut made = deal.generated().to_vec();
            shown.sort();
            made.sort();
            assert_eq!(shown, made);
            let mut origins = (0..count).filter_map(|p| deal.origin(p)).collect::<Vec<_>>();
            origins.sort();
            assert_eq!(origins, (0..count).collect::<Vec<_>>());
        }
    }

    #[test]
    fn random_values_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let deal = Deal::draw(512, rng).unwrap();
        assert!(deal.generated().iter().all(|v| (1..=10).contains(v)));
        assert!(deal.generated().contains(&1));
        assert!(deal.generated().contains(&10));
    }

    #[test]
    fn random_target_is_prefix_sum() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        for count in 3..16 {
            let deal = Deal::draw(count, rng).unwrap();
            let prefix = deal.generated()[..count - 2].iter().sum::<Value>();
            assert_eq!(deal.target(), prefix);
        }
    }

    #[test]
    fn seeded_deals_repeat() {
        let a = Deal::draw(6, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = Deal::draw(6, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_single_value() {
        assert!(Deal::draw(1, &mut SmallRng::seed_from_u64(0)).is_err());
        assert!(Deal::try_from((vec![4], vec![0])).is_err());
    }

    #[test]
    fn rejects_bad_order() {
        assert!(Deal::try_from((vec![1, 2, 3], vec![0, 0, 1])).is_err());
        assert!(Deal::try_from((vec![1, 2, 3], vec![0, 1])).is_err());
        assert!(Deal::try_from((vec![1, 2, 3], vec![0, 1, 3])).is_err());
    }

    #[test]
    fn rejects_out_of_range_value() {
        assert!(Deal::try_from((vec![0, 2, 3], vec![0, 1, 2])).is_err());
        assert!(Deal::try_from((vec![11, 2, 3], vec![0, 1, 2])).is_err());
    }

    #[test]
    fn value_follows_display_order() {
        let deal = Deal::try_from((vec![3, 5, 2], vec![2, 0, 1])).unwrap();
        assert_eq!(deal.value(0), Some(2));
        assert_eq!(deal.value(1), Some(3));
        assert_eq!(deal.value(2), Some(5));
        assert_eq!(deal.value(3), None);
    }
}
