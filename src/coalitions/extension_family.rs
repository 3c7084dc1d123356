use super::Coalition;
use std::collections::HashSet;

/// A family of coalitions, considered as the winning coalitions of a simple game.
///
/// The family induces the characteristic function of the game: a coalition gets a payoff of `1` if it belongs to the family, `0` otherwise.
/// Membership is decided by coalition equality, so neither the order nor the repetitions of arguments matter.
///
/// The coalitions are kept in the order they were given, including repeated ones.
/// An index of the coalitions is maintained so that payoffs are computed in constant time.
///
/// ```
/// # use argrank::coalitions::{Coalition, ExtensionFamily};
/// let family = ExtensionFamily::new(vec![Coalition::new(vec![0, 1]), Coalition::empty()]);
/// assert_eq!(1, family.payoff(&Coalition::new(vec![1, 0])));
/// assert_eq!(1, family.payoff(&Coalition::empty()));
/// assert_eq!(0, family.payoff(&Coalition::new(vec![1])));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExtensionFamily {
    coalitions: Vec<Coalition>,
    index: HashSet<Coalition>,
}

impl ExtensionFamily {
    /// Builds a family from its coalitions, which are kept as given.
    pub fn new(coalitions: Vec<Coalition>) -> Self {
        let index = coalitions.iter().cloned().collect();
        ExtensionFamily { coalitions, index }
    }

    /// Builds a family from coalitions, keeping only the first occurrence of repeated coalitions.
    pub fn new_without_duplicates<I>(coalitions: I) -> Self
    where
        I: IntoIterator<Item = Coalition>,
    {
        let mut family = ExtensionFamily::default();
        coalitions.into_iter().for_each(|c| {
            family.push_if_absent(c);
        });
        family
    }

    fn push_if_absent(&mut self, coalition: Coalition) -> bool {
        if self.index.insert(coalition.clone()) {
            self.coalitions.push(coalition);
            true
        } else {
            false
        }
    }

    /// Returns this family, in which the empty coalition has been appended if it was absent.
    pub fn with_empty_coalition(mut self) -> Self {
        self.push_if_absent(Coalition::empty());
        self
    }

    /// Returns `true` iff a coalition of the family is equal to the given one.
    pub fn contains(&self, coalition: &Coalition) -> bool {
        self.index.contains(coalition)
    }

    /// Returns `true` iff the empty coalition belongs to the family.
    pub fn contains_empty_coalition(&self) -> bool {
        self.contains(&Coalition::empty())
    }

    /// The characteristic function of the game: `1` if the coalition belongs to the family, else `0`.
    pub fn payoff(&self, coalition: &Coalition) -> u8 {
        u8::from(self.contains(coalition))
    }

    /// Returns the marginal contribution of an argument to a coalition, that is `v(S ∪ {i}) - v(S)`.
    ///
    /// The result is `-1`, `0` or `1`.
    pub fn marginal_contribution(&self, coalition: &Coalition, id: usize) -> f64 {
        f64::from(self.payoff(&coalition.with(id))) - f64::from(self.payoff(coalition))
    }

    /// Returns the number of coalitions in the family, counting repetitions.
    pub fn len(&self) -> usize {
        self.coalitions.len()
    }

    /// Returns `true` iff the family has no coalition.
    pub fn is_empty(&self) -> bool {
        self.coalitions.is_empty()
    }

    /// Iterates over the coalitions, in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &Coalition> + '_ {
        self.coalitions.iter()
    }
}

impl FromIterator<Coalition> for ExtensionFamily {
    fn from_iter<I: IntoIterator<Item = Coalition>>(iter: I) -> Self {
        ExtensionFamily::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(coalitions: &[&[usize]]) -> ExtensionFamily {
        coalitions.iter().map(|c| Coalition::new(c.to_vec())).collect()
    }

    #[test]
    fn test_contains_is_order_independent() {
        let f = family(&[&[2, 0, 1]]);
        assert!(f.contains(&Coalition::new(vec![0, 1, 2])));
        assert!(f.contains(&Coalition::new(vec![1, 2, 0, 1])));
        assert!(!f.contains(&Coalition::new(vec![0, 1])));
    }

    #[test]
    fn test_empty_family() {
        let f = ExtensionFamily::default();
        assert!(f.is_empty());
        assert_eq!(0, f.payoff(&Coalition::empty()));
        assert!(!f.contains_empty_coalition());
    }

    #[test]
    fn test_input_duplicates_are_kept() {
        let f = family(&[&[0], &[0], &[1]]);
        assert_eq!(3, f.len());
    }

    #[test]
    fn test_new_without_duplicates() {
        let f = ExtensionFamily::new_without_duplicates(vec![
            Coalition::new(vec![1, 0]),
            Coalition::new(vec![0, 1]),
            Coalition::empty(),
            Coalition::empty(),
        ]);
        assert_eq!(
            vec![&Coalition::new(vec![0, 1]), &Coalition::empty()],
            f.iter().collect::<Vec<&Coalition>>()
        );
    }

    #[test]
    fn test_with_empty_coalition() {
        let f = family(&[&[0]]).with_empty_coalition();
        assert_eq!(2, f.len());
        assert!(f.contains_empty_coalition());
        let f = f.with_empty_coalition();
        assert_eq!(2, f.len());
    }

    #[test]
    fn test_marginal_contribution() {
        let f = family(&[&[0, 1], &[2]]);
        assert_eq!(1., f.marginal_contribution(&Coalition::new(vec![1]), 0));
        assert_eq!(0., f.marginal_contribution(&Coalition::new(vec![1]), 2));
        assert_eq!(-1., f.marginal_contribution(&Coalition::new(vec![2]), 0));
        assert_eq!(0., f.marginal_contribution(&Coalition::new(vec![0, 1]), 0));
    }
}
