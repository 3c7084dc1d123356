use super::PowerIndexComputer;
use crate::{
    aa::{Argument, LabelType},
    coalitions::ExtensionFamily,
    error::RankingError,
};
use anyhow::Result;

/// The Deegan-Packel index.
///
/// The index relies on a set `M` of minimal winning coalitions.
/// For each coalition of `M` containing the argument `i`, the coalition `S'` obtained by removing `i`
/// contributes `(v(S' ∪ {i}) - v(S')) / |S'|` if it is not empty.
/// The sum of these contributions is divided by `|M|`, the total number of minimal winning coalitions
/// (and not by the number of those containing `i`).
///
/// The characteristic function `v` is the one of the full family of winning coalitions.
pub struct DeeganPackelIndex<'a> {
    family: &'a ExtensionFamily,
    minimal_winnings: ExtensionFamily,
}

impl<'a> DeeganPackelIndex<'a> {
    /// Builds the index given the family of winning coalitions and the set of minimal winning ones.
    ///
    /// An error is returned if the set of minimal winning coalitions is empty.
    pub fn new(family: &'a ExtensionFamily, minimal_winnings: ExtensionFamily) -> Result<Self> {
        if minimal_winnings.is_empty() {
            return Err(RankingError::DegenerateCoalitionStructure.into());
        }
        Ok(DeeganPackelIndex {
            family,
            minimal_winnings,
        })
    }
}

impl<T> PowerIndexComputer<T> for DeeganPackelIndex<'_>
where
    T: LabelType,
{
    fn power_index(&self, argument: &Argument<T>) -> f64 {
        let id = argument.id();
        let sum: f64 = self
            .minimal_winnings
            .iter()
            .filter(|m| m.contains(id))
            .map(|m| m.without(id))
            .filter(|s| !s.is_empty())
            .map(|s| self.family.marginal_contribution(&s, id) / s.len() as f64)
            .sum();
        sum / self.minimal_winnings.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use crate::coalitions::{minimal_winnings, Coalition};

    fn family(coalitions: &[&[usize]]) -> ExtensionFamily {
        coalitions.iter().map(|c| Coalition::new(c.to_vec())).collect()
    }

    fn indices(n: usize, f: &ExtensionFamily, m: ExtensionFamily) -> Vec<f64> {
        let labels = (1..=n).collect::<Vec<usize>>();
        let arguments = ArgumentSet::new_with_labels(&labels);
        let index = DeeganPackelIndex::new(f, m).unwrap();
        arguments.iter().map(|a| index.power_index(a)).collect()
    }

    #[test]
    fn test_singleton_minimal_coalitions_do_not_contribute() {
        let f = family(&[&[0], &[1, 2], &[0, 1]]);
        let m = minimal_winnings(&f).with_empty_coalition();
        assert_eq!(3, m.len());
        let values = indices(3, &f, m);
        assert_eq!(0., values[0]);
        assert!((values[1] - 1. / 3.).abs() < 1e-12);
        assert!((values[2] - 1. / 3.).abs() < 1e-12);
    }

    #[test]
    fn test_majority_game() {
        let f = family(&[&[0, 1], &[0, 2], &[1, 2], &[0, 1, 2]]);
        let m = minimal_winnings(&f).with_empty_coalition();
        assert_eq!(vec![0.5, 0.5, 0.5], indices(3, &f, m));
    }

    #[test]
    fn test_empty_coalition_only() {
        let f = family(&[&[], &[0]]);
        let m = minimal_winnings(&f).with_empty_coalition();
        assert_eq!(vec![0., 0.], indices(2, &f, m));
    }

    #[test]
    fn test_negative_contribution() {
        // {0,1} is declared minimal but only {1} is winning in the game
        let f = family(&[&[1]]);
        let m = family(&[&[0, 1]]);
        assert_eq!(vec![-1., 0.], indices(2, &f, m));
    }

    #[test]
    fn test_degenerate_structure() {
        let f = family(&[&[0]]);
        let err = DeeganPackelIndex::new(&f, ExtensionFamily::default())
            .err()
            .unwrap();
        assert_eq!(
            Some(&RankingError::DegenerateCoalitionStructure),
            err.downcast_ref::<RankingError>()
        );
    }
}
