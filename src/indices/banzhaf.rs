use super::PowerIndexComputer;
use crate::{
    aa::{Argument, LabelType},
    coalitions::{ExtensionFamily, SubsetEnumerator},
};

/// The (raw) Banzhaf index.
///
/// Each coalition without the argument counts for `1/2^(n-1)` of the marginal contribution.
/// The values are not normalized, so they do not sum to one in general.
pub struct BanzhafIndex<'a> {
    n_arguments: usize,
    family: &'a ExtensionFamily,
}

impl<'a> BanzhafIndex<'a> {
    /// Builds the index for a game over `n_arguments` arguments which winning coalitions are given by the family.
    pub fn new(n_arguments: usize, family: &'a ExtensionFamily) -> Self {
        BanzhafIndex {
            n_arguments,
            family,
        }
    }
}

impl<T> PowerIndexComputer<T> for BanzhafIndex<'_>
where
    T: LabelType,
{
    fn power_index(&self, argument: &Argument<T>) -> f64 {
        let n_coalitions = 2f64.powi(self.n_arguments as i32 - 1);
        SubsetEnumerator::new(argument.id(), self.n_arguments)
            .map(|s| self.family.marginal_contribution(&s, argument.id()) / n_coalitions)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use crate::coalitions::Coalition;

    fn family(coalitions: &[&[usize]]) -> ExtensionFamily {
        coalitions.iter().map(|c| Coalition::new(c.to_vec())).collect()
    }

    fn indices(n: usize, f: &ExtensionFamily) -> Vec<f64> {
        let labels = (1..=n).collect::<Vec<usize>>();
        let arguments = ArgumentSet::new_with_labels(&labels);
        let index = BanzhafIndex::new(n, f);
        arguments.iter().map(|a| index.power_index(a)).collect()
    }

    #[test]
    fn test_majority_game() {
        let f = family(&[&[0, 1], &[0, 2], &[1, 2], &[0, 1, 2]]);
        assert_eq!(vec![0.5, 0.5, 0.5], indices(3, &f));
    }

    #[test]
    fn test_weighted_majority() {
        let f = family(&[&[0, 1], &[0, 2], &[0, 1, 2]]);
        assert_eq!(vec![0.75, 0.25, 0.25], indices(3, &f));
    }

    #[test]
    fn test_unanimity_game() {
        let f = family(&[&[0, 1, 2]]);
        assert_eq!(vec![0.25, 0.25, 0.25], indices(3, &f));
    }

    #[test]
    fn test_empty_coalition_winning() {
        assert_eq!(vec![-0.5, -0.5], indices(2, &family(&[&[]])));
    }

    #[test]
    fn test_single_argument() {
        assert_eq!(vec![1.], indices(1, &family(&[&[0]])));
    }
}
