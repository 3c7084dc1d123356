use super::PowerIndexComputer;
use crate::{
    aa::{Argument, LabelType},
    coalitions::{count_swingers, ExtensionFamily, SubsetEnumerator},
};

/// The Johnston index.
///
/// The marginal contribution of an argument `i` to a coalition `S` is shared among the swingers of `S ∪ {i}`.
/// Coalitions `S ∪ {i}` without swingers do not contribute.
pub struct JohnstonIndex<'a> {
    n_arguments: usize,
    family: &'a ExtensionFamily,
}

impl<'a> JohnstonIndex<'a> {
    /// Builds the index for a game over `n_arguments` arguments which winning coalitions are given by the family.
    pub fn new(n_arguments: usize, family: &'a ExtensionFamily) -> Self {
        JohnstonIndex {
            n_arguments,
            family,
        }
    }
}

impl<T> PowerIndexComputer<T> for JohnstonIndex<'_>
where
    T: LabelType,
{
    fn power_index(&self, argument: &Argument<T>) -> f64 {
        let id = argument.id();
        SubsetEnumerator::new(id, self.n_arguments)
            .filter_map(|s| {
                let with_arg = s.with(id);
                match count_swingers(&with_arg, self.family) {
                    0 => None,
                    n_swingers => {
                        Some(self.family.marginal_contribution(&s, id) / n_swingers as f64)
                    }
                }
            })
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
        let index = JohnstonIndex::new(n, f);
        arguments.iter().map(|a| index.power_index(a)).collect()
    }

    #[test]
    fn test_majority_game() {
        let f = family(&[&[0, 1], &[0, 2], &[1, 2], &[0, 1, 2]]);
        assert_eq!(vec![1., 1., 1.], indices(3, &f));
    }

    #[test]
    fn test_weighted_majority() {
        let f = family(&[&[0, 1], &[0, 2], &[0, 1, 2]]);
        assert_eq!(vec![2., 0.5, 0.5], indices(3, &f));
    }

    #[test]
    fn test_dictator() {
        let f = family(&[&[0], &[0, 1]]);
        assert_eq!(vec![2., 0.], indices(2, &f));
    }

    #[test]
    fn test_no_swinger_skipped() {
        // {0} has no swinger since the empty coalition is winning
        let f = family(&[&[], &[0]]);
        assert_eq!(vec![0., -1.], indices(2, &f));
    }
}
