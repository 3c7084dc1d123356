use super::PowerIndexComputer;
use crate::{
    aa::{Argument, LabelType},
    coalitions::{ExtensionFamily, SubsetEnumerator},
};

/// The Shapley-Shubik index.
///
/// The marginal contribution of an argument `i` to a coalition `S` is weighted by `|S|!(n-|S|-1)!/n!`,
/// that is the probability for the members of `S` to come just before `i` in a random ordering of the arguments.
///
/// # Example
///
/// ```
/// # use argrank::aa::ArgumentSet;
/// # use argrank::coalitions::{Coalition, ExtensionFamily};
/// # use argrank::indices::{PowerIndexComputer, ShapleyShubikIndex};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let family = ExtensionFamily::new(vec![Coalition::new(vec![0]), Coalition::new(vec![0, 1])]);
/// let index = ShapleyShubikIndex::new(arguments.len(), &family);
/// assert_eq!(1., index.power_index(arguments.get_argument_by_id(0)));
/// assert_eq!(0., index.power_index(arguments.get_argument_by_id(1)));
/// ```
pub struct ShapleyShubikIndex<'a> {
    n_arguments: usize,
    family: &'a ExtensionFamily,
    factorials: Vec<f64>,
}

impl<'a> ShapleyShubikIndex<'a> {
    /// Builds the index for a game over `n_arguments` arguments which winning coalitions are given by the family.
    pub fn new(n_arguments: usize, family: &'a ExtensionFamily) -> Self {
        let mut factorials = Vec::with_capacity(n_arguments + 1);
        factorials.push(1.);
        for k in 1..=n_arguments {
            factorials.push(factorials[k - 1] * k as f64);
        }
        ShapleyShubikIndex {
            n_arguments,
            family,
            factorials,
        }
    }
}

impl<T> PowerIndexComputer<T> for ShapleyShubikIndex<'_>
where
    T: LabelType,
{
    fn power_index(&self, argument: &Argument<T>) -> f64 {
        let n = self.n_arguments;
        SubsetEnumerator::new(argument.id(), n)
            .map(|s| {
                let gain = self.family.marginal_contribution(&s, argument.id());
                gain * self.factorials[s.len()] * self.factorials[n - s.len() - 1]
                    / self.factorials[n]
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

    fn assert_indices(expected: &[f64], n: usize, f: &ExtensionFamily) {
        let labels = (1..=n).collect::<Vec<usize>>();
        let arguments = ArgumentSet::new_with_labels(&labels);
        let index = ShapleyShubikIndex::new(n, f);
        let actual = arguments
            .iter()
            .map(|a| index.power_index(a))
            .collect::<Vec<f64>>();
        assert_eq!(expected.len(), actual.len());
        expected
            .iter()
            .zip(actual.iter())
            .for_each(|(e, a)| assert!((e - a).abs() < 1e-12, "expected {:?}, got {:?}", expected, actual));
    }

    #[test]
    fn test_majority_game() {
        let f = family(&[&[0, 1], &[0, 2], &[1, 2], &[0, 1, 2]]);
        assert_indices(&[1. / 3., 1. / 3., 1. / 3.], 3, &f);
    }

    #[test]
    fn test_dictator() {
        let f = family(&[&[0], &[0, 1], &[0, 2], &[0, 1, 2]]);
        assert_indices(&[1., 0., 0.], 3, &f);
    }

    #[test]
    fn test_winning_singleton_only() {
        // {a,b} is not winning, so b loses value when joining {a}
        assert_indices(&[0.5, -0.5], 2, &family(&[&[0]]));
    }

    #[test]
    fn test_unanimity_game() {
        let f = family(&[&[0, 1, 2, 3]]);
        assert_indices(&[0.25, 0.25, 0.25, 0.25], 4, &f);
    }

    #[test]
    fn test_weighted_majority() {
        // weights 2, 1, 1 with quota 3
        let f = family(&[&[0, 1], &[0, 2], &[0, 1, 2]]);
        assert_indices(&[2. / 3., 1. / 6., 1. / 6.], 3, &f);
    }

    #[test]
    fn test_empty_coalition_winning() {
        assert_indices(&[-0.5, -0.5], 2, &family(&[&[]]));
    }

    #[test]
    fn test_no_winning_coalition() {
        assert_indices(&[0., 0.], 2, &ExtensionFamily::default());
    }

    #[test]
    fn test_single_argument() {
        assert_indices(&[1.], 1, &family(&[&[0]]));
        assert_indices(&[-1.], 1, &family(&[&[]]));
    }
}
