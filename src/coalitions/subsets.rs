use super::Coalition;

/// An iterator over all the coalitions that do not contain a given argument.
///
/// Given a framework of `n` arguments (with ids `0` to `n-1`) and an excluded argument,
/// the iterator produces the `2^(n-1)` subsets of the other arguments, each of them exactly once.
/// These coalitions are the ones over which marginal contributions of the excluded argument are summed.
///
/// Subsets are produced by counting in binary over the other arguments, starting with the empty coalition.
///
/// # Example
///
/// ```
/// # use argrank::coalitions::{Coalition, SubsetEnumerator};
/// let subsets = SubsetEnumerator::new(1, 3).collect::<Vec<Coalition>>();
/// assert_eq!(
///     vec![
///         Coalition::empty(),
///         Coalition::new(vec![0]),
///         Coalition::new(vec![2]),
///         Coalition::new(vec![0, 2]),
///     ],
///     subsets
/// );
/// ```
pub struct SubsetEnumerator {
    others: Vec<usize>,
    selected: Option<Vec<bool>>,
}

impl SubsetEnumerator {
    /// Builds the enumerator of the coalitions of arguments `0..n_arguments` that do not contain `excluded`.
    pub fn new(excluded: usize, n_arguments: usize) -> Self {
        let others = (0..n_arguments)
            .filter(|id| *id != excluded)
            .collect::<Vec<usize>>();
        let selected = Some(vec![false; others.len()]);
        SubsetEnumerator { others, selected }
    }

    fn increment(selected: &mut [bool]) -> bool {
        for bit in selected.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

impl Iterator for SubsetEnumerator {
    type Item = Coalition;

    fn next(&mut self) -> Option<Self::Item> {
        let selected = self.selected.as_mut()?;
        let coalition = Coalition::from_sorted_ids(
            self.others
                .iter()
                .zip(selected.iter())
                .filter_map(|(id, s)| if *s { Some(*id) } else { None })
                .collect(),
        );
        if !Self::increment(selected) {
            self.selected = None;
        }
        Some(coalition)
    }
}
