use crate::aa::{Argument, ArgumentSet, LabelType};
use anyhow::Result;
use std::fmt::Display;

/// A coalition, that is a set of arguments considered as the players of a game.
///
/// Coalitions are represented by the ids of their arguments.
/// These ids are kept sorted and without duplicates, so two coalitions are equal iff they contain the same arguments,
/// regardless of the order and the repetitions in which they were given.
///
/// ```
/// # use argrank::coalitions::Coalition;
/// assert_eq!(Coalition::new(vec![2, 0, 2]), Coalition::new(vec![0, 2]));
/// assert_ne!(Coalition::new(vec![0]), Coalition::empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coalition(Vec<usize>);

impl Coalition {
    /// Builds a coalition from argument ids, in any order and possibly repeated.
    pub fn new(mut ids: Vec<usize>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Coalition(ids)
    }

    /// Builds the empty coalition.
    pub fn empty() -> Self {
        Coalition(vec![])
    }

    /// Builds a coalition given the labels of its arguments.
    ///
    /// An error is returned if a label does not belong to the argument set.
    ///
    /// ```
    /// # use argrank::aa::ArgumentSet;
    /// # use argrank::coalitions::Coalition;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let coalition = Coalition::from_labels(&arguments, &["c", "a"]).unwrap();
    /// assert_eq!(Coalition::new(vec![0, 2]), coalition);
    /// assert!(Coalition::from_labels(&arguments, &["d"]).is_err());
    /// ```
    pub fn from_labels<T>(arguments: &ArgumentSet<T>, labels: &[T]) -> Result<Self>
    where
        T: LabelType,
    {
        arguments.get_argument_indices(labels).map(Coalition::new)
    }

    pub(crate) fn from_sorted_ids(ids: Vec<usize>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        Coalition(ids)
    }

    /// Returns the number of arguments in the coalition.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff this is the empty coalition.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` iff the argument with the given id belongs to the coalition.
    pub fn contains(&self, id: usize) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    /// Iterates over the ids of the arguments of the coalition, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns the ids of the arguments of the coalition, in increasing order.
    pub fn ids(&self) -> &[usize] {
        &self.0
    }

    /// Returns a copy of this coalition in which the argument with the given id is present.
    pub fn with(&self, id: usize) -> Self {
        match self.0.binary_search(&id) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut ids = Vec::with_capacity(self.0.len() + 1);
                ids.extend_from_slice(&self.0[..pos]);
                ids.push(id);
                ids.extend_from_slice(&self.0[pos..]);
                Coalition(ids)
            }
        }
    }

    /// Returns a copy of this coalition in which the argument with the given id is absent.
    pub fn without(&self, id: usize) -> Self {
        Coalition(self.0.iter().copied().filter(|i| *i != id).collect())
    }

    /// Returns `true` iff all the arguments of this coalition belong to the other one.
    ///
    /// ```
    /// # use argrank::coalitions::Coalition;
    /// assert!(Coalition::new(vec![1]).is_subset_of(&Coalition::new(vec![0, 1])));
    /// assert!(Coalition::empty().is_subset_of(&Coalition::empty()));
    /// assert!(!Coalition::new(vec![2]).is_subset_of(&Coalition::new(vec![0, 1])));
    /// ```
    pub fn is_subset_of(&self, other: &Coalition) -> bool {
        self.len() <= other.len() && self.0.iter().all(|id| other.contains(*id))
    }

    /// Returns the arguments of the coalition.
    pub fn arguments<'a, T>(&self, arguments: &'a ArgumentSet<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.0
            .iter()
            .map(|id| arguments.get_argument_by_id(*id))
            .collect()
    }
}

impl FromIterator<usize> for Coalition {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Coalition::new(iter.into_iter().collect())
    }
}

impl Display for Coalition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let ids = vec![3, 1, 4, 0];
        let reference = Coalition::new(ids.clone());
        for rotation in 0..ids.len() {
            let mut rotated = ids.clone();
            rotated.rotate_left(rotation);
            assert_eq!(reference, Coalition::new(rotated.clone()));
            rotated.reverse();
            assert_eq!(reference, Coalition::new(rotated));
        }
    }

    #[test]
    fn test_equality_ignores_duplicates() {
        assert_eq!(Coalition::new(vec![1, 1, 2]), Coalition::new(vec![2, 1]));
        assert_eq!(2, Coalition::new(vec![1, 1, 2]).len());
    }

    #[test]
    fn test_empty() {
        assert_eq!(Coalition::empty(), Coalition::new(vec![]));
        assert!(Coalition::empty().is_empty());
        assert_ne!(Coalition::empty(), Coalition::new(vec![0]));
    }

    #[test]
    fn test_with() {
        let c = Coalition::new(vec![0, 4]);
        assert_eq!(vec![0, 2, 4], c.with(2).ids());
        assert_eq!(vec![0, 4, 5], c.with(5).ids());
        assert_eq!(vec![0, 4], c.with(4).ids());
        assert_eq!(vec![1], Coalition::empty().with(1).ids());
    }

    #[test]
    fn test_without() {
        let c = Coalition::new(vec![0, 2, 4]);
        assert_eq!(vec![0, 4], c.without(2).ids());
        assert_eq!(vec![0, 2, 4], c.without(3).ids());
        assert!(Coalition::new(vec![1]).without(1).is_empty());
    }

    #[test]
    fn test_contains() {
        let c = Coalition::new(vec![5, 1]);
        assert!(c.contains(1));
        assert!(c.contains(5));
        assert!(!c.contains(3));
    }

    #[test]
    fn test_arguments() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let c = Coalition::from_labels(&args, &["c", "b", "c"]).unwrap();
        let labels = c
            .arguments(&args)
            .iter()
            .map(|a| *a.label())
            .collect::<Vec<&str>>();
        assert_eq!(vec!["b", "c"], labels);
    }

    #[test]
    fn test_display() {
        assert_eq!("{}", Coalition::empty().to_string());
        assert_eq!("{0,3}", Coalition::new(vec![3, 0]).to_string());
    }
}
