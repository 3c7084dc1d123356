use crate::error::RankingError;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// Simple types like [usize] and [String] implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use argrank::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// Ids are dense: in a set of `n` arguments, they range from `0` to `n-1`.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// The set is built once and never modified; the players of the coalitional games are its arguments.
#[derive(Debug, Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    ///
    /// # Example
    ///
    /// ```
    /// # use argrank::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c", "a"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels.iter().for_each(|l| {
            let arguments = &mut argument_set.arguments;
            argument_set
                .label_to_id
                .entry(l.clone())
                .or_insert_with(|| {
                    arguments.push(Argument {
                        id: arguments.len(),
                        label: l.clone(),
                    });
                    arguments.len() - 1
                });
        });
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use argrank::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert!(!arguments.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argrank::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument associated to an argument label.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.get_argument_index(label)
            .map(|i| &self.arguments[i])
    }

    /// Returns the ids of the arguments which labels are given, in the same order.
    ///
    /// This is the way coalitions given by labels are translated into id lists.
    /// A label that does not belong to this set raises a [`RankingError::MalformedCoalition`] error.
    pub fn get_argument_indices(&self, labels: &[T]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|l| {
                self.label_to_id.get(l).copied().ok_or_else(|| {
                    anyhow!(RankingError::MalformedCoalition(format!(
                        "unknown argument {}",
                        l
                    )))
                })
            })
            .collect()
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    ///
    /// # Example
    ///
    /// ```
    /// # use argrank::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(&labels[1], arguments.get_argument_by_id(1).label());
    /// ```
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator to the arguments, in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.arguments.len());
        assert_eq!(3, args.label_to_id.len());
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.arguments.iter().enumerate() {
            assert_eq!(i, a.id);
            assert_eq!(arg_labels[i], a.label);
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.len());
        assert_eq!(1, args.get_argument(&"b".to_string()).unwrap().id());
    }

    #[test]
    fn test_iter_keeps_order() {
        let arg_labels = vec!["c", "a", "b"];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let iter_labels = args.iter().map(|a| *a.label()).collect::<Vec<&str>>();
        assert_eq!(arg_labels, iter_labels);
    }

    #[test]
    fn test_get_argument_indices() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        assert_eq!(vec![2, 0], args.get_argument_indices(&["c", "a"]).unwrap());
        assert!(args.get_argument_indices(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_get_argument_indices_unknown_label() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let err = args.get_argument_indices(&["a", "z"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RankingError>(),
            Some(RankingError::MalformedCoalition(_))
        ));
    }
}
