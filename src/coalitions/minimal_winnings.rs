use super::{Coalition, ExtensionFamily};

/// Computes the minimal winning coalitions of a family.
///
/// If the empty coalition belongs to the family, it is the only minimal winning coalition.
/// Otherwise, a coalition is kept unless another coalition of the family is a strict subset of it.
/// Coalitions are kept in the order of the family; repeated coalitions are kept as many times as they appear.
///
/// # Example
///
/// ```
/// # use argrank::coalitions::{minimal_winnings, Coalition, ExtensionFamily};
/// let family = ExtensionFamily::new(vec![
///     Coalition::new(vec![0, 1]),
///     Coalition::new(vec![1]),
///     Coalition::new(vec![2, 0]),
/// ]);
/// let minimal = minimal_winnings(&family);
/// assert_eq!(
///     vec![&Coalition::new(vec![1]), &Coalition::new(vec![0, 2])],
///     minimal.iter().collect::<Vec<_>>()
/// );
/// ```
pub fn minimal_winnings(family: &ExtensionFamily) -> ExtensionFamily {
    if family.contains_empty_coalition() {
        return ExtensionFamily::new(vec![Coalition::empty()]);
    }
    family
        .iter()
        .filter(|c1| {
            !family
                .iter()
                .any(|c2| c2.len() < c1.len() && c2.is_subset_of(c1))
        })
        .cloned()
        .collect()
}
