use super::{Coalition, ExtensionFamily};

/// Counts the swingers of a coalition.
///
/// An argument of the coalition is a swinger if the coalition deprived of it does not belong to the family.
/// Each argument is counted once, whatever the status of the coalition itself.
///
/// # Example
///
/// ```
/// # use argrank::coalitions::{count_swingers, Coalition, ExtensionFamily};
/// let family = ExtensionFamily::new(vec![Coalition::new(vec![0, 1]), Coalition::new(vec![1])]);
/// // removing 0 gives {1}, which is winning; removing 1 gives {0}, which is not
/// assert_eq!(1, count_swingers(&Coalition::new(vec![0, 1]), &family));
/// ```
pub fn count_swingers(coalition: &Coalition, family: &ExtensionFamily) -> usize {
    coalition
        .iter()
        .filter(|id| !family.contains(&coalition.without(*id)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(coalitions: &[&[usize]]) -> ExtensionFamily {
        coalitions.iter().map(|c| Coalition::new(c.to_vec())).collect()
    }

    #[test]
    fn test_empty_coalition_has_no_swinger() {
        assert_eq!(0, count_swingers(&Coalition::empty(), &family(&[&[]])));
        assert_eq!(0, count_swingers(&Coalition::empty(), &family(&[])));
    }

    #[test]
    fn test_majority_game() {
        let f = family(&[&[0, 1], &[0, 2], &[1, 2], &[0, 1, 2]]);
        assert_eq!(2, count_swingers(&Coalition::new(vec![0, 1]), &f));
        assert_eq!(0, count_swingers(&Coalition::new(vec![0, 1, 2]), &f));
        assert_eq!(1, count_swingers(&Coalition::new(vec![2]), &f));
    }

    #[test]
    fn test_losing_coalition_still_counts() {
        let f = family(&[&[0]]);
        assert_eq!(1, count_swingers(&Coalition::new(vec![0, 1]), &f));
        assert_eq!(3, count_swingers(&Coalition::new(vec![1, 2, 3]), &f));
    }

    #[test]
    fn test_repeated_members_counted_once() {
        let f = family(&[&[1]]);
        assert_eq!(1, count_swingers(&Coalition::new(vec![0, 0, 1]), &f));
    }
}
