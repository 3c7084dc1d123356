use crate::aa::{Argument, LabelType};

/// The relation between two consecutive arguments of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The first argument is strictly preferred to the second one.
    Strict,
    /// Both arguments are equally ranked.
    Indifferent,
}

impl Preference {
    /// Returns the symbol used to display the relation.
    pub fn symbol(&self) -> char {
        match self {
            Preference::Strict => '\u{227B}',
            Preference::Indifferent => '\u{2243}',
        }
    }
}

/// A trait for objects that render a ranking, like a graph visualizer coloring its nodes.
///
/// The listener is given, for each argument, the tier it belongs to and the total number of tiers,
/// so that it can assign colors over the tiers.
/// It is also told whether the IN value of the argument is non-negative.
pub trait RankListener<T>
where
    T: LabelType,
{
    /// Called once for each ranked argument, in rank order.
    fn apply_rank(
        &mut self,
        argument: &Argument<T>,
        tier: usize,
        n_tiers: usize,
        is_non_negative_in: bool,
    );
}
