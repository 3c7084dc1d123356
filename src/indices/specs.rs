use crate::aa::{Argument, LabelType};

/// A trait for objects able to compute a power index of the arguments.
///
/// A computer is built for a given game (a number of arguments and a family of winning coalitions)
/// and can then be queried for any argument of the framework.
pub trait PowerIndexComputer<T>
where
    T: LabelType,
{
    /// Computes the power index of an argument, at full precision.
    fn power_index(&self, argument: &Argument<T>) -> f64;
}
