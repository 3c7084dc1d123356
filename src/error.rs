//! The error kinds raised while computing a ranking.

use thiserror::Error;

/// The errors that make a ranking request fail as a whole.
///
/// Functions of this crate return [`anyhow::Result`] values;
/// when they fail for one of the reasons below, the underlying error can be retrieved with [`anyhow::Error::downcast_ref`].
///
/// ```
/// # use argrank::error::RankingError;
/// # use argrank::indices::PowerIndexKind;
/// let err = PowerIndexKind::try_from("XX").unwrap_err();
/// assert!(matches!(
///     err.downcast_ref::<RankingError>(),
///     Some(RankingError::UnknownIndexKind(_))
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// The power index selector is not one of `SV`, `BI`, `JI` or `DP`.
    #[error(r#"unknown power index "{0}"; expected one of SV, BI, JI, DP"#)]
    UnknownIndexKind(String),

    /// The framework has no argument, so the combinatorial terms are undefined.
    #[error("cannot compute power indices on a framework without arguments")]
    EmptyArgumentSet,

    /// The framework has too many arguments for the subsets of its arguments to be enumerated.
    #[error("cannot enumerate the coalitions of {0} arguments (at most 64 are allowed)")]
    TooManyArguments(usize),

    /// A coalition refers to something that is not an argument of the framework.
    #[error("malformed coalition: {0}")]
    MalformedCoalition(String),

    /// The set of minimal winning coalitions used by the Deegan-Packel index is empty.
    #[error("the set of minimal winning coalitions is empty")]
    DegenerateCoalitionStructure,
}
