use super::PowerIndexKind;
use crate::{
    aa::{AAFramework, Argument, LabelType},
    coalitions::ExtensionFamily,
    error::RankingError,
};
use anyhow::Result;
use log::{debug, info, warn};

/// The number of decimals of the displayed power index values.
pub const OUTPUT_DECIMALS: usize = 5;

/// The maximal number of arguments for which power indices may be computed.
pub const MAX_ARGUMENTS: usize = 64;

const LARGE_FRAMEWORK_WARNING_THRESHOLD: usize = 20;

/// Rounds a value to the number of decimals used to display it.
///
/// Negative zeros are turned into positive ones.
///
/// ```
/// # use argrank::indices::round_to_output_precision;
/// assert_eq!(0.33333, round_to_output_precision(1. / 3.));
/// assert_eq!(0., round_to_output_precision(-1e-12));
/// ```
pub fn round_to_output_precision(value: f64) -> f64 {
    let factor = 10f64.powi(OUTPUT_DECIMALS as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0. {
        0.
    } else {
        rounded
    }
}

/// The power index values of an argument, for the IN and the OUT families.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerIndexResult<'a, T>
where
    T: LabelType,
{
    argument: &'a Argument<T>,
    in_value: f64,
    out_value: f64,
}

impl<'a, T> PowerIndexResult<'a, T>
where
    T: LabelType,
{
    /// Builds a result given the argument and its values.
    pub fn new(argument: &'a Argument<T>, in_value: f64, out_value: f64) -> Self {
        PowerIndexResult {
            argument,
            in_value,
            out_value,
        }
    }

    /// Returns the argument.
    pub fn argument(&self) -> &'a Argument<T> {
        self.argument
    }

    /// Returns the value computed against the IN family, at full precision.
    pub fn in_value(&self) -> f64 {
        self.in_value
    }

    /// Returns the value computed against the OUT family, at full precision.
    pub fn out_value(&self) -> f64 {
        self.out_value
    }

    /// Returns the IN value rounded to the displayed precision.
    pub fn rounded_in_value(&self) -> f64 {
        round_to_output_precision(self.in_value)
    }

    /// Returns the OUT value rounded to the displayed precision.
    pub fn rounded_out_value(&self) -> f64 {
        round_to_output_precision(self.out_value)
    }

    /// Returns the IN value formatted with the displayed number of decimals.
    pub fn formatted_in_value(&self) -> String {
        format!("{:.*}", OUTPUT_DECIMALS, self.rounded_in_value())
    }

    /// Returns the OUT value formatted with the displayed number of decimals.
    pub fn formatted_out_value(&self) -> String {
        format!("{:.*}", OUTPUT_DECIMALS, self.rounded_out_value())
    }
}

/// Checks that power indices can be computed for a framework with the given number of arguments.
pub fn check_argument_count(n_arguments: usize) -> Result<()> {
    if n_arguments == 0 {
        return Err(RankingError::EmptyArgumentSet.into());
    }
    if n_arguments > MAX_ARGUMENTS {
        return Err(RankingError::TooManyArguments(n_arguments).into());
    }
    if n_arguments > LARGE_FRAMEWORK_WARNING_THRESHOLD {
        warn!(
            "the framework has {} arguments; enumerating the 2^{} coalitions for each of them may take a long time",
            n_arguments,
            n_arguments - 1
        );
    }
    Ok(())
}

/// Computes a power index of all the arguments of a framework, against the IN and the OUT families.
///
/// The results are given in the order of the arguments of the framework.
/// The computation fails as a whole if the framework has no arguments (or too many),
/// or if the coalition structure needed by the index is degenerate.
///
/// # Example
///
/// ```
/// # use argrank::aa::{AAFramework, ArgumentSet};
/// # use argrank::coalitions::{derive_out_family, Coalition, ExtensionFamily};
/// # use argrank::indices::{compute_power_indices, PowerIndexKind};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let ext_in = ExtensionFamily::new(vec![Coalition::new(vec![0])]);
/// let ext_out = derive_out_family(&ext_in, &af);
/// let results = compute_power_indices(&af, &ext_in, &ext_out, PowerIndexKind::BI).unwrap();
/// assert_eq!("0.50000", results[0].formatted_in_value());
/// assert_eq!("-0.50000", results[0].formatted_out_value());
/// assert_eq!("0.50000", results[1].formatted_out_value());
/// ```
pub fn compute_power_indices<'a, T>(
    af: &'a AAFramework<T>,
    in_family: &ExtensionFamily,
    out_family: &ExtensionFamily,
    kind: PowerIndexKind,
) -> Result<Vec<PowerIndexResult<'a, T>>>
where
    T: LabelType,
{
    check_argument_count(af.n_arguments())?;
    info!(
        "computing the {} index of {} argument(s) against {} IN and {} OUT coalition(s)",
        kind.full_name(),
        af.n_arguments(),
        in_family.len(),
        out_family.len()
    );
    let (in_computer, out_computer) = kind.new_computers(af, in_family, out_family)?;
    let results = af
        .argument_set()
        .iter()
        .map(|arg| {
            let result = PowerIndexResult::new(
                arg,
                in_computer.power_index(arg),
                out_computer.power_index(arg),
            );
            debug!(
                "argument {} has IN value {} and OUT value {}",
                arg, result.in_value, result.out_value
            );
            result
        })
        .collect();
    Ok(results)
}
