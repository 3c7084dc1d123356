use super::{
    BanzhafIndex, DeeganPackelIndex, JohnstonIndex, PowerIndexComputer, ShapleyShubikIndex,
};
use crate::{
    aa::{AAFramework, LabelType},
    coalitions::{derive_out_family, minimal_winnings, ExtensionFamily},
    error::RankingError,
};
use anyhow::Result;
use log::info;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The power indices that can be used to rank arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum PowerIndexKind {
    /// The Shapley-Shubik index
    SV,
    /// The (raw) Banzhaf index
    BI,
    /// The Johnston index
    JI,
    /// The Deegan-Packel index
    DP,
}

/// A boxed power index computer, borrowing the families it was built on.
pub type BoxedPowerIndexComputer<'a, T> = Box<dyn PowerIndexComputer<T> + 'a>;

fn boxed<'a, T, C>(computer: C) -> BoxedPowerIndexComputer<'a, T>
where
    T: LabelType,
    C: PowerIndexComputer<T> + 'a,
{
    Box::new(computer)
}

impl PowerIndexKind {
    /// Iterates over the selectors of the available power indices.
    ///
    /// ```
    /// # use argrank::indices::PowerIndexKind;
    /// let selectors = PowerIndexKind::iter_index_strings().collect::<Vec<String>>();
    /// assert_eq!(vec!["SV", "BI", "JI", "DP"], selectors);
    /// ```
    pub fn iter_index_strings() -> impl Iterator<Item = String> {
        PowerIndexKind::iter().map(|k| {
            let selector: &str = k.as_ref();
            selector.to_string()
        })
    }

    /// Returns the full name of the index.
    pub fn full_name(&self) -> &'static str {
        match self {
            PowerIndexKind::SV => "Shapley-Shubik",
            PowerIndexKind::BI => "Banzhaf",
            PowerIndexKind::JI => "Johnston",
            PowerIndexKind::DP => "Deegan-Packel",
        }
    }

    /// Builds the computers of this index for the IN and the OUT families of a framework, in this order.
    ///
    /// The Deegan-Packel index needs sets of minimal winning coalitions:
    /// the IN one is made of the minimal coalitions of the IN family,
    /// while the OUT one is derived from the IN minimal coalitions through the attacks of the framework.
    /// The empty coalition is added to both sets if it is absent.
    pub fn new_computers<'a, T>(
        &self,
        af: &AAFramework<T>,
        in_family: &'a ExtensionFamily,
        out_family: &'a ExtensionFamily,
    ) -> Result<(BoxedPowerIndexComputer<'a, T>, BoxedPowerIndexComputer<'a, T>)>
    where
        T: LabelType,
    {
        let n = af.n_arguments();
        let computers = match self {
            PowerIndexKind::SV => (
                boxed(ShapleyShubikIndex::new(n, in_family)),
                boxed(ShapleyShubikIndex::new(n, out_family)),
            ),
            PowerIndexKind::BI => (
                boxed(BanzhafIndex::new(n, in_family)),
                boxed(BanzhafIndex::new(n, out_family)),
            ),
            PowerIndexKind::JI => (
                boxed(JohnstonIndex::new(n, in_family)),
                boxed(JohnstonIndex::new(n, out_family)),
            ),
            PowerIndexKind::DP => {
                let in_minimal = minimal_winnings(in_family);
                let out_minimal = derive_out_family(&in_minimal, af).with_empty_coalition();
                let in_minimal = in_minimal.with_empty_coalition();
                info!(
                    "found {} minimal winning IN coalition(s) and {} minimal winning OUT coalition(s), empty one included",
                    in_minimal.len(),
                    out_minimal.len()
                );
                (
                    boxed(DeeganPackelIndex::new(in_family, in_minimal)?),
                    boxed(DeeganPackelIndex::new(out_family, out_minimal)?),
                )
            }
        };
        Ok(computers)
    }
}

impl TryFrom<&str> for PowerIndexKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PowerIndexKind::iter()
            .find(|k| {
                let selector: &str = k.as_ref();
                selector.eq_ignore_ascii_case(value.trim())
            })
            .ok_or_else(|| RankingError::UnknownIndexKind(value.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_ok() {
        assert_eq!(PowerIndexKind::SV, PowerIndexKind::try_from("SV").unwrap());
        assert_eq!(PowerIndexKind::BI, PowerIndexKind::try_from("bi").unwrap());
        assert_eq!(PowerIndexKind::JI, PowerIndexKind::try_from("Ji").unwrap());
        assert_eq!(PowerIndexKind::DP, PowerIndexKind::try_from("DP").unwrap());
    }

    #[test]
    fn test_try_from_unknown() {
        for s in ["", "XX", "SVI", "shapley"] {
            let err = PowerIndexKind::try_from(s).unwrap_err();
            assert_eq!(
                Some(&RankingError::UnknownIndexKind(s.to_string())),
                err.downcast_ref::<RankingError>()
            );
        }
    }

    #[test]
    fn test_as_ref_matches_selector() {
        PowerIndexKind::iter().for_each(|k| {
            assert_eq!(k, PowerIndexKind::try_from(k.as_ref()).unwrap());
        });
    }
}
