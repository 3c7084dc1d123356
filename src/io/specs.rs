use crate::{aa::AAFramework, aa::LabelType, ranking::Ranking};
use anyhow::Result;
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while parsing an input.
///
/// The first parameter is the line (starting at `1`) the warning refers to.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read Argumentation Frameworks.
pub trait InstanceReader<T>
where
    T: LabelType,
{
    /// Reads an [`AAFramework`].
    /// The [LabelType](crate::aa::LabelType) of the returned AFs depends on the reader.
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use argrank::aa::AAFramework;
    /// # use argrank::io::{AspartixReader, InstanceReader};
    /// fn read_af_from_str(s: &str) -> AAFramework<String> {
    ///     let reader = AspartixReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
    /// }
    /// # read_af_from_str("arg(a).");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<T>>;

    /// Adds a callback function to call when warnings are raised while parsing an AF.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write rankings.
pub trait RankingWriter<T>
where
    T: LabelType,
{
    /// Writes a ranking.
    fn write_ranking(&self, writer: &mut dyn Write, ranking: &Ranking<T>) -> Result<()>;
}
