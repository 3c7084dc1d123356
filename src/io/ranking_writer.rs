use super::RankingWriter;
use crate::{aa::LabelType, ranking::Ranking};
use anyhow::{Context, Result};
use std::io::Write;

/// Writes a ranking as its preorder followed by the values of each argument.
///
/// The first line is the preorder (`e ≻ b ≃ a`), followed by an empty line.
/// Then comes a block for each argument, in alphabetical order, made of its label and its rounded values:
///
/// ```text
/// e ≻ b ≃ a
///
/// arg: a
/// IN: 0.50000
/// OUT: 0.00000
///
/// arg: b
/// ...
/// ```
#[derive(Default)]
pub struct PreorderWriter;

impl<T> RankingWriter<T> for PreorderWriter
where
    T: LabelType,
{
    fn write_ranking(&self, writer: &mut dyn Write, ranking: &Ranking<T>) -> Result<()> {
        let context = "while writing a ranking";
        writeln!(writer, "{}", ranking.preorder_string()).context(context)?;
        writeln!(writer).context(context)?;
        for r in ranking.alphabetical() {
            writeln!(writer, "arg: {}", r.argument()).context(context)?;
            writeln!(writer, "IN: {}", r.formatted_in_value()).context(context)?;
            writeln!(writer, "OUT: {}", r.formatted_out_value()).context(context)?;
            writeln!(writer).context(context)?;
        }
        writer.flush().context(context)
    }
}

/// Writes a ranking as one line per argument, in rank order.
///
/// Each line is made of the label, the tier (starting at `0`) and the rounded IN and OUT values, separated by spaces.
#[derive(Default)]
pub struct TiersWriter;

impl<T> RankingWriter<T> for TiersWriter
where
    T: LabelType,
{
    fn write_ranking(&self, writer: &mut dyn Write, ranking: &Ranking<T>) -> Result<()> {
        let context = "while writing a ranking";
        for (r, tier) in ranking.iter().zip(ranking.tiers()) {
            writeln!(
                writer,
                "{} {} {} {}",
                r.argument(),
                tier,
                r.formatted_in_value(),
                r.formatted_out_value()
            )
            .context(context)?;
        }
        writer.flush().context(context)
    }
}
