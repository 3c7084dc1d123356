use super::{warned::Warned, WarningHandler};
use crate::{
    aa::ArgumentSet,
    coalitions::{Coalition, ExtensionFamily},
    error::RankingError,
};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    collections::HashSet,
    io::{BufRead, BufReader, Read},
};

lazy_static! {
    static ref LABEL_SEPARATOR_PATTERN: Regex = Regex::new(r"[\s,]+").unwrap();
}

const COMMENT_START: char = '#';

fn strip_delimiters(line: &str) -> Result<&str> {
    let first = line.chars().next();
    let last = line.chars().last();
    match (first, last) {
        (Some('{'), Some('}')) | (Some('['), Some(']')) if line.len() >= 2 => {
            Ok(&line[1..line.len() - 1])
        }
        (Some('{' | '['), _) | (_, Some('}' | ']')) => {
            Err(anyhow!("unbalanced delimiters in \"{}\"", line))
        }
        _ => Ok(line),
    }
}

fn read_labels(line: &str) -> Result<Warned<Vec<String>>> {
    let content = strip_delimiters(line)?;
    let mut seen = HashSet::new();
    let mut repeated = vec![];
    let mut labels = vec![];
    for label in LABEL_SEPARATOR_PATTERN
        .split(content.trim())
        .filter(|l| !l.is_empty())
    {
        if seen.insert(label) {
            labels.push(label.to_string());
        } else {
            repeated.push(label);
        }
    }
    Ok(repeated.into_iter().fold(Warned::new(labels), |w, l| {
        w.warn(format!("argument {} is repeated in the extension", l))
    }))
}

/// A reader for the extension families computed by argumentation solvers.
///
/// Each non-empty line contains an extension, given by the labels of its arguments.
/// Labels are separated by spaces or commas, and may be surrounded by braces (`{a b c}`) or brackets (`[a,b,c]`);
/// thus, `{}` and `[]` both denote the empty extension.
/// Lines beginning with a `#` are comments.
///
/// The extensions are returned in the order of the lines, including repeated ones.
/// An unknown label makes the reading fail with a [`RankingError::MalformedCoalition`] error;
/// a label repeated in an extension raises a warning and is counted once.
///
/// # Example
///
/// ```
/// # use argrank::aa::ArgumentSet;
/// # use argrank::coalitions::Coalition;
/// # use argrank::io::ExtensionsReader;
/// let arguments = ArgumentSet::new_with_labels(&["a".to_string(), "b".to_string()]);
/// let family = ExtensionsReader::default()
///     .read(&mut "{a b}\n{}\n".as_bytes(), &arguments)
///     .unwrap();
/// assert_eq!(
///     vec![&Coalition::new(vec![0, 1]), &Coalition::empty()],
///     family.iter().collect::<Vec<_>>()
/// );
/// ```
#[derive(Default)]
pub struct ExtensionsReader {
    warning_handlers: Vec<WarningHandler>,
}

impl ExtensionsReader {
    /// Reads an extension family which arguments belong to the given set.
    pub fn read(
        &self,
        reader: &mut dyn Read,
        arguments: &ArgumentSet<String>,
    ) -> Result<ExtensionFamily> {
        let mut coalitions = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading extension at line {}", 1 + i);
            let l = line.with_context(context)?;
            let trimmed = l.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_START) {
                continue;
            }
            let labels = read_labels(trimmed)
                .map_err(|e| anyhow!(RankingError::MalformedCoalition(e.to_string())))
                .with_context(context)?
                .consume_warnings(|w| {
                    self.warning_handlers
                        .iter()
                        .for_each(|h| (h)(1 + i, w.clone()))
                });
            coalitions.push(Coalition::from_labels(arguments, &labels).with_context(context)?);
        }
        Ok(ExtensionFamily::new(coalitions))
    }

    /// Adds a callback function to call when warnings are raised while parsing extensions.
    pub fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
