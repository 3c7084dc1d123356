use super::{warned::Warned, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    collections::HashSet,
    io::{BufRead, BufReader, Read},
};

lazy_static! {
    static ref STATEMENT_PATTERN: Regex =
        Regex::new(r"^\s*([[:alpha:]]+)\s*\(([^()]*)\)\s*\.").unwrap();
    static ref ARG_NAME_PATTERN: Regex = Regex::new(r"^[^\s(),.%]+$").unwrap();
}

const COMMENT_START: char = '%';

const DEFAULT_ARG_LABELS_CAP: usize = 1 << 6;

#[derive(Debug, PartialEq, Eq)]
enum Statement {
    Argument(String),
    Attack(String, String),
}

fn read_arg_name(s: &str) -> Result<Warned<String>> {
    let trimmed = s.trim();
    if !ARG_NAME_PATTERN.is_match(trimmed) {
        return Err(anyhow!(r#"invalid argument name "{}""#, s));
    }
    let name = Warned::new(trimmed.to_string());
    if trimmed.len() == s.len() {
        Ok(name)
    } else {
        Ok(name.warn("argument names beginning or ending by spaces may be ambiguous"))
    }
}

fn read_statement(predicate: &str, params: &str) -> Result<Warned<Statement>> {
    let names = params
        .split(',')
        .map(read_arg_name)
        .collect::<Result<Vec<Warned<String>>>>()?;
    let n_names = names.len();
    let arity_error = |expected: usize| {
        anyhow!(
            "{} expects {} parameter(s), got {}",
            predicate,
            expected,
            n_names
        )
    };
    match predicate {
        "arg" => {
            let [a]: [Warned<String>; 1] = names.try_into().map_err(|_| arity_error(1))?;
            Ok(a.map(Statement::Argument))
        }
        "att" => {
            let [a, b]: [Warned<String>; 2] = names.try_into().map_err(|_| arity_error(2))?;
            Ok(a.zip(b).map(|(a, b)| Statement::Attack(a, b)))
        }
        _ => Err(anyhow!(r#"unknown predicate "{}""#, predicate)),
    }
}

fn read_line_statements(line: &str) -> Result<Vec<Warned<Statement>>> {
    let mut rest = match line.find(COMMENT_START) {
        Some(i) => &line[..i],
        None => line,
    };
    let mut statements = vec![];
    while !rest.trim().is_empty() {
        let captures = STATEMENT_PATTERN
            .captures(rest)
            .ok_or_else(|| anyhow!(r#"syntax error near "{}""#, rest.trim()))?;
        statements.push(read_statement(&captures[1], &captures[2])?);
        rest = &rest[captures[0].len()..];
    }
    Ok(statements)
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// Statements may share a line, and may come in any order.
/// Everything following a `%` on a line is a comment.
/// The order of the arguments is the order of their first declaration;
/// repeated declarations raise a warning and are ignored.
///
/// # Example
///
/// ```
/// # use argrank::aa::AAFramework;
/// # use argrank::io::{AspartixReader, InstanceReader};
/// let reader = AspartixReader::default();
/// let af = reader.read(&mut "arg(1).arg(2).att(1,2).".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line: usize, warning: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, warning.clone()));
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = Vec::with_capacity(DEFAULT_ARG_LABELS_CAP);
        let mut declared = HashSet::new();
        let mut attacks = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line {}", 1 + i);
            let l = line.with_context(context)?;
            for statement in read_line_statements(&l).with_context(context)? {
                match statement.consume_warnings(|w| self.warn(1 + i, w)) {
                    Statement::Argument(a) => {
                        if declared.insert(a.clone()) {
                            arg_labels.push(a);
                        } else {
                            self.warn(1 + i, format!("argument {} is declared more than once", a));
                        }
                    }
                    Statement::Attack(a, b) => attacks.push((1 + i, a, b)),
                }
            }
        }
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&arg_labels));
        for (line, a, b) in attacks {
            af.new_attack(&a, &b)
                .with_context(|| format!("while reading line {}", line))?;
        }
        Ok(af)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn statements(line: &str) -> Vec<Statement> {
        read_line_statements(line)
            .unwrap()
            .into_iter()
            .map(|s| s.consume_warnings(|_| {}))
            .collect()
    }

    fn arg(a: &str) -> Statement {
        Statement::Argument(a.to_string())
    }

    fn att(a: &str, b: &str) -> Statement {
        Statement::Attack(a.to_string(), b.to_string())
    }

    #[test]
    fn test_read_statements_ok() {
        assert_eq!(vec![arg("a")], statements("arg(a)."));
        assert_eq!(vec![arg("a")], statements("   arg( a ) .  "));
        assert_eq!(vec![arg("_a1")], statements("arg(_a1)."));
        assert_eq!(vec![arg("1")], statements("arg(1)."));
        assert_eq!(vec![att("a", "b")], statements("att(a, b)."));
        assert_eq!(
            vec![arg("a"), arg("b"), att("a", "b")],
            statements("arg(a).arg(b). att(a,b).")
        );
    }

    #[test]
    fn test_read_statements_comments() {
        assert_eq!(vec![] as Vec<Statement>, statements("% arg(a)."));
        assert_eq!(vec![arg("a")], statements("arg(a). % arg(b)."));
        assert_eq!(vec![] as Vec<Statement>, statements("   "));
    }

    #[test]
    fn test_read_statements_errors() {
        [
            "rg(a).",
            "arg(a)",
            "arg().",
            "arga).",
            "arg(a.",
            "arg(a,b).",
            "att(a).",
            "att(a,).",
            "att(,b).",
            "att(a,b,c).",
            "foo(a).",
            "arg(a). b",
        ]
        .iter()
        .for_each(|l| assert!(read_line_statements(l).is_err(), "{}", l));
    }

    #[test]
    fn test_read_statements_warn_spaces() {
        let mut warnings = vec![];
        read_line_statements("att( a,b ).")
            .unwrap()
            .into_iter()
            .for_each(|s| {
                s.consume_warnings(|w| warnings.push(w));
            });
        assert_eq!(2, warnings.len());
    }

    fn str_args(af: &AAFramework<String>) -> Vec<String> {
        af.argument_set().iter().map(|s| format!("{}", s)).collect()
    }

    fn str_attacks(af: &AAFramework<String>) -> Vec<String> {
        af.iter_attacks()
            .map(|a| format!("({},{})", a.attacker(), a.attacked()))
            .collect()
    }

    #[test]
    fn test_read_ok() {
        let instance = "arg(a).\narg(b).\natt(a,b).\n";
        let af = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(vec!["a".to_string(), "b".to_string()], str_args(&af));
        assert_eq!(vec!["(a,b)".to_string()], str_attacks(&af));
    }

    #[test]
    fn test_read_empty() {
        let af = AspartixReader::default().read(&mut "\n".as_bytes()).unwrap();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_read_arg_after_att() {
        let instance = "arg(a).\natt(a,b).\narg(b).\n";
        let af = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(vec!["a".to_string(), "b".to_string()], str_args(&af));
        assert_eq!(vec!["(a,b)".to_string()], str_attacks(&af));
    }

    #[test]
    fn test_read_syntax_error() {
        let instance = "argument(a).\narg(b).\n";
        let err = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap_err();
        assert_eq!("while reading line 1", err.to_string());
    }

    #[test]
    fn test_read_unknown_arg_in_att() {
        let instance = "arg(a).\narg(b).\natt(a,c).\n";
        let err = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap_err();
        assert_eq!("while reading line 3", err.to_string());
    }

    fn read_warnings(instance: &str) -> Vec<(usize, String)> {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = AspartixReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        reader.read(&mut instance.as_bytes()).unwrap();
        let result = warnings.borrow().clone();
        result
    }

    #[test]
    fn test_read_warn_arg_left_space() {
        assert_eq!(
            vec![(
                1,
                "argument names beginning or ending by spaces may be ambiguous".to_string()
            )],
            read_warnings("arg( a).\narg(b).\natt(a,b).\n")
        );
    }

    #[test]
    fn test_read_warn_repeated_argument() {
        let instance = "arg(a).\narg(b).\narg(a).\n";
        assert_eq!(
            vec![(3, "argument a is declared more than once".to_string())],
            read_warnings(instance)
        );
    }
}
