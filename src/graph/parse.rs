use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::core::package::Package;
use crate::core::validate::{is_separator, is_valid_name, NAME_PATTERN, SEPARATOR};

/// A single "source depends directly on dependency" declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: Package,
    pub dependency: Package,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    TooFewTokens,
    InvalidSeparator,
    InvalidPackageName(String),
    SelfDependency,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTokens => write!(f, "the number of tokens is less than two"),
            Self::InvalidSeparator => write!(
                f,
                "the separator token (i.e. second token) is not \"{SEPARATOR}\""
            ),
            Self::InvalidPackageName(name) => write!(
                f,
                "the package name \"{name}\" is not matched by \"{NAME_PATTERN}\""
            ),
            Self::SelfDependency => write!(f, "a package cannot depend on itself"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line \"{line}\" (line number: {line_number})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: String,
    pub line_number: usize,
}

/// Parses the whole dependency file text. The first malformed line aborts
/// the parse; zero-length lines are skipped.
pub fn parse_dependencies(content: &str) -> Result<Vec<Edge>, ParseError> {
    let mut edges = Vec::new();
    for (idx, line) in split_lines(content).enumerate() {
        if line.is_empty() {
            continue;
        }
        let parsed = parse_line(line, idx + 1).inspect_err(|err| {
            debug!(line_number = err.line_number, reason = %err.kind, "rejected dependency line");
        })?;
        edges.extend(parsed);
    }
    Ok(edges)
}

/// Parses one non-empty line of the form `src -> dep1 dep2 ...`.
pub fn parse_line(line: &str, line_number: usize) -> Result<Vec<Edge>, ParseError> {
    let fail = |kind: ParseErrorKind| ParseError {
        kind,
        line: line.to_string(),
        line_number,
    };

    let tokens = tokenize(line);
    if tokens.len() < 2 {
        return Err(fail(ParseErrorKind::TooFewTokens));
    }
    if !is_separator(tokens[1]) {
        return Err(fail(ParseErrorKind::InvalidSeparator));
    }

    let source_name = tokens[0];
    if !is_valid_name(source_name) {
        return Err(fail(ParseErrorKind::InvalidPackageName(
            source_name.to_string(),
        )));
    }

    let source = Package::new(source_name);
    let mut edges = Vec::with_capacity(tokens.len() - 2);
    for &name in &tokens[2..] {
        if !is_valid_name(name) {
            return Err(fail(ParseErrorKind::InvalidPackageName(name.to_string())));
        }
        if name == source_name {
            return Err(fail(ParseErrorKind::SelfDependency));
        }
        edges.push(Edge {
            source: source.clone(),
            dependency: Package::new(name),
        });
    }
    Ok(edges)
}

/// Splits on `\n`, `\r\n` or a lone `\r`. A terminator at the very end
/// does not start another line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(content).filter(|text| !text.is_empty());
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\n', '\r']) {
            Some(pos) => {
                let width = if text[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[pos + width..]).filter(|tail| !tail.is_empty());
                Some(&text[..pos])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split([' ', '\t'])
        .filter(|token| !token.is_empty())
        .collect()
}
