//! Whitespace-delimited label serialization.
//!
//! A minimal text shape for moving node labels between processes: the
//! node count followed by one token per label, all separated by
//! whitespace. Arcs are not encoded, so parsing yields an edge-free
//! graph. The codec goes through [`Graph`]'s public interface only; it is
//! a convenience for demos and fixtures, not a stable interchange format.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::Graph;

/// Failure while parsing the shape produced by [`to_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or the leading node count was not an integer.
    #[error("missing or malformed node count")]
    BadCount,
    /// Fewer label tokens than the count announced.
    #[error("expected {expected} labels, found {found}")]
    Truncated {
        /// The announced node count.
        expected: usize,
        /// How many label tokens were actually present.
        found: usize,
    },
    /// A label token failed to parse as the target type.
    #[error("label token {index} does not parse")]
    BadLabel {
        /// Zero-based index of the offending token.
        index: usize,
    },
}

/// Renders the node count followed by the labels, space-separated.
///
/// A label whose rendering contains whitespace splits into several tokens
/// and will not survive [`from_text`]; keeping labels atomic is the
/// caller's responsibility.
pub fn to_text<T: Display>(graph: &Graph<T>) -> String {
    let mut out = graph.len().to_string();
    for label in graph {
        out.push(' ');
        out.push_str(&label.to_string());
    }
    out
}

/// Parses the shape produced by [`to_text`] into an edge-free graph.
///
/// Exactly `count` tokens are consumed after the leading count; anything
/// beyond them is ignored. Duplicate labels in the input are dropped the
/// way [`Graph::add_node`] drops them, so the resulting graph can be
/// smaller than the announced count.
pub fn from_text<T>(input: &str) -> Result<Graph<T>, ParseError>
where
    T: FromStr + PartialEq,
{
    let mut tokens = input.split_whitespace();
    let count: usize = tokens
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or(ParseError::BadCount)?;
    let mut labels = Vec::with_capacity(count);
    for index in 0..count {
        let tok = tokens.next().ok_or(ParseError::Truncated {
            expected: count,
            found: index,
        })?;
        let label = tok.parse::<T>().map_err(|_| ParseError::BadLabel { index })?;
        labels.push(label);
    }
    Ok(Graph::with_nodes(labels))
}
