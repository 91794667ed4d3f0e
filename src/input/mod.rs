//! Line-oriented input for the command-line sorter
//!
//! One value per line. Text is taken verbatim; numeric kinds skip blank
//! lines and report the 1-based line number of anything unparsable.

use std::io::BufRead;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors raised while reading or parsing input
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying reader failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Line is not a valid integer
    #[error("invalid integer '{value}' on line {line}")]
    InvalidInteger {
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
        /// Parser error
        #[source]
        source: ParseIntError,
    },

    /// Line is not a valid floating-point number
    #[error("invalid number '{value}' on line {line}")]
    InvalidFloat {
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
        /// Parser error
        #[source]
        source: ParseFloatError,
    },
}

/// Read every line, stripping line terminators
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Parse non-blank lines as `i64`
pub fn parse_integers(lines: &[String]) -> Result<Vec<i64>, InputError> {
    numbered_values(lines)
        .map(|(line, value)| {
            value.parse().map_err(|source| InputError::InvalidInteger {
                line,
                value: value.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse non-blank lines as `f64` (`NaN` and `inf` are accepted)
pub fn parse_floats(lines: &[String]) -> Result<Vec<f64>, InputError> {
    numbered_values(lines)
        .map(|(line, value)| {
            value.parse().map_err(|source| InputError::InvalidFloat {
                line,
                value: value.to_string(),
                source,
            })
        })
        .collect()
}

fn numbered_values(lines: &[String]) -> impl Iterator<Item = (usize, &str)> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, value)| !value.is_empty())
}
