//! Access trace parsing
//!
//! A trace is a list of tokens: `put:KEY=VALUE`, `get:KEY` or `del:KEY`.

use anyhow::{bail, Context, Result};

/// The trace replayed when none is given: five days through a 3-slot cache,
/// re-putting day5 and day4 and finally reading day3, now the least recently
/// used entry
pub const DEFAULT_TRACE: &[&str] = &[
    "put:day1=1",
    "put:day2=2",
    "put:day3=3",
    "put:day4=4",
    "put:day5=5",
    "put:day5=5",
    "put:day4=4",
    "get:day3",
];

/// A single cache operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Put { key: String, value: String },
    Get { key: String },
    Del { key: String },
}

impl Op {
    /// Parse one trace token
    pub fn parse(token: &str) -> Result<Self> {
        let (verb, rest) = token
            .split_once(':')
            .with_context(|| format!("missing ':' in operation '{}'", token))?;

        if rest.is_empty() {
            bail!("empty key in operation '{}'", token);
        }

        match verb.to_ascii_lowercase().as_str() {
            "put" => {
                let (key, value) = rest
                    .split_once('=')
                    .with_context(|| format!("put needs KEY=VALUE, got '{}'", rest))?;
                if key.is_empty() {
                    bail!("empty key in operation '{}'", token);
                }
                Ok(Op::Put {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
            "get" => Ok(Op::Get {
                key: rest.to_string(),
            }),
            "del" => Ok(Op::Del {
                key: rest.to_string(),
            }),
            _ => bail!("unknown operation '{}'", verb),
        }
    }
}

/// Parse a whole trace, reporting the position of the first bad token
pub fn parse_trace<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Op>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            Op::parse(token.as_ref()).with_context(|| format!("trace step {}", i + 1))
        })
        .collect()
}
