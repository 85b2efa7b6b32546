//! Call Report Module
//!
//! Read-side views over the instrumentation data kept in the store.

use std::fmt;

// == Call History ==
/// The recorded input and output logs of one method, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallHistory {
    /// Serialized argument tuples
    pub inputs: Vec<String>,
    /// Serialized results
    pub outputs: Vec<String>,
}

impl CallHistory {
    /// Number of completed calls, i.e. input/output pairs.
    pub fn len(&self) -> usize {
        self.inputs.len().min(self.outputs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(input, output)` pairs.
    pub fn calls(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inputs
            .iter()
            .zip(self.outputs.iter())
            .map(|(i, o)| (i.as_str(), o.as_str()))
    }
}

// == Call Report ==
/// Call count and history of a method, rendered by `Display` as a replay:
///
/// ```text
/// Cache::store was called 2 times:
/// Cache::store("foo") -> 3f0c...
/// Cache::store(42) -> 9a1e...
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CallReport {
    pub method: String,
    pub count: i64,
    pub history: CallHistory,
}

/// Strips the enclosing brackets of a serialized argument array.
fn argument_list(input: &str) -> &str {
    input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input)
}

impl fmt::Display for CallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called {} times:", self.method, self.count)?;
        for (input, output) in self.history.calls() {
            write!(f, "\n{}({}) -> {}", self.method, argument_list(input), output)?;
        }
        Ok(())
    }
}
