// SPDX-License-Identifier: Apache-2.0

/// Error raised when the generator reaches a state that indicates a defect in
/// the generator itself, e.g. a table row emitted outside of its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithConstError(pub String);

impl std::fmt::Display for ArithConstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arithconst error: {}", self.0)
    }
}

impl std::error::Error for ArithConstError {}
