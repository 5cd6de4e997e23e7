// SPDX-License-Identifier: Apache-2.0

//! Fixed-width integer types under test, together with the boundary operands
//! used to stress each of them.

use serde::Serialize;

use crate::ArithConstError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signedness {
    Unsigned,
    Signed,
}

/// Boundary operands for a width class. The payload type follows the
/// signedness of the class so a signed class can never carry an unsigned
/// operand and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryValues {
    Unsigned(&'static [u64]),
    Signed(&'static [i64]),
}

/// A single boundary operand as it appears in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    Unsigned(u64),
    Signed(i64),
}

impl Literal {
    pub fn is_zero(&self) -> bool {
        match self {
            Literal::Unsigned(v) => *v == 0,
            Literal::Signed(v) => *v == 0,
        }
    }

    /// Text usable inside an identifier: the minus sign of a negative value
    /// is spelled `Neg`, e.g. `-128` becomes `Neg128`.
    pub fn identifier_fragment(&self) -> String {
        self.to_string().replace('-', "Neg")
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Unsigned(v) => write!(f, "{}", v),
            Literal::Signed(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthClass {
    /// Name of the type in the generated source, e.g. `uint16`.
    pub name: &'static str,
    pub bit_count: u32,
    pub boundary: BoundaryValues,
}

impl WidthClass {
    pub const fn unsigned(name: &'static str, bit_count: u32, values: &'static [u64]) -> Self {
        WidthClass {
            name,
            bit_count,
            boundary: BoundaryValues::Unsigned(values),
        }
    }

    pub const fn signed(name: &'static str, bit_count: u32, values: &'static [i64]) -> Self {
        WidthClass {
            name,
            bit_count,
            boundary: BoundaryValues::Signed(values),
        }
    }

    pub fn signedness(&self) -> Signedness {
        match self.boundary {
            BoundaryValues::Unsigned(_) => Signedness::Unsigned,
            BoundaryValues::Signed(_) => Signedness::Signed,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signedness() == Signedness::Signed
    }

    /// Boundary operands in configuration order.
    pub fn literals(&self) -> Vec<Literal> {
        match self.boundary {
            BoundaryValues::Unsigned(values) => {
                values.iter().map(|v| Literal::Unsigned(*v)).collect()
            }
            BoundaryValues::Signed(values) => values.iter().map(|v| Literal::Signed(*v)).collect(),
        }
    }

    /// Checks that the bit count is one the evaluator models and that every
    /// boundary operand is representable in the class.
    pub fn validate(&self) -> Result<(), ArithConstError> {
        if !matches!(self.bit_count, 8 | 16 | 32 | 64) {
            return Err(ArithConstError(format!(
                "width class {} has unsupported bit count {}",
                self.name, self.bit_count
            )));
        }
        for literal in self.literals() {
            let fits = match literal {
                Literal::Unsigned(v) => {
                    self.bit_count == 64 || v < (1u64 << self.bit_count)
                }
                Literal::Signed(v) => {
                    self.bit_count == 64 || {
                        let bound = 1i64 << (self.bit_count - 1);
                        -bound <= v && v < bound
                    }
                }
            };
            if !fits {
                return Err(ArithConstError(format!(
                    "boundary value {} does not fit in width class {}",
                    literal, self.name
                )));
            }
        }
        Ok(())
    }
}

/// The width classes covered by the generated test, in emission order.
pub static WIDTH_CLASSES: &[WidthClass] = &[
    WidthClass::unsigned(
        "uint64",
        64,
        &[0, 1, 4294967296, 0x8000_0000_0000_0000, u64::MAX],
    ),
    WidthClass::signed(
        "int64",
        64,
        &[
            i64::MIN,
            -i64::MAX,
            -4294967296,
            -1,
            0,
            1,
            4294967296,
            i64::MAX - 1,
            i64::MAX,
        ],
    ),
    WidthClass::unsigned("uint32", 32, &[0, 1, 4294967295]),
    WidthClass::signed(
        "int32",
        32,
        &[-2147483648, -2147483647, -1, 0, 1, 2147483647],
    ),
    WidthClass::unsigned("uint16", 16, &[0, 1, 65535]),
    WidthClass::signed("int16", 16, &[-32768, -32767, -1, 0, 1, 32766, 32767]),
    WidthClass::unsigned("uint8", 8, &[0, 1, 255]),
    WidthClass::signed("int8", 8, &[-128, -127, -1, 0, 1, 126, 127]),
];

pub fn find_width_class(name: &str) -> Option<&'static WidthClass> {
    WIDTH_CLASSES.iter().find(|w| w.name == name)
}
