// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpCategory {
    Arithmetic,
    Shift,
    Bitwise,
    /// Division and modulo; these trap on a zero divisor.
    DivLike,
}

/// The binary operation computed by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    /// Prefix used for generated function names, e.g. `lsh`.
    pub name: &'static str,
    /// Operator token in the generated source, e.g. `<<`.
    pub symbol: &'static str,
    pub kind: OpKind,
}

impl Operator {
    pub const fn new(name: &'static str, symbol: &'static str, kind: OpKind) -> Self {
        Operator { name, symbol, kind }
    }

    pub fn category(&self) -> OpCategory {
        match self.kind {
            OpKind::Add | OpKind::Sub | OpKind::Mul => OpCategory::Arithmetic,
            OpKind::Div | OpKind::Mod => OpCategory::DivLike,
            OpKind::Shl | OpKind::Shr => OpCategory::Shift,
            OpKind::And | OpKind::Or | OpKind::Xor => OpCategory::Bitwise,
        }
    }

    pub fn is_div_like(&self) -> bool {
        self.category() == OpCategory::DivLike
    }

    pub fn is_shift(&self) -> bool {
        self.category() == OpCategory::Shift
    }
}

/// The operators covered by the generated test, in emission order.
pub static OPERATORS: &[Operator] = &[
    Operator::new("add", "+", OpKind::Add),
    Operator::new("sub", "-", OpKind::Sub),
    Operator::new("div", "/", OpKind::Div),
    Operator::new("mul", "*", OpKind::Mul),
    Operator::new("lsh", "<<", OpKind::Shl),
    Operator::new("rsh", ">>", OpKind::Shr),
    Operator::new("mod", "%", OpKind::Mod),
    Operator::new("and", "&", OpKind::And),
    Operator::new("or", "|", OpKind::Or),
    Operator::new("xor", "^", OpKind::Xor),
];

pub fn find_operator(name: &str) -> Option<&'static Operator> {
    OPERATORS.iter().find(|o| o.name == name)
}
