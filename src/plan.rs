// SPDX-License-Identifier: Apache-2.0

//! Enumerates the generated functions and verification-table rows.
//!
//! Two passes are planned per width class:
//!
//! - the function pass yields one single-argument function per (operator,
//!   boundary value, variant), with the boundary value baked in as a literal;
//! - the table pass yields, for every ordered pair of boundary values, rows
//!   that call those functions with the other value as input, so each function
//!   is exercised against every boundary value of its class.
//!
//! Division and modulo never get a zero divisor, and shifts are only planned
//! for unsigned width classes.

use serde::Serialize;

use crate::operator::Operator;
use crate::ref_eval::{eval, truncate_unsigned};
use crate::width_class::{Literal, WidthClass};
use crate::ArithConstError;

/// Width of the smallest unsigned type a bare shift-count literal may be
/// converted to. Counts that do not survive narrowing to it are widened
/// explicitly in the generated source.
pub const NATURAL_SHIFT_COUNT_BITS: u32 = 32;

/// Which side of the operator carries the baked-in literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionVariant {
    /// `literal OP a`
    ConstantLeft,
    /// `a OP literal`
    ConstantRight,
}

/// Returns true if `literal`, used as a shift count, would lose its top bits
/// when narrowed to [`NATURAL_SHIFT_COUNT_BITS`].
pub fn needs_shift_count_widening(literal: Literal) -> bool {
    let value = match literal {
        Literal::Unsigned(v) => v,
        Literal::Signed(v) => v as u64,
    };
    truncate_unsigned(value, NATURAL_SHIFT_COUNT_BITS) != value
}

/// True when no case at all is generated for `op` on `width`.
pub fn is_excluded(width: &WidthClass, op: &Operator) -> bool {
    width.is_signed() && op.is_shift()
}

fn is_zero_divisor(op: &Operator, divisor: Literal) -> bool {
    op.is_div_like() && divisor.is_zero()
}

/// A single generated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionCase<'a> {
    pub width: &'a WidthClass,
    pub op: &'a Operator,
    pub constant: Literal,
    pub variant: FunctionVariant,
    /// The constant is a shift count too large for the natural unsigned type
    /// and must be emitted as a 64-bit unsigned expression.
    pub widen_constant: bool,
}

impl<'a> FunctionCase<'a> {
    pub fn new(
        width: &'a WidthClass,
        op: &'a Operator,
        constant: Literal,
        variant: FunctionVariant,
    ) -> Self {
        let widen_constant = variant == FunctionVariant::ConstantRight
            && op.is_shift()
            && needs_shift_count_widening(constant);
        FunctionCase {
            width,
            op,
            constant,
            variant,
            widen_constant,
        }
    }

    /// Name of the generated function; distinct for every (operator, width,
    /// literal, variant).
    pub fn symbol_name(&self) -> String {
        let literal = self.constant.identifier_fragment();
        match self.variant {
            FunctionVariant::ConstantRight => {
                format!("{}_{}_{}", self.op.name, self.width.name, literal)
            }
            FunctionVariant::ConstantLeft => {
                format!("{}_{}_{}", self.op.name, literal, self.width.name)
            }
        }
    }
}

/// A single verification-table row: the function for `variant` called so that
/// it computes `left OP right`, expecting `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedCase<'a> {
    pub width: &'a WidthClass,
    pub op: &'a Operator,
    pub left: Literal,
    pub right: Literal,
    pub expected: Literal,
    pub variant: FunctionVariant,
}

impl<'a> GeneratedCase<'a> {
    /// The function this row invokes.
    pub fn function(&self) -> FunctionCase<'a> {
        let constant = match self.variant {
            FunctionVariant::ConstantLeft => self.left,
            FunctionVariant::ConstantRight => self.right,
        };
        FunctionCase::new(self.width, self.op, constant, self.variant)
    }

    /// The argument passed to the function.
    pub fn input(&self) -> Literal {
        match self.variant {
            FunctionVariant::ConstantLeft => self.right,
            FunctionVariant::ConstantRight => self.left,
        }
    }

    /// The operand in divisor position.
    pub fn divisor(&self) -> Literal {
        self.right
    }
}

/// Plans the function pass for `width`.
pub fn plan_functions<'a>(width: &'a WidthClass, ops: &'a [Operator]) -> Vec<FunctionCase<'a>> {
    let mut cases = vec![];
    for op in ops {
        if is_excluded(width, op) {
            continue;
        }
        for constant in width.literals() {
            if !is_zero_divisor(op, constant) {
                cases.push(FunctionCase::new(
                    width,
                    op,
                    constant,
                    FunctionVariant::ConstantRight,
                ));
            }
            cases.push(FunctionCase::new(
                width,
                op,
                constant,
                FunctionVariant::ConstantLeft,
            ));
        }
    }
    cases
}

/// Plans the verification table for `width`, computing each expected value
/// with the reference evaluator.
pub fn plan_table<'a>(
    width: &'a WidthClass,
    ops: &'a [Operator],
) -> Result<Vec<GeneratedCase<'a>>, ArithConstError> {
    let literals = width.literals();
    let mut cases = vec![];
    for op in ops {
        if is_excluded(width, op) {
            continue;
        }
        for &constant in &literals {
            for &input in &literals {
                if !is_zero_divisor(op, input) {
                    cases.push(GeneratedCase {
                        width,
                        op,
                        left: constant,
                        right: input,
                        expected: eval(op, width, constant, input)?,
                        variant: FunctionVariant::ConstantLeft,
                    });
                }
                if !is_zero_divisor(op, constant) {
                    cases.push(GeneratedCase {
                        width,
                        op,
                        left: input,
                        right: constant,
                        expected: eval(op, width, input, constant)?,
                        variant: FunctionVariant::ConstantRight,
                    });
                }
            }
        }
    }
    Ok(cases)
}
