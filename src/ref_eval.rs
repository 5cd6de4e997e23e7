// SPDX-License-Identifier: Apache-2.0

//! Reference evaluator that computes the expected result of `lhs OP rhs` for a
//! fixed-width integer type.
//!
//! Every operation is first performed on 64-bit values with native 64-bit
//! wraparound and then truncated to the width of the target type. For signed
//! targets the truncated bit pattern is sign-extended back to 64 bits, which
//! reproduces two's complement wraparound at the narrower width.
//!
//! Shift amounts are unsigned magnitudes; shifting by 64 or more yields zero,
//! except for a signed right shift which fills with the sign bit. Division and
//! modulo by zero evaluate to zero. The planner never asks for those, so the
//! zero is a placeholder rather than a modeled result.

use crate::operator::{OpKind, Operator};
use crate::width_class::{Literal, Signedness, WidthClass};
use crate::ArithConstError;

/// Keeps the low `bit_count` bits of `value`.
pub fn truncate_unsigned(value: u64, bit_count: u32) -> u64 {
    if bit_count >= 64 {
        value
    } else {
        value & ((1u64 << bit_count) - 1)
    }
}

/// Keeps the low `bit_count` bits of `value` and sign-extends from bit
/// `bit_count - 1`.
pub fn truncate_signed(value: i64, bit_count: u32) -> i64 {
    if bit_count >= 64 {
        return value;
    }
    let masked = truncate_unsigned(value as u64, bit_count);
    let sign_bit = 1u64 << (bit_count - 1);
    if masked & sign_bit != 0 {
        (masked | !((1u64 << bit_count) - 1)) as i64
    } else {
        masked as i64
    }
}

fn shl_u64(value: u64, amount: u64) -> u64 {
    if amount >= 64 {
        0
    } else {
        value << amount
    }
}

fn shr_u64(value: u64, amount: u64) -> u64 {
    if amount >= 64 {
        0
    } else {
        value >> amount
    }
}

fn shl_i64(value: i64, amount: u64) -> i64 {
    if amount >= 64 {
        0
    } else {
        value << amount
    }
}

fn shr_i64(value: i64, amount: u64) -> i64 {
    if amount >= 64 {
        if value < 0 {
            -1
        } else {
            0
        }
    } else {
        value >> amount
    }
}

/// Computes `i OP j` on unsigned operands, truncated to `width`.
pub fn eval_unsigned(i: u64, j: u64, width: &WidthClass, op: &Operator) -> u64 {
    let ans = match op.kind {
        OpKind::Add => i.wrapping_add(j),
        OpKind::Sub => i.wrapping_sub(j),
        OpKind::Mul => i.wrapping_mul(j),
        OpKind::Div => {
            if j == 0 {
                0
            } else {
                i / j
            }
        }
        OpKind::Mod => {
            if j == 0 {
                0
            } else {
                i % j
            }
        }
        OpKind::Shl => shl_u64(i, j),
        OpKind::Shr => shr_u64(i, j),
        OpKind::And => i & j,
        OpKind::Or => i | j,
        OpKind::Xor => i ^ j,
    };
    truncate_unsigned(ans, width.bit_count)
}

/// Computes `i OP j` on signed operands, truncated to `width`.
///
/// For shifts `j` is reinterpreted as an unsigned shift amount.
pub fn eval_signed(i: i64, j: i64, width: &WidthClass, op: &Operator) -> i64 {
    let ans = match op.kind {
        OpKind::Add => i.wrapping_add(j),
        OpKind::Sub => i.wrapping_sub(j),
        OpKind::Mul => i.wrapping_mul(j),
        OpKind::Div => {
            if j == 0 {
                0
            } else {
                i.wrapping_div(j)
            }
        }
        OpKind::Mod => {
            if j == 0 {
                0
            } else {
                i.wrapping_rem(j)
            }
        }
        OpKind::Shl => shl_i64(i, j as u64),
        OpKind::Shr => shr_i64(i, j as u64),
        OpKind::And => i & j,
        OpKind::Or => i | j,
        OpKind::Xor => i ^ j,
    };
    truncate_signed(ans, width.bit_count)
}

/// Computes `lhs OP rhs` for literals of `width`; the result's `Display` is
/// the literal text placed in generated tables.
pub fn eval(
    op: &Operator,
    width: &WidthClass,
    lhs: Literal,
    rhs: Literal,
) -> Result<Literal, ArithConstError> {
    match (width.signedness(), lhs, rhs) {
        (Signedness::Unsigned, Literal::Unsigned(i), Literal::Unsigned(j)) => {
            Ok(Literal::Unsigned(eval_unsigned(i, j, width, op)))
        }
        (Signedness::Signed, Literal::Signed(i), Literal::Signed(j)) => {
            Ok(Literal::Signed(eval_signed(i, j, width, op)))
        }
        _ => Err(ArithConstError(format!(
            "operand signedness mismatch for {} {} {} in width class {}",
            lhs, op.symbol, rhs, width.name
        ))),
    }
}
