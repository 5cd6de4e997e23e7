// SPDX-License-Identifier: Apache-2.0

//! Generator for constant-operand integer arithmetic tests.
//!
//! For every integer width class and operator, the generator emits one
//! function per boundary operand with that operand baked in as a literal (on
//! either side of the operator), and a table that calls every function with
//! every boundary operand of its width class. Expected values come from an
//! independent reference evaluator that models fixed-width wraparound.
//!
//! ```
//! let text = arithconst::generate_go_source("example").unwrap();
//! assert!(text.contains("func add_uint8_255(a uint8) uint8 { return a + 255 }"));
//! assert!(text.contains("{fn: add_255_uint8, fnname: \"add_255_uint8\", in: 1, want: 0},"));
//! ```

pub mod arithconst_error;
pub mod case_counter;
pub mod generate;
pub mod go_builder;
pub mod operator;
pub mod plan;
pub mod ref_eval;
pub mod width_class;

pub use arithconst_error::ArithConstError;
pub use case_counter::CaseCounter;
pub use generate::{generate, generate_default, generate_go_source, CaseBuilder};
pub use go_builder::GoCaseBuilder;
pub use operator::{OpCategory, OpKind, Operator, OPERATORS};
pub use plan::{FunctionCase, FunctionVariant, GeneratedCase};
pub use width_class::{Literal, Signedness, WidthClass, WIDTH_CLASSES};
