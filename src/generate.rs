// SPDX-License-Identifier: Apache-2.0

//! Drives a [`CaseBuilder`] over the planned functions and verification
//! tables.
//!
//! The walk is: file preamble, every function of every width class, then one
//! table per width class, then the runner that checks all tables.

use crate::go_builder::GoCaseBuilder;
use crate::operator::{Operator, OPERATORS};
use crate::plan::{plan_functions, plan_table, FunctionCase, GeneratedCase};
use crate::width_class::{WidthClass, WIDTH_CLASSES};
use crate::ArithConstError;

pub trait CaseBuilder {
    fn start_file(&mut self) -> Result<(), ArithConstError>;

    fn add_function(&mut self, case: &FunctionCase) -> Result<(), ArithConstError>;

    fn start_table(&mut self, width: &WidthClass) -> Result<(), ArithConstError>;

    /// Rows are only added between `start_table` and `end_table` for the same
    /// width class.
    fn add_table_row(&mut self, case: &GeneratedCase) -> Result<(), ArithConstError>;

    fn end_table(&mut self, width: &WidthClass) -> Result<(), ArithConstError>;

    /// `widths` lists every width class whose table the runner checks.
    fn add_runner(&mut self, widths: &[WidthClass]) -> Result<(), ArithConstError>;
}

pub fn generate(
    widths: &[WidthClass],
    ops: &[Operator],
    builder: &mut dyn CaseBuilder,
) -> Result<(), ArithConstError> {
    log::info!(
        "generate; width classes: {} operators: {}",
        widths.len(),
        ops.len()
    );
    for width in widths {
        width.validate()?;
    }

    builder.start_file()?;
    for width in widths {
        let functions = plan_functions(width, ops);
        log::debug!("{}: {} functions", width.name, functions.len());
        for function in functions.iter() {
            builder.add_function(function)?;
        }
    }

    for width in widths {
        let rows = plan_table(width, ops)?;
        log::debug!("{}: {} table rows", width.name, rows.len());
        builder.start_table(width)?;
        for row in rows.iter() {
            builder.add_table_row(row)?;
        }
        builder.end_table(width)?;
    }

    builder.add_runner(widths)?;
    Ok(())
}

/// Generates the test for the built-in width classes and operators.
pub fn generate_default(builder: &mut dyn CaseBuilder) -> Result<(), ArithConstError> {
    generate(WIDTH_CLASSES, OPERATORS, builder)
}

/// Returns the text of the generated Go test for the built-in configuration.
pub fn generate_go_source(generator_name: &str) -> Result<String, ArithConstError> {
    let mut builder = GoCaseBuilder::new(generator_name);
    generate_default(&mut builder)?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::find_operator;

    #[derive(Default)]
    struct RecordingBuilder {
        events: Vec<String>,
    }

    impl CaseBuilder for RecordingBuilder {
        fn start_file(&mut self) -> Result<(), ArithConstError> {
            self.events.push("start_file".to_string());
            Ok(())
        }

        fn add_function(&mut self, case: &FunctionCase) -> Result<(), ArithConstError> {
            self.events.push(format!("fn {}", case.symbol_name()));
            Ok(())
        }

        fn start_table(&mut self, width: &WidthClass) -> Result<(), ArithConstError> {
            self.events.push(format!("start_table {}", width.name));
            Ok(())
        }

        fn add_table_row(&mut self, case: &GeneratedCase) -> Result<(), ArithConstError> {
            self.events.push(format!(
                "row {}({}) = {}",
                case.function().symbol_name(),
                case.input(),
                case.expected
            ));
            Ok(())
        }

        fn end_table(&mut self, width: &WidthClass) -> Result<(), ArithConstError> {
            self.events.push(format!("end_table {}", width.name));
            Ok(())
        }

        fn add_runner(&mut self, widths: &[WidthClass]) -> Result<(), ArithConstError> {
            let names: Vec<&str> = widths.iter().map(|w| w.name).collect();
            self.events.push(format!("runner {}", names.join(",")));
            Ok(())
        }
    }

    static TINY_WIDTHS: &[WidthClass] = &[
        WidthClass::unsigned("uint8", 8, &[0, 255]),
        WidthClass::signed("int8", 8, &[-128]),
    ];

    #[test]
    fn test_walk_order() {
        let ops = [*find_operator("mod").unwrap()];
        let mut builder = RecordingBuilder::default();
        generate(TINY_WIDTHS, &ops, &mut builder).unwrap();
        assert_eq!(
            builder.events,
            vec![
                "start_file",
                "fn mod_0_uint8",
                "fn mod_uint8_255",
                "fn mod_255_uint8",
                "fn mod_int8_Neg128",
                "fn mod_Neg128_int8",
                "start_table uint8",
                "row mod_0_uint8(255) = 0",
                "row mod_uint8_255(0) = 0",
                "row mod_255_uint8(255) = 0",
                "row mod_uint8_255(255) = 0",
                "end_table uint8",
                "start_table int8",
                "row mod_Neg128_int8(-128) = 0",
                "row mod_int8_Neg128(-128) = 0",
                "end_table int8",
                "runner uint8,int8",
            ]
        );
    }

    #[test]
    fn test_invalid_width_class_aborts_before_output() {
        static BAD: &[WidthClass] = &[WidthClass::unsigned("uint8", 8, &[300])];
        let mut builder = RecordingBuilder::default();
        let err = generate(BAD, OPERATORS, &mut builder).unwrap_err();
        assert!(err.0.contains("300"), "{}", err);
        assert!(builder.events.is_empty());
    }

    #[test]
    fn test_generate_go_source_is_deterministic() {
        let first = generate_go_source("arithconst-test").unwrap();
        let second = generate_go_source("arithconst-test").unwrap();
        assert!(first == second, "generation is not idempotent");
    }

    #[test]
    fn test_signed_tables_without_shifts_are_empty() {
        let ops = [*find_operator("rsh").unwrap()];
        let mut builder = RecordingBuilder::default();
        generate(WIDTH_CLASSES, &ops, &mut builder).unwrap();
        let start = builder
            .events
            .iter()
            .position(|e| e == "start_table int16")
            .unwrap();
        assert_eq!(builder.events[start + 1], "end_table int16");
        assert!(builder
            .events
            .iter()
            .filter(|e| e.starts_with("fn "))
            .all(|e| e.contains("uint")));
    }
}
