// SPDX-License-Identifier: Apache-2.0

//! Builder that renders the generated test as a Go `// run` program.
//!
//! Each function is marked `//go:noinline` so that the compiler has to fold
//! the constant operand into the function body instead of the call site.

use std::collections::HashSet;

use crate::generate::CaseBuilder;
use crate::plan::{FunctionCase, FunctionVariant, GeneratedCase};
use crate::width_class::WidthClass;
use crate::ArithConstError;

pub struct GoCaseBuilder {
    lines: Vec<String>,
    generator_name: String,
    function_names: HashSet<String>,
    /// Width class whose table is currently being populated.
    open_table: Option<String>,
    closed_tables: Vec<String>,
}

impl GoCaseBuilder {
    pub fn new(generator_name: &str) -> Self {
        Self {
            lines: vec![],
            generator_name: generator_name.to_string(),
            function_names: HashSet::new(),
            open_table: None,
            closed_tables: vec![],
        }
    }

    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    fn constant_text(case: &FunctionCase) -> String {
        if case.widen_constant {
            format!("uint64({})", case.constant)
        } else {
            case.constant.to_string()
        }
    }
}

impl CaseBuilder for GoCaseBuilder {
    fn start_file(&mut self) -> Result<(), ArithConstError> {
        self.lines = vec![
            "// run".to_string(),
            format!(
                "// Code generated by {}. DO NOT EDIT.",
                self.generator_name
            ),
            String::new(),
            "package main".to_string(),
            String::new(),
            "import (".to_string(),
            "\t\"fmt\"".to_string(),
            "\t\"os\"".to_string(),
            ")".to_string(),
        ];
        self.function_names.clear();
        self.open_table = None;
        self.closed_tables.clear();
        Ok(())
    }

    fn add_function(&mut self, case: &FunctionCase) -> Result<(), ArithConstError> {
        let name = case.symbol_name();
        if !self.function_names.insert(name.clone()) {
            return Err(ArithConstError(format!(
                "function {} generated more than once",
                name
            )));
        }
        let ty = case.width.name;
        let constant = Self::constant_text(case);
        let body = match case.variant {
            FunctionVariant::ConstantRight => format!("a {} {}", case.op.symbol, constant),
            FunctionVariant::ConstantLeft => format!("{} {} a", constant, case.op.symbol),
        };
        self.lines.push(String::new());
        self.lines.push("//go:noinline".to_string());
        self.lines.push(format!(
            "func {}(a {}) {} {{ return {} }}",
            name, ty, ty, body
        ));
        Ok(())
    }

    fn start_table(&mut self, width: &WidthClass) -> Result<(), ArithConstError> {
        if let Some(open) = &self.open_table {
            return Err(ArithConstError(format!(
                "table for {} started while table for {} is still open",
                width.name, open
            )));
        }
        if self.closed_tables.iter().any(|t| t == width.name) {
            return Err(ArithConstError(format!(
                "table for {} generated more than once",
                width.name
            )));
        }
        let ty = width.name;
        self.lines.push(String::new());
        self.lines.push(format!("type test_{} struct {{", ty));
        self.lines.push(format!("\tfn     func({}) {}", ty, ty));
        self.lines.push("\tfnname string".to_string());
        self.lines.push(format!("\tin     {}", ty));
        self.lines.push(format!("\twant   {}", ty));
        self.lines.push("}".to_string());
        self.lines.push(String::new());
        self.lines
            .push(format!("var tests_{} = []test_{}{{", ty, ty));
        self.open_table = Some(width.name.to_string());
        Ok(())
    }

    fn add_table_row(&mut self, case: &GeneratedCase) -> Result<(), ArithConstError> {
        match &self.open_table {
            Some(open) if open == case.width.name => {}
            Some(open) => {
                return Err(ArithConstError(format!(
                    "{} row added to the table for {}",
                    case.width.name, open
                )))
            }
            None => {
                return Err(ArithConstError(format!(
                    "{} row added outside of a table",
                    case.width.name
                )))
            }
        }
        let name = case.function().symbol_name();
        if !self.function_names.contains(&name) {
            return Err(ArithConstError(format!(
                "table row references function {} which was not generated",
                name
            )));
        }
        self.lines.push(format!(
            "\t{{fn: {}, fnname: \"{}\", in: {}, want: {}}},",
            name,
            name,
            case.input(),
            case.expected
        ));
        Ok(())
    }

    fn end_table(&mut self, width: &WidthClass) -> Result<(), ArithConstError> {
        match self.open_table.take() {
            Some(open) if open == width.name => {
                self.lines.push("}".to_string());
                self.closed_tables.push(open);
                Ok(())
            }
            Some(open) => Err(ArithConstError(format!(
                "ending table for {} but the open table is for {}",
                width.name, open
            ))),
            None => Err(ArithConstError(format!(
                "ending table for {} which was never started",
                width.name
            ))),
        }
    }

    fn add_runner(&mut self, widths: &[WidthClass]) -> Result<(), ArithConstError> {
        if let Some(open) = &self.open_table {
            return Err(ArithConstError(format!(
                "runner generated while table for {} is still open",
                open
            )));
        }
        if let Some(missing) = widths
            .iter()
            .find(|w| !self.closed_tables.iter().any(|t| t == w.name))
        {
            return Err(ArithConstError(format!(
                "runner references table for {} which was not generated",
                missing.name
            )));
        }
        self.lines.push(String::new());
        self.lines.push("var failed bool".to_string());
        self.lines.push(String::new());
        self.lines.push("func main() {".to_string());
        for width in widths {
            self.lines
                .push(format!("\tfor _, test := range tests_{} {{", width.name));
            self.lines.push(
                "\t\tif got := test.fn(test.in); got != test.want {".to_string(),
            );
            self.lines.push(
                "\t\t\tfmt.Printf(\"%s(%d) = %d, want %d\\n\", test.fnname, test.in, got, test.want)"
                    .to_string(),
            );
            self.lines.push("\t\t\tfailed = true".to_string());
            self.lines.push("\t\t}".to_string());
            self.lines.push("\t}".to_string());
        }
        self.lines.push(String::new());
        self.lines.push("\tif failed {".to_string());
        self.lines.push("\t\tos.Exit(1)".to_string());
        self.lines.push("\t}".to_string());
        self.lines.push("}".to_string());
        Ok(())
    }
}
