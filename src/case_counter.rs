// SPDX-License-Identifier: Apache-2.0

//! Builder that tallies generated functions and table rows instead of
//! rendering them.

use serde::Serialize;

use crate::generate::CaseBuilder;
use crate::plan::{FunctionCase, GeneratedCase};
use crate::width_class::{Signedness, WidthClass};
use crate::ArithConstError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorCounts {
    pub operator: String,
    pub functions: usize,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidthCounts {
    pub width: String,
    pub bit_count: u32,
    pub signedness: Signedness,
    pub operators: Vec<OperatorCounts>,
}

impl WidthCounts {
    pub fn functions(&self) -> usize {
        self.operators.iter().map(|o| o.functions).sum()
    }

    pub fn rows(&self) -> usize {
        self.operators.iter().map(|o| o.rows).sum()
    }

    pub fn operator(&self, name: &str) -> Option<&OperatorCounts> {
        self.operators.iter().find(|o| o.operator == name)
    }
}

#[derive(Default)]
pub struct CaseCounter {
    widths: Vec<WidthCounts>,
}

impl CaseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts in width-class order of first appearance.
    pub fn counts(&self) -> &[WidthCounts] {
        &self.widths
    }

    pub fn width(&self, name: &str) -> Option<&WidthCounts> {
        self.widths.iter().find(|w| w.width == name)
    }

    pub fn total_functions(&self) -> usize {
        self.widths.iter().map(|w| w.functions()).sum()
    }

    pub fn total_rows(&self) -> usize {
        self.widths.iter().map(|w| w.rows()).sum()
    }

    fn entry(&mut self, width: &WidthClass, operator: &str) -> &mut OperatorCounts {
        let index = match self.widths.iter().position(|w| w.width == width.name) {
            Some(index) => index,
            None => {
                self.widths.push(WidthCounts {
                    width: width.name.to_string(),
                    bit_count: width.bit_count,
                    signedness: width.signedness(),
                    operators: vec![],
                });
                self.widths.len() - 1
            }
        };
        let operators = &mut self.widths[index].operators;
        let op_index = match operators.iter().position(|o| o.operator == operator) {
            Some(op_index) => op_index,
            None => {
                operators.push(OperatorCounts {
                    operator: operator.to_string(),
                    functions: 0,
                    rows: 0,
                });
                operators.len() - 1
            }
        };
        &mut operators[op_index]
    }
}

impl CaseBuilder for CaseCounter {
    fn start_file(&mut self) -> Result<(), ArithConstError> {
        self.widths.clear();
        Ok(())
    }

    fn add_function(&mut self, case: &FunctionCase) -> Result<(), ArithConstError> {
        self.entry(case.width, case.op.name).functions += 1;
        Ok(())
    }

    fn start_table(&mut self, _width: &WidthClass) -> Result<(), ArithConstError> {
        Ok(())
    }

    fn add_table_row(&mut self, case: &GeneratedCase) -> Result<(), ArithConstError> {
        self.entry(case.width, case.op.name).rows += 1;
        Ok(())
    }

    fn end_table(&mut self, _width: &WidthClass) -> Result<(), ArithConstError> {
        Ok(())
    }

    fn add_runner(&mut self, _widths: &[WidthClass]) -> Result<(), ArithConstError> {
        Ok(())
    }
}
