// SPDX-License-Identifier: Apache-2.0

//! Builds and runs the generated program with the system `go` tool, if it is
//! installed.

use arithconst_test_helpers::{run_go_program, GoRunError};

fn run_or_skip(source: &str) -> Option<arithconst_test_helpers::GoRunOutput> {
    match run_go_program(source) {
        Ok(output) => Some(output),
        Err(GoRunError::GoUnavailable) => {
            eprintln!("go not found in PATH - skipping");
            None
        }
        Err(e) => panic!("running generated program failed: {}", e),
    }
}

#[test]
fn test_generated_program_passes() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = arithconst::generate_go_source("arithconst-driver").unwrap();
    let output = match run_or_skip(&source) {
        Some(output) => output,
        None => return,
    };
    assert!(output.success(), "stdout: {}\nstderr: {}", output.stdout, output.stderr);
    assert_eq!(output.stdout, "");
}

#[test]
fn test_wrong_expectation_is_reported() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = arithconst::generate_go_source("arithconst-driver").unwrap();
    let good_row = "\t{fn: add_255_uint8, fnname: \"add_255_uint8\", in: 1, want: 0},";
    assert!(source.contains(good_row));
    let bad_row = "\t{fn: add_255_uint8, fnname: \"add_255_uint8\", in: 1, want: 7},";
    let corrupted = source.replacen(good_row, bad_row, 1);

    let output = match run_or_skip(&corrupted) {
        Some(output) => output,
        None => return,
    };
    assert_eq!(output.status, Some(1));
    assert_eq!(output.stdout, "add_255_uint8(1) = 0, want 7\n");
}
