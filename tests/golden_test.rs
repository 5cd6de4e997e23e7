// SPDX-License-Identifier: Apache-2.0

//! Golden comparison of a small custom configuration: an unsigned class that
//! exercises shifts and a zero divisor, and a signed class that exercises
//! `MIN % -1`.

use arithconst::operator::find_operator;
use arithconst::{generate, GoCaseBuilder, Operator, WidthClass};
use arithconst_test_helpers::compare_golden_text;

static WIDTHS: &[WidthClass] = &[
    WidthClass::unsigned("uint8", 8, &[0, 128]),
    WidthClass::signed("int8", 8, &[-128, -1]),
];

#[test]
fn test_rsh_mod_uint8_int8_golden() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ops: Vec<Operator> = ["rsh", "mod"]
        .iter()
        .map(|name| *find_operator(name).unwrap())
        .collect();
    let mut builder = GoCaseBuilder::new("arithconst-driver");
    generate(WIDTHS, &ops, &mut builder).unwrap();
    compare_golden_text(
        &builder.build(),
        "tests/goldens/rsh_mod_uint8_int8.golden.go",
    );
}
