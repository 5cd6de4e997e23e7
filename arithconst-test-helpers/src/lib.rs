// SPDX-License-Identifier: Apache-2.0

mod run_go;

pub use run_go::{find_go, run_go_program, GoRunError, GoRunOutput};

/// Environment variable that makes [`compare_golden_text`] rewrite golden
/// files instead of checking them.
pub const UPDATE_GOLDEN_ENV: &str = "ARITHCONST_UPDATE_GOLDEN";

/// Compares generated text against the golden file at `relpath`.
///
/// A missing or empty golden file is (re)written from `got`, as is any golden
/// file when [`UPDATE_GOLDEN_ENV`] is set. Otherwise the texts must be equal
/// byte for byte; on mismatch the first differing line is reported, since the
/// generated programs are far too large for a full diff to be readable.
pub fn compare_golden_text(got: &str, relpath: &str) {
    let golden_path = std::path::Path::new(relpath);
    let golden_len = golden_path.metadata().map(|m| m.len()).unwrap_or(0);
    if std::env::var_os(UPDATE_GOLDEN_ENV).is_some() || golden_len == 0 {
        log::info!(
            "compare_golden_text; writing golden file to {}",
            golden_path.display()
        );
        std::fs::write(golden_path, got).expect("write golden");
        return;
    }

    log::info!(
        "compare_golden_text; reading golden file from {}",
        golden_path.display()
    );
    let want = std::fs::read_to_string(golden_path).expect("read golden");
    if got == want {
        return;
    }
    let mismatch = got
        .split('\n')
        .zip(want.split('\n'))
        .enumerate()
        .find(|(_, (g, w))| g != w);
    match mismatch {
        Some((index, (g, w))) => panic!(
            "Golden mismatch against {} at line {}:\n  got:  {:?}\n  want: {:?}\nrun with {}=1 to update.",
            golden_path.display(),
            index + 1,
            g,
            w,
            UPDATE_GOLDEN_ENV
        ),
        None => panic!(
            "Golden mismatch against {}: got {} lines, want {}; run with {}=1 to update.",
            golden_path.display(),
            got.split('\n').count(),
            want.split('\n').count(),
            UPDATE_GOLDEN_ENV
        ),
    }
}

/// Creates a unique temporary directory for tests under the system temp dir,
/// named from `base_prefix`, the process id and a nanosecond timestamp.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn make_test_tmpdir(base_prefix: &str) -> tempfile::TempDir {
    let pid = std::process::id();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let prefix = format!("{}_{}_{}", base_prefix, pid, nanos);
    tempfile::Builder::new()
        .prefix(&prefix)
        .tempdir_in(std::env::temp_dir())
        .expect("tempdir create")
}
