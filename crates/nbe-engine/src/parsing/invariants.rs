use super::types::Block;

/// Validates that `blocks` partition `source` exactly.
///
/// Asserts that:
/// - The first block starts at line 1 and each block starts right after the previous one
/// - Each block holds exactly `end - start + 1` lines
/// - The last block ends at the file's last line
/// - Joining all block lines reproduces the source lines
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[Block]) {
    let lines: Vec<&str> = source.lines().collect();

    let mut next = 1;
    for b in blocks {
        assert_eq!(
            b.start_line, next,
            "block does not start where the previous ended: {b:?}"
        );
        assert!(b.start_line <= b.end_line, "inverted block range: {b:?}");
        assert_eq!(
            b.lines.len(),
            b.end_line - b.start_line + 1,
            "block line count does not match its range: {b:?}"
        );
        next = b.end_line + 1;
    }
    assert_eq!(
        next - 1,
        lines.len(),
        "blocks cover {} lines but source has {}",
        next - 1,
        lines.len()
    );

    let rebuilt: Vec<&str> = blocks
        .iter()
        .flat_map(|b| b.lines.iter().map(String::as_str))
        .collect();
    assert_eq!(rebuilt, lines, "blocks do not reproduce the source");
}
