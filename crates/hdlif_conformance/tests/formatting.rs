//! Alignment and indentation of printed blocks.

use hdlif_common::{Dialect, IndentUnit};
use hdlif_text::{align_block_on_re, indent, AlignOptions};

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[test]
fn colon_alignment() {
    let mut lines = owned(&["a : in X;", "bb : out Y;"]);
    align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
    assert_eq!(lines, owned(&["a  : in X;", "bb : out Y;"]));
}

#[test]
fn comment_lines_do_not_break_a_run() {
    let mut lines = owned(&["a : in X;", "-- spacer : here", "long_name : out Y;"]);
    align_block_on_re(&mut lines, ":", &AlignOptions::for_dialect(Dialect::Vhdl)).unwrap();
    assert_eq!(
        lines,
        owned(&["a         : in X;", "-- spacer : here", "long_name : out Y;"])
    );
}

#[test]
fn process_labels_are_never_aligned() {
    let mut lines = owned(&["a : in X;", "p : process (clk)", "bb : out Y;"]);
    align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
    assert_eq!(lines, owned(&["a : in X;", "p : process (clk)", "bb : out Y;"]));
}

#[test]
fn invalid_pattern_is_an_error() {
    let mut lines = owned(&["a", "b"]);
    assert!(align_block_on_re(&mut lines, "(", &AlignOptions::default()).is_err());
}

#[test]
fn indentation_follows_parentheses() {
    let mut lines = owned(&["port (", "a : in bit;", "b : out bit", ");"]);
    indent(&mut lines, 1, IndentUnit::Spaces(2));
    assert_eq!(lines, owned(&["  port (", "    a : in bit;", "    b : out bit", "  );"]));
}
