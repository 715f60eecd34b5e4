//! Vertical alignment of an anchor pattern across contiguous lines.

use crate::normalize::is_comment_line;
use hdlif_common::{Dialect, InternalError};
use regex::Regex;

/// Lines matching any of these are never aligned: a process label colon,
/// conditionals, and `when ... =>` choices would otherwise line up with
/// unrelated declarations.
const DENY_PATTERNS: [&str; 4] = [
    r"(?i):\s+process\b",
    r"(?i)\bif\b",
    r"(?i)\bthen\b",
    r"(?i)\bwhen\b.*?=>",
];

/// Errors raised by the aligner.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// The anchor pattern is not a valid regular expression.
    #[error("invalid alignment pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Fewer scope tags than lines were supplied.
    #[error("scope list has {scopes} entries for {lines} lines")]
    ScopeLength {
        /// Number of scope tags supplied.
        scopes: usize,
        /// Number of lines to align.
        lines: usize,
    },
}

impl From<AlignError> for InternalError {
    fn from(err: AlignError) -> Self {
        InternalError::new(err.to_string())
    }
}

/// Which edge of the anchor match is lined up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadSide {
    /// Pad before the anchor so the match starts line up.
    #[default]
    Pre,
    /// Pad after the anchor so the match ends line up.
    Post,
}

/// Options of one alignment pass.
#[derive(Debug, Clone, Copy)]
pub struct AlignOptions<'s> {
    /// Which edge of the match is aligned.
    pub side: PadSide,
    /// Leave comment-only lines out of every group.
    pub skip_comments: bool,
    /// Dialect deciding what a comment line looks like.
    pub dialect: Dialect,
    /// Optional scope tag per line; a tag change ends the current group.
    pub scopes: Option<&'s [String]>,
}

impl Default for AlignOptions<'_> {
    fn default() -> Self {
        Self {
            side: PadSide::Pre,
            skip_comments: true,
            dialect: Dialect::Vhdl,
            scopes: None,
        }
    }
}

impl<'s> AlignOptions<'s> {
    /// Default options for `dialect`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Switches to [`PadSide::Post`].
    pub fn post(mut self) -> Self {
        self.side = PadSide::Post;
        self
    }

    /// Attaches per-line scope tags.
    pub fn with_scopes(mut self, scopes: &'s [String]) -> Self {
        self.scopes = Some(scopes);
        self
    }
}

/// Runs alignment passes with a precompiled deny-list.
pub struct Aligner {
    deny: Vec<Regex>,
}

impl Aligner {
    /// Compiles the deny-list.
    pub fn new() -> Result<Self, AlignError> {
        let deny = DENY_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { deny })
    }

    /// Returns `true` if the line sits in a context that is never aligned.
    pub fn is_denied(&self, line: &str) -> bool {
        self.deny.iter().any(|re| re.is_match(line))
    }

    /// Compiles `pattern` and aligns `lines` on it.
    pub fn align_str(
        &self,
        lines: &mut [String],
        pattern: &str,
        opts: &AlignOptions<'_>,
    ) -> Result<(), AlignError> {
        let re = Regex::new(pattern)?;
        self.align(lines, &re, opts)
    }

    /// Aligns the first match of `pattern` across each run of matching lines.
    ///
    /// A run ends at a line without a match, a deny-listed line, a scope
    /// change, or the end of input. Comment lines are never part of a run; a
    /// comment line that matches does not end one either. Runs of two or more
    /// lines are padded with spaces so every anchor reaches the rightmost
    /// column, one further if a line at that column has no space before it.
    pub fn align(
        &self,
        lines: &mut [String],
        pattern: &Regex,
        opts: &AlignOptions<'_>,
    ) -> Result<(), AlignError> {
        if let Some(scopes) = opts.scopes {
            if scopes.len() < lines.len() {
                return Err(AlignError::ScopeLength {
                    scopes: scopes.len(),
                    lines: lines.len(),
                });
            }
        }

        let last = lines.len().saturating_sub(1);
        let mut group: Vec<(usize, usize)> = Vec::new();
        let mut prior_scope: Option<&str> = None;

        for i in 0..lines.len() {
            let line = &lines[i];
            let banned = self.is_denied(line);
            let comment = opts.skip_comments && is_comment_line(line, opts.dialect);
            let anchor = pattern.find(line).map(|m| match opts.side {
                PadSide::Pre => m.start(),
                PadSide::Post => m.end(),
            });
            let scope_switch = match opts.scopes {
                Some(scopes) => prior_scope != Some(scopes[i].as_str()),
                None => false,
            };
            let eligible = anchor.filter(|_| !comment && !banned);

            if i == last && !scope_switch {
                if let Some(offset) = eligible {
                    group.push((i, offset));
                }
            }
            if anchor.is_none() || scope_switch || banned || i == last {
                pad_group(lines, &group);
                group.clear();
            }
            if let Some(offset) = eligible {
                if i != last {
                    group.push((i, offset));
                }
            }
            if let Some(scopes) = opts.scopes {
                prior_scope = Some(scopes[i].as_str());
            }
        }
        Ok(())
    }
}

/// Pads each grouped line so its anchor reaches the group's target column.
fn pad_group(lines: &mut [String], group: &[(usize, usize)]) {
    if group.len() < 2 {
        return;
    }
    let columns: Vec<usize> = group
        .iter()
        .map(|&(i, offset)| lines[i][..offset].chars().count())
        .collect();

    let widest = columns.iter().copied().max().unwrap_or(0);
    let crowded = group.iter().zip(&columns).any(|(&(i, offset), &column)| {
        column == widest && lines[i][..offset].chars().last().is_some_and(|c| c != ' ')
    });
    let target = if crowded { widest + 1 } else { widest };

    for (&(i, offset), &column) in group.iter().zip(&columns) {
        let pad = " ".repeat(target - column);
        lines[i].insert_str(offset, &pad);
    }
}

/// Aligns `lines` on `pattern` with a freshly compiled deny-list.
pub fn align_block_on_re(
    lines: &mut [String],
    pattern: &str,
    opts: &AlignOptions<'_>,
) -> Result<(), AlignError> {
    Aligner::new()?.align_str(lines, pattern, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn aligns_colons() {
        let mut lines = owned(&["a : in X;", "bb : out Y;"]);
        align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
        assert_eq!(lines, owned(&["a  : in X;", "bb : out Y;"]));
    }

    #[test]
    fn post_side_aligns_after_mode() {
        let mut lines = owned(&["a  : in X;", "bb : out Y;"]);
        let opts = AlignOptions::default().post();
        align_block_on_re(&mut lines, r":\s?(?:in\b|out\b|inout\b|buffer\b)?\s*", &opts).unwrap();
        assert_eq!(lines, owned(&["a  : in  X;", "bb : out Y;"]));
    }

    #[test]
    fn bumps_when_no_space_before_anchor() {
        let mut lines = owned(&["a:x", "bb:y"]);
        align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
        assert_eq!(lines, owned(&["a  :x", "bb :y"]));
    }

    #[test]
    fn single_line_untouched() {
        let mut lines = owned(&["a : x;"]);
        align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
        assert_eq!(lines, owned(&["a : x;"]));
    }

    #[test]
    fn non_matching_line_splits_groups() {
        let mut lines = owned(&["a : x;", "bbb : y;", "port (", "cc : z;", "d : w;"]);
        align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
        assert_eq!(
            lines,
            owned(&["a   : x;", "bbb : y;", "port (", "cc : z;", "d  : w;"])
        );
    }

    #[test]
    fn denied_lines_break_groups() {
        let mut lines = owned(&["a => 1,", "when others => x,", "bbb => 2,", "c => 3"]);
        align_block_on_re(&mut lines, "=>", &AlignOptions::default()).unwrap();
        assert_eq!(
            lines,
            owned(&["a => 1,", "when others => x,", "bbb => 2,", "c   => 3"])
        );
    }

    #[test]
    fn matching_comment_lines_are_skipped_without_breaking() {
        let mut lines = owned(&["a : x;", "-- note : here", "bbb : y;"]);
        align_block_on_re(&mut lines, ":", &AlignOptions::default()).unwrap();
        assert_eq!(lines, owned(&["a   : x;", "-- note : here", "bbb : y;"]));
    }

    #[test]
    fn comment_lines_use_dialect_marker() {
        let mut lines = owned(&["a = 1;", "// b = 2", "ccc = 3;"]);
        let opts = AlignOptions::for_dialect(Dialect::SystemVerilog);
        align_block_on_re(&mut lines, "=", &opts).unwrap();
        assert_eq!(lines, owned(&["a   = 1;", "// b = 2", "ccc = 3;"]));
    }

    #[test]
    fn scope_change_breaks_groups() {
        let mut lines = owned(&["a : x;", "bbb : y;", "cc : z;"]);
        let scopes = owned(&["entity", "entity", "architecture"]);
        let opts = AlignOptions::default().with_scopes(&scopes);
        align_block_on_re(&mut lines, ":", &opts).unwrap();
        assert_eq!(lines, owned(&["a   : x;", "bbb : y;", "cc : z;"]));
    }

    #[test]
    fn short_scope_list_errors() {
        let mut lines = owned(&["a : x;", "b : y;"]);
        let scopes = owned(&["entity"]);
        let opts = AlignOptions::default().with_scopes(&scopes);
        let err = align_block_on_re(&mut lines, ":", &opts).unwrap_err();
        assert!(matches!(err, AlignError::ScopeLength { scopes: 1, lines: 2 }));
    }

    #[test]
    fn invalid_pattern_errors() {
        let mut lines = owned(&["a"]);
        let err = align_block_on_re(&mut lines, "(", &AlignOptions::default()).unwrap_err();
        assert!(matches!(err, AlignError::Pattern(_)));
    }

    #[test]
    fn deny_list() {
        let aligner = Aligner::new().unwrap();
        assert!(aligner.is_denied("p_main : process (clk)"));
        assert!(aligner.is_denied("IF a = b THEN"));
        assert!(aligner.is_denied("when IDLE => x <= 1;"));
        assert!(!aligner.is_denied("when_ready : in std_logic"));
        assert!(!aligner.is_denied("clk => clk,"));
    }
}
