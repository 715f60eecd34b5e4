//! Parenthesis balance tracking across a stream of lines.

/// Tracks unmatched parentheses while a block is fed to it line by line.
///
/// The counters persist across [`scan`](Self::scan) calls so a caller can tell
/// when a multi-line header has closed all of its groups; the position lists
/// only describe the most recently scanned line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parentheses {
    open_count: usize,
    close_count: usize,
    open_positions: Vec<usize>,
    close_positions: Vec<usize>,
}

impl Parentheses {
    /// Creates a tracker with no pending parentheses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker that starts with the given unmatched counts.
    pub fn with_counts(open_count: usize, close_count: usize) -> Self {
        Self {
            open_count,
            close_count,
            ..Self::default()
        }
    }

    /// Number of `(` not yet closed.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Number of `)` seen without a pending `(`.
    pub fn close_count(&self) -> usize {
        self.close_count
    }

    /// Byte offsets of the unmatched `(` in the last scanned line.
    pub fn open_positions(&self) -> &[usize] {
        &self.open_positions
    }

    /// Byte offsets of the unmatched `)` in the last scanned line.
    pub fn close_positions(&self) -> &[usize] {
        &self.close_positions
    }

    /// Unmatched opens minus unmatched closes.
    pub fn delta(&self) -> isize {
        self.open_count as isize - self.close_count as isize
    }

    /// Returns `true` when every `(` seen so far has been closed.
    pub fn balanced(&self) -> bool {
        self.open_count == self.close_count
    }

    /// Clears counters and positions.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Updates the running counts with the parentheses of `line`.
    ///
    /// A `)` first closes an open from this line, then an open carried over
    /// from earlier lines; only when neither exists is it counted (and its
    /// position recorded) as an unmatched close.
    pub fn scan(&mut self, line: &str) {
        self.open_positions.clear();
        self.close_positions.clear();
        for (i, c) in line.char_indices() {
            match c {
                '(' => {
                    self.open_count += 1;
                    self.open_positions.push(i);
                }
                ')' => {
                    if self.open_positions.pop().is_some() {
                        self.open_count -= 1;
                    } else if self.open_count > 0 {
                        self.open_count -= 1;
                    } else {
                        self.close_count += 1;
                        self.close_positions.push(i);
                    }
                }
                _ => {}
            }
        }
    }

    /// Byte offsets of the first top-level `(` and its matching `)`.
    ///
    /// Returns `None` when no group in `line` is complete.
    pub fn group_span(line: &str) -> Option<(usize, usize)> {
        let mut depth = 0usize;
        let mut start = 0;
        for (i, c) in line.char_indices() {
            match c {
                '(' => {
                    if depth == 0 {
                        start = i;
                    }
                    depth += 1;
                }
                ')' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((start, i));
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Returns the interior of the first complete top-level group of `line`.
    ///
    /// Nested groups are part of the interior. `None` if no group closes or
    /// the group holds only whitespace.
    pub fn extract(line: &str) -> Option<&str> {
        let (open, close) = Self::group_span(line)?;
        let interior = &line[open + 1..close];
        if interior.trim().is_empty() {
            None
        } else {
            Some(interior)
        }
    }
}
