//! Finding one interface block in line-oriented text.

use crate::interface::Interface;
use hdlif_common::Dialect;
use hdlif_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use hdlif_text::{strip_comments, Parentheses};

/// The per-dialect half of interface scanning.
///
/// Implementations recognise the header and terminator lines of their dialect
/// and turn a complete block into an [`Interface`].
pub trait HeaderParser {
    /// The dialect whose comment syntax is stripped before matching.
    fn dialect(&self) -> Dialect;

    /// The sink that receives parse diagnostics.
    fn sink(&self) -> &DiagnosticSink;

    /// Byte offset of a header keyword in `line`, recording the interface
    /// name and kind on a match.
    fn interface_start(&mut self, line: &str) -> Option<usize>;

    /// Byte offset just past the terminator in `line`.
    fn interface_end(&self, line: &str) -> Option<usize>;

    /// Parses a complete block. `None` when no header can be found.
    fn parse_block(&mut self, text: &str) -> Option<Interface>;
}

/// Where a [`BlockScanner`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No header seen yet.
    Searching,
    /// A header was seen; lines are being collected.
    StartFound,
    /// The terminator was seen and the block was parsed.
    Parsed,
}

/// Drives a [`HeaderParser`] over a text one line at a time.
///
/// The block closes on the first terminator line reached while every
/// parenthesis opened since the header is closed again.
pub struct BlockScanner<P> {
    parser: P,
    state: ScanState,
    block: String,
    parens: Parentheses,
    result: Option<Interface>,
}

impl<P: HeaderParser> BlockScanner<P> {
    /// Creates a scanner in the [`ScanState::Searching`] state.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            state: ScanState::Searching,
            block: String::new(),
            parens: Parentheses::new(),
            result: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The raw text collected since the header.
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Feeds the next line and returns the resulting state.
    ///
    /// Lines after the block has been parsed are ignored.
    pub fn feed_line(&mut self, line: &str) -> ScanState {
        let dialect = self.parser.dialect();
        let mut from = 0;

        if self.state == ScanState::Searching {
            let code = strip_comments(line, dialect);
            match self.parser.interface_start(&code) {
                Some(start) => {
                    self.state = ScanState::StartFound;
                    from = start;
                    self.parser
                        .sink()
                        .trace(|| format!("interface start: {}", line.trim()));
                }
                None => return self.state,
            }
        }
        if self.state != ScanState::StartFound {
            return self.state;
        }

        let code = strip_comments(&line[from..], dialect);
        self.parens.scan(&code);
        let end = if self.parens.balanced() {
            self.parser.interface_end(&code)
        } else {
            None
        };

        match end {
            Some(end) => {
                self.block.push_str(&code[..end]);
                self.parser
                    .sink()
                    .trace(|| format!("interface end: {}", line.trim()));
                self.state = ScanState::Parsed;
                self.result = self.parser.parse_block(&self.block);
            }
            None => {
                self.block.push_str(&line[from..]);
                self.block.push('\n');
            }
        }
        self.state
    }

    /// Feeds every line of `text` until a block is parsed, then finishes.
    pub fn scan(&mut self, text: &str) -> Option<Interface> {
        for line in text.lines() {
            if self.feed_line(line) == ScanState::Parsed {
                break;
            }
        }
        self.finish()
    }

    /// Ends the scan and hands out the parsed interface.
    ///
    /// A block that was opened but never terminated, or a text without any
    /// header, is reported to the sink.
    pub fn finish(&mut self) -> Option<Interface> {
        match self.state {
            ScanState::Searching => {
                self.parser.sink().emit(Diagnostic::error(
                    DiagnosticCode::NO_INTERFACE,
                    "no interface found",
                ));
                None
            }
            ScanState::StartFound => {
                let header = self.block.lines().next().unwrap_or_default().trim();
                self.parser.sink().emit(
                    Diagnostic::error(DiagnosticCode::UNTERMINATED, "interface is never terminated")
                        .with_fragment(header)
                        .with_note(format!(
                            "{} unclosed parenthesis at end of input",
                            self.parens.delta().max(0)
                        )),
                );
                None
            }
            ScanState::Parsed => self.result.take(),
        }
    }

    /// Returns the wrapped parser.
    pub fn into_parser(self) -> P {
        self.parser
    }
}
