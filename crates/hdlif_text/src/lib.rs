//! Character-level text handling for HDL interface blocks.
//!
//! Everything in this crate works on plain strings and knows nothing about
//! ports or generics:
//!
//! - [`normalize`]: line-comment stripping and whitespace collapsing.
//! - [`parens`]: the [`Parentheses`] balance tracker and group extraction.
//! - [`split`]: splitting and searching at nesting depth zero.
//! - [`align`]: vertical alignment of an anchor pattern across lines.
//! - [`indent`]: re-indentation by running parenthesis depth.
//! - [`words`]: keyword and identifier scanning.

#![warn(missing_docs)]

pub mod align;
pub mod indent;
pub mod normalize;
pub mod parens;
pub mod split;
pub mod words;

pub use align::{align_block_on_re, AlignError, AlignOptions, Aligner, PadSide};
pub use indent::{indent, left_justify};
pub use normalize::{is_comment_line, strip_comments, strip_whitespace};
pub use parens::Parentheses;
pub use split::{find_assignment, find_top_level, split_top_level, TopLevelChars};
