//! One-stop facade over parsing, translation and rendering.
//!
//! A [`Session`] owns the loaded configuration and the diagnostic sink. It
//! parses a block of either dialect into an [`Interface`](hdlif_ir::Interface),
//! renders any [`View`] of it in either dialect (translating on the way), and
//! parses batches of independent blocks in parallel.

#![warn(missing_docs)]

pub mod session;
pub mod view;

pub use session::Session;
pub use view::View;
