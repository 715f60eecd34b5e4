//! Dialect-neutral model of one HDL module or entity interface.
//!
//! An [`Interface`] is an ordered list of [`Generic`]s followed by an ordered
//! list of [`Port`]s. Both SystemVerilog and VHDL parsers produce it, the
//! renderers of either dialect consume it, and the translator maps it between
//! dialects.
//!
//! # Architecture
//!
//! - **Model** ([`port`], [`generic`], [`interface`]): plain serde-enabled records.
//! - **Scanning** ([`scan`]): the [`HeaderParser`] seam implemented per dialect
//!   and the line-driven [`BlockScanner`] that finds one interface in a text.
//! - **Naming** ([`names`]): instance label allocation.

#![warn(missing_docs)]

pub mod error;
pub mod generic;
pub mod interface;
pub mod names;
pub mod port;
pub mod scan;

pub use error::FragmentError;
pub use generic::{Generic, GenericKind};
pub use interface::{Interface, InterfaceKind};
pub use names::InstanceNames;
pub use port::{Mode, Port};
pub use scan::{BlockScanner, HeaderParser, ScanState};

/// Splits a possibly comma-joined declaration name into single identifiers.
pub(crate) fn split_names(name: &str) -> impl Iterator<Item = &str> {
    name.split(',').map(str::trim).filter(|n| !n.is_empty())
}
