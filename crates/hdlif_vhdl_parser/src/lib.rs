//! VHDL entity and component parsing and printing.
//!
//! [`VhdlHeaderParser`] plugs into [`hdlif_ir::BlockScanner`] and reads the
//! `generic` and `port` clauses of one `entity` or `component`. Single
//! declarations live in [`port`] and [`generic`]; [`render`] prints entity,
//! component, instance, signal and constant views.

#![warn(missing_docs)]

mod decl;
pub mod generic;
pub mod interface;
pub mod port;
pub mod render;

pub use interface::VhdlHeaderParser;
