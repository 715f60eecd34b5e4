//! SystemVerilog module header parsing and printing.
//!
//! [`SvHeaderParser`] plugs into [`hdlif_ir::BlockScanner`] to find one
//! `module` or `macromodule` in a text and build its [`hdlif_ir::Interface`],
//! applying ANSI direction inheritance and non-ANSI body redeclarations.
//! The [`port`] and [`parameter`] modules handle single declarations, and
//! [`render`] prints the declaration, instance, signal and constant views.

#![warn(missing_docs)]

pub mod interface;
pub mod parameter;
pub mod port;
pub mod render;

pub use interface::SvHeaderParser;
pub use port::SvPortDecl;
