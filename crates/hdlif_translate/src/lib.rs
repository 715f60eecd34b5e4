//! SystemVerilog ↔ VHDL translation of interface records.
//!
//! [`tables`] holds the pure mode, type and name mappings. Mode and type
//! lookups return a [`TranslateError`] on a miss. [`Translator`] applies
//! them to whole ports, generics and interfaces, reporting misses to a
//! [`DiagnosticSink`](hdlif_diagnostics::DiagnosticSink) and substituting the
//! `ERR` fallback.

#![warn(missing_docs)]

pub mod error;
pub mod tables;
pub mod translator;

pub use error::TranslateError;
pub use tables::{
    mode_sv_to_vhdl, mode_vhdl_to_sv, name_sv_to_vhdl, name_vhdl_to_sv, type_sv_to_vhdl,
    type_vhdl_to_sv,
};
pub use translator::Translator;
