//! Shared foundational types used across the hdlif interface tooling.
//!
//! This crate provides the HDL [`Dialect`] selector, the [`Layout`] settings
//! consumed by every renderer, and the common internal result type.

#![warn(missing_docs)]

pub mod dialect;
pub mod layout;
pub mod result;

pub use dialect::Dialect;
pub use layout::{IndentUnit, Layout};
pub use result::{HdlifResult, InternalError};
