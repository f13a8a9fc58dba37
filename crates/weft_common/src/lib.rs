//! Shared foundational types used across the Weft fabric configuration toolkit.
//!
//! This crate provides core types including grid coordinates, content hashing,
//! and common result types.

#![warn(missing_docs)]

pub mod geom;
pub mod hash;
pub mod result;

pub use geom::GridCoord;
pub use hash::ContentHash;
pub use result::{InternalError, WeftResult};
