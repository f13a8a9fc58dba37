//! Configuration bitstream data structures for the Weft fabric toolkit.
//!
//! This crate owns the in-memory representation of a fabric's configuration
//! bits: the [`ConfigTree`] (a hierarchy of named blocks whose leaves own the
//! actual memory cells), the [`FabricBitstream`] (the physically ordered bit
//! sequence, partitioned into independently loadable regions), stateless
//! hierarchy navigation and addressing queries over the tree, compression
//! metrics for configuration-chain programming, and an in-memory
//! block-by-block bit distribution report.
//!
//! Nothing here writes files. External writers consume the query results and
//! serialize them into whatever output format they own.

#![warn(missing_docs)]

pub mod compress;
pub mod config_tree;
pub mod distribution;
pub mod fabric;
pub mod hierarchy;
pub mod ids;

pub use config_tree::ConfigTree;
pub use distribution::BlockDistribution;
pub use fabric::FabricBitstream;
pub use ids::{ConfigBitId, ConfigBlockId, FabricBitId, FabricRegionId};
