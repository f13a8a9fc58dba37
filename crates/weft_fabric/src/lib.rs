//! Fabric tile grid and structural deduplication for the Weft toolkit.
//!
//! An FPGA fabric is a 2D grid of tiles, each aggregating a programmable
//! block and its surrounding routing blocks (connection blocks in X and Y,
//! and a switch block). Regular architectures repeat a handful of tile
//! structures across the whole grid, so this crate discovers the
//! structurally unique tiles and maps every grid coordinate to its
//! representative — external writers then emit one definition per
//! representative instead of one per physical tile.
//!
//! Structure comparison is delegated to the device model through
//! [`DeviceModel::structures_equivalent`], keeping the deduplication
//! algorithm independent of how the model represents sub-block structure.

#![warn(missing_docs)]

pub mod build;
pub mod config;
pub mod device;
pub mod ids;
pub mod tile_grid;

pub use build::build_tile_grid;
pub use config::{FabricConfig, ParseTileStyleError, TileStyle};
pub use device::{DeviceModel, TileStructure};
pub use ids::FabricTileId;
pub use tile_grid::{FabricTile, TileGrid};
