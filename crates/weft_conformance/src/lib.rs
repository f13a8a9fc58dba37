//! Integration-test helpers for the Weft fabric configuration pipeline.
//!
//! Provides a synthetic periodic device model and small configuration-tree
//! builders so the integration suites can exercise the full flow (device
//! model → tile grid → unique-tile table, and config tree → fabric
//! bitstream → compression metrics) without a real architecture database.

#![warn(missing_docs)]

use std::collections::HashSet;
use weft_bitstream::{ConfigBlockId, ConfigTree, FabricBitstream};
use weft_common::GridCoord;
use weft_fabric::{DeviceModel, TileStructure};

/// A rectangular device with a periodic structure.
///
/// Routing groups cover every location except the top row, and optional
/// holes mark locations without a programmable block. Structural equality
/// is judged by hashed relative layout, so tiles repeat in classes fixed by
/// their position relative to the fabric border, not by grid size.
pub struct PeriodicDevice {
    width: usize,
    height: usize,
    holes: HashSet<GridCoord>,
}

impl PeriodicDevice {
    /// Creates a device spanning `width` x `height` grid locations.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            holes: HashSet::new(),
        }
    }

    /// Marks a location as holding no programmable block.
    pub fn with_hole(mut self, coord: GridCoord) -> Self {
        self.holes.insert(coord);
        self
    }

    fn has_routing_group(&self, gsb_coord: GridCoord) -> bool {
        gsb_coord.x < self.width && gsb_coord.y + 1 < self.height
    }
}

impl DeviceModel for PeriodicDevice {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_empty_at(&self, coord: GridCoord) -> bool {
        self.holes.contains(&coord)
    }

    fn root_location(&self, coord: GridCoord) -> GridCoord {
        coord
    }

    fn cbx_at(&self, gsb_coord: GridCoord) -> Option<GridCoord> {
        self.has_routing_group(gsb_coord).then_some(gsb_coord)
    }

    fn cby_at(&self, gsb_coord: GridCoord) -> Option<GridCoord> {
        self.has_routing_group(gsb_coord).then_some(gsb_coord)
    }

    fn sb_at(&self, gsb_coord: GridCoord) -> Option<GridCoord> {
        self.has_routing_group(gsb_coord).then_some(gsb_coord)
    }

    fn structures_equivalent(&self, a: &TileStructure<'_>, b: &TileStructure<'_>) -> bool {
        a.relative_signature() == b.relative_signature()
    }
}

/// A config tree and the fabric bitstream shifted into its chains.
pub struct ChainSetup {
    /// The configuration tree, one leaf block per chain column.
    pub tree: ConfigTree,
    /// The fabric bitstream, one region per chain column.
    pub fabric: FabricBitstream,
    /// The top-level block of the tree.
    pub top: ConfigBlockId,
    /// The per-column leaf blocks, in column order.
    pub columns: Vec<ConfigBlockId>,
}

/// Builds a tree and fabric bitstream from per-column bit values.
///
/// Each column becomes one leaf block under a shared top block and one
/// fabric region carrying that column's bits in order.
pub fn chain_setup(column_values: &[&[bool]]) -> ChainSetup {
    let mut tree = ConfigTree::new();
    let top = tree.add_block("fpga_top");
    let mut fabric = FabricBitstream::new();
    let mut columns = Vec::with_capacity(column_values.len());

    for (index, &values) in column_values.iter().enumerate() {
        let column = tree.add_child_block(top, format!("column_{index}"));
        let region = fabric.add_region();
        for &value in values {
            let bit = tree.add_bit(column, value);
            fabric.add_bit(region, bit);
        }
        columns.push(column);
    }

    ChainSetup {
        tree,
        fabric,
        top,
        columns,
    }
}
