//! Tile-grid construction from a device model.
//!
//! Walks every grid location of the device and materializes one tile per
//! root location, aggregating the programmable block and the routing blocks
//! the configured [`TileStyle`] associates with it. Deduplication is a
//! separate step ([`TileGrid::build_unique_tiles`]) so callers can rebuild
//! the class table without re-walking the device.

use crate::config::{FabricConfig, TileStyle};
use crate::device::DeviceModel;
use crate::tile_grid::TileGrid;
use weft_common::{GridCoord, InternalError, WeftResult};

/// Builds the fabric tile grid for `model` with the configured style.
///
/// Fails when the device reports a multi-location block whose root location
/// was never materialized, which indicates an inconsistent device model.
pub fn build_tile_grid(model: &dyn DeviceModel, config: &FabricConfig) -> WeftResult<TileGrid> {
    match config.style {
        TileStyle::TopLeft => build_tile_grid_top_left(model),
    }
}

/// Builds tiles in the top-left style.
///
/// The programmable block is placed on the top-left corner of its tile; the
/// connection blocks and switch block are pulled from the routing group one
/// row below:
///
/// ```text
///  +----------+ +----------+
///  |   Grid   | | CBx      |
///  |  [x][y]  | | [x][y]   |
///  +----------+ +----------+
///  +----------+ +----------+
///  | CBy      | | SB       |
///  | [x][y-1] | | [x][y-1] |
///  +----------+ +----------+
/// ```
fn build_tile_grid_top_left(model: &dyn DeviceModel) -> WeftResult<TileGrid> {
    let mut grid = TileGrid::new();

    for x in 0..model.width() {
        for y in 0..model.height() {
            let coord = GridCoord::new(x, y);
            let mut skip_add_pb = false;

            // Empty locations still get a tile of their own: routing blocks
            // may exist around a hole in the programmable grid.
            let tile = if model.is_empty_at(coord) {
                skip_add_pb = true;
                let tile = grid.create_tile();
                grid.set_tile_coordinate(tile, coord);
                tile
            } else if model.root_location(coord) != coord {
                // Covered by a block spanning multiple locations; its
                // resources belong to the root tile, which the column-major
                // walk has already materialized.
                skip_add_pb = true;
                let root = model.root_location(coord);
                grid.find_tile(root).ok_or_else(|| {
                    InternalError::new(format!(
                        "no tile at root location {root} covering grid location {coord}"
                    ))
                })?
            } else {
                let tile = grid.create_tile();
                grid.set_tile_coordinate(tile, coord);
                tile
            };

            if !skip_add_pb {
                grid.add_pb_coordinate(tile, coord);
            }

            // The routing group serving this location sits one row below;
            // the bottom row has none.
            let Some(gsb_y) = y.checked_sub(1) else {
                continue;
            };
            let gsb_coord = GridCoord::new(x, gsb_y);
            if let Some(cbx) = model.cbx_at(gsb_coord) {
                grid.add_cbx_coordinate(tile, cbx);
            }
            if let Some(cby) = model.cby_at(gsb_coord) {
                grid.add_cby_coordinate(tile, cby);
            }
            if let Some(sb) = model.sb_at(gsb_coord) {
                grid.add_sb_coordinate(tile, sb);
            }
        }
    }

    Ok(grid)
}
