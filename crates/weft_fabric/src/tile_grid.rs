//! The fabric tile grid and its structural-deduplication table.

use crate::device::{DeviceModel, TileStructure};
use crate::ids::FabricTileId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use weft_common::{GridCoord, InternalError, WeftResult};

/// One tile of the fabric: a grid placement plus aggregated sub-coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricTile {
    /// The unique ID of this tile.
    pub id: FabricTileId,
    /// The tile's grid coordinate, `None` until assigned.
    pub coord: Option<GridCoord>,
    /// Programmable-block coordinates aggregated into this tile.
    pub pb_coords: Vec<GridCoord>,
    /// X-channel connection-block coordinates.
    pub cbx_coords: Vec<GridCoord>,
    /// Y-channel connection-block coordinates.
    pub cby_coords: Vec<GridCoord>,
    /// Switch-block coordinates.
    pub sb_coords: Vec<GridCoord>,
}

/// The collection of fabric tiles and their unique-tile lookup table.
///
/// Tiles are created coordinate-less, then placed and populated by the grid
/// builder. After [`build_unique_tiles`](Self::build_unique_tiles) runs, the
/// `[x][y]` table maps every assigned coordinate to the representative of
/// its structural-equivalence class. The number of representatives is
/// bounded by the architecture's structural periodicity, not by grid size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Vec<FabricTile>,
    /// Inverse of the coordinate assignment, kept in sync by the mutators.
    #[serde(skip)]
    tile_by_coord: HashMap<GridCoord, FabricTileId>,
    /// Use `[x][y]` to reach the representative of the tile at a coordinate.
    unique_table: Vec<Vec<Option<FabricTileId>>>,
    /// Representatives in discovery order.
    unique_tiles: Vec<FabricTileId>,
}

impl TileGrid {
    /// Creates an empty tile grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new, coordinate-less tile and returns its ID.
    pub fn create_tile(&mut self) -> FabricTileId {
        let id = FabricTileId::from_raw(self.tiles.len() as u32);
        self.tiles.push(FabricTile {
            id,
            coord: None,
            pb_coords: Vec::new(),
            cbx_coords: Vec::new(),
            cby_coords: Vec::new(),
            sb_coords: Vec::new(),
        });
        id
    }

    /// Assigns (or overwrites) a tile's grid coordinate.
    ///
    /// The caller guarantees that no two tiles share a coordinate; the grid
    /// keeps `tile -> coordinate` bijective by dropping the tile's previous
    /// mapping, but does not police collisions between distinct tiles.
    pub fn set_tile_coordinate(&mut self, tile: FabricTileId, coord: GridCoord) {
        if let Some(old) = self.tiles[tile.as_raw() as usize].coord {
            self.tile_by_coord.remove(&old);
        }
        self.tiles[tile.as_raw() as usize].coord = Some(coord);
        self.tile_by_coord.insert(coord, tile);
    }

    /// Appends a programmable-block sub-coordinate to a tile.
    pub fn add_pb_coordinate(&mut self, tile: FabricTileId, coord: GridCoord) {
        let pb_coords = &mut self.tiles[tile.as_raw() as usize].pb_coords;
        if !pb_coords.contains(&coord) {
            pb_coords.push(coord);
        }
    }

    /// Appends an X-channel connection-block sub-coordinate to a tile.
    pub fn add_cbx_coordinate(&mut self, tile: FabricTileId, coord: GridCoord) {
        let cbx_coords = &mut self.tiles[tile.as_raw() as usize].cbx_coords;
        if !cbx_coords.contains(&coord) {
            cbx_coords.push(coord);
        }
    }

    /// Appends a Y-channel connection-block sub-coordinate to a tile.
    pub fn add_cby_coordinate(&mut self, tile: FabricTileId, coord: GridCoord) {
        let cby_coords = &mut self.tiles[tile.as_raw() as usize].cby_coords;
        if !cby_coords.contains(&coord) {
            cby_coords.push(coord);
        }
    }

    /// Appends a switch-block sub-coordinate to a tile.
    pub fn add_sb_coordinate(&mut self, tile: FabricTileId, coord: GridCoord) {
        let sb_coords = &mut self.tiles[tile.as_raw() as usize].sb_coords;
        if !sb_coords.contains(&coord) {
            sb_coords.push(coord);
        }
    }

    /// Returns whether `tile` refers to a tile in this grid.
    pub fn valid_tile_id(&self, tile: FabricTileId) -> bool {
        (tile.as_raw() as usize) < self.tiles.len()
    }

    /// Returns the tile with the given ID.
    pub fn tile(&self, id: FabricTileId) -> &FabricTile {
        &self.tiles[id.as_raw() as usize]
    }

    /// Returns a tile's assigned coordinate, `None` before assignment.
    pub fn tile_coordinate(&self, tile: FabricTileId) -> Option<GridCoord> {
        self.tile(tile).coord
    }

    /// Finds the tile assigned to a coordinate.
    pub fn find_tile(&self, coord: GridCoord) -> Option<FabricTileId> {
        self.tile_by_coord.get(&coord).copied()
    }

    /// Iterates over all tile IDs in creation order.
    pub fn tiles(&self) -> impl Iterator<Item = FabricTileId> + '_ {
        (0..self.tiles.len()).map(|i| FabricTileId::from_raw(i as u32))
    }

    /// Returns the number of tiles in the grid.
    pub fn num_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the borrowed structure view of a tile.
    ///
    /// # Panics
    ///
    /// Panics when the tile has no coordinate assigned yet.
    pub fn tile_structure(&self, tile: FabricTileId) -> TileStructure<'_> {
        let record = self.tile(tile);
        TileStructure {
            coord: record.coord.expect("tile has no coordinate assigned"),
            pb: &record.pb_coords,
            cbx: &record.cbx_coords,
            cby: &record.cby_coords,
            sb: &record.sb_coords,
        }
    }

    /// Discovers the structural-equivalence classes of all tiles.
    ///
    /// Walks tiles in creation order; each tile is compared against the
    /// representatives discovered so far through the model's structural
    /// equality. The first match claims the tile's coordinate; a tile
    /// matching no representative becomes one itself. The resulting table
    /// covers exactly the assigned-coordinate domain. Cost is O(T·U) for T
    /// tiles and U classes, acceptable because U tracks the architecture's
    /// periodicity, not the grid size.
    ///
    /// Returns an error when a tile was never assigned a coordinate, which
    /// indicates an incomplete build.
    pub fn build_unique_tiles(&mut self, model: &dyn DeviceModel) -> WeftResult<()> {
        self.unique_tiles.clear();
        self.unique_table = new_unique_table(self.tiles.iter().filter_map(|t| t.coord));

        for index in 0..self.tiles.len() {
            let tile = FabricTileId::from_raw(index as u32);
            let coord = self.tile_coordinate(tile).ok_or_else(|| {
                InternalError::new(format!(
                    "tile {tile} has no coordinate; cannot build unique tiles from a partial grid"
                ))
            })?;

            let structure = self.tile_structure(tile);
            let mut representative = None;
            for &unique in &self.unique_tiles {
                if model.structures_equivalent(&self.tile_structure(unique), &structure) {
                    representative = Some(unique);
                    break;
                }
            }
            let representative = match representative {
                Some(unique) => unique,
                None => {
                    self.unique_tiles.push(tile);
                    tile
                }
            };
            self.unique_table[coord.x][coord.y] = Some(representative);
        }
        Ok(())
    }

    /// Returns the representative of the tile at `coord`.
    ///
    /// `None` for coordinates never assigned a tile, or before
    /// [`build_unique_tiles`](Self::build_unique_tiles) has run.
    pub fn unique_tile(&self, coord: GridCoord) -> Option<FabricTileId> {
        self.unique_table
            .get(coord.x)
            .and_then(|column| column.get(coord.y))
            .copied()
            .flatten()
    }

    /// Returns the representatives in discovery order.
    ///
    /// Writers emit one structural definition per entry instead of one per
    /// physical tile.
    pub fn unique_tiles(&self) -> &[FabricTileId] {
        &self.unique_tiles
    }

    /// Resets all tile and table state for a full rebuild.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.tile_by_coord.clear();
        self.unique_table.clear();
        self.unique_tiles.clear();
    }

    /// Rebuilds the coordinate index after deserialization.
    pub fn rebuild_indices(&mut self) {
        self.tile_by_coord.clear();
        for tile in &self.tiles {
            if let Some(coord) = tile.coord {
                self.tile_by_coord.insert(coord, tile.id);
            }
        }
    }
}

/// Allocates an `[x][y]` table spanning the assigned coordinates.
fn new_unique_table(coords: impl Iterator<Item = GridCoord>) -> Vec<Vec<Option<FabricTileId>>> {
    let mut width = 0;
    let mut height = 0;
    for coord in coords {
        width = width.max(coord.x + 1);
        height = height.max(coord.y + 1);
    }
    vec![vec![None; height]; width]
}
