//! The device-model seam consumed by tile-grid construction and deduplication.
//!
//! The routing-resource-graph device model lives outside this crate; the
//! [`DeviceModel`] trait is the narrow capability the tile grid needs from
//! it: grid extents, per-location layout queries, and a structural-equality
//! judgement over tile structures. Passing the model explicitly (never
//! through process-wide state) keeps every build and query reproducible.

use weft_common::{ContentHash, GridCoord};

/// A borrowed view of one tile's aggregated structure.
///
/// Sub-coordinates are listed in the order they were added to the tile.
/// Implementations of [`DeviceModel::structures_equivalent`] receive two of
/// these and must judge equality over *relative* structure (the kinds and
/// layout of the sub-blocks with respect to the tile's own coordinate),
/// never over the absolute coordinates themselves.
#[derive(Debug, Clone, Copy)]
pub struct TileStructure<'a> {
    /// The tile's assigned grid coordinate.
    pub coord: GridCoord,
    /// Coordinates of the programmable blocks aggregated into the tile.
    pub pb: &'a [GridCoord],
    /// Coordinates of the X-channel connection blocks.
    pub cbx: &'a [GridCoord],
    /// Coordinates of the Y-channel connection blocks.
    pub cby: &'a [GridCoord],
    /// Coordinates of the switch blocks.
    pub sb: &'a [GridCoord],
}

impl TileStructure<'_> {
    /// Fingerprints the tile's relative layout.
    ///
    /// Each sub-coordinate kind contributes its tag, count, and the offsets
    /// of its members relative to the tile's own coordinate; absolute
    /// positions never enter the hash. Device models whose notion of
    /// structural equality is purely positional can implement
    /// [`DeviceModel::structures_equivalent`] as a signature compare; models
    /// with richer descriptors fold this in alongside their own state.
    pub fn relative_signature(&self) -> ContentHash {
        let kinds: [(u8, &[GridCoord]); 4] =
            [(b'p', self.pb), (b'x', self.cbx), (b'y', self.cby), (b's', self.sb)];
        let mut bytes = Vec::new();
        for (tag, coords) in kinds {
            bytes.push(tag);
            bytes.extend((coords.len() as u32).to_le_bytes());
            for coord in coords {
                let dx = coord.x as i64 - self.coord.x as i64;
                let dy = coord.y as i64 - self.coord.y as i64;
                bytes.extend((dx as i32).to_le_bytes());
                bytes.extend((dy as i32).to_le_bytes());
            }
        }
        ContentHash::from_bytes(&bytes)
    }
}

/// Queries the tile grid needs from the external device model.
///
/// The grid walks locations column-major from the origin; `x` runs
/// 0..`width()` and `y` runs 0..`height()`. Routing sub-block queries take
/// the coordinate of the *routing group* (the gsb) serving a location, which
/// the chosen [`TileStyle`](crate::TileStyle) derives from the location.
pub trait DeviceModel {
    /// Returns the number of grid columns.
    fn width(&self) -> usize;

    /// Returns the number of grid rows.
    fn height(&self) -> usize;

    /// Returns whether the grid location holds no programmable block.
    ///
    /// Empty locations still produce a tile when routing resources exist
    /// around them.
    fn is_empty_at(&self, coord: GridCoord) -> bool;

    /// Returns the root location of the block covering `coord`.
    ///
    /// Blocks spanning multiple grid locations report the same root for all
    /// covered locations; single-location blocks report `coord` itself.
    fn root_location(&self, coord: GridCoord) -> GridCoord;

    /// Returns the X-channel connection block of the routing group at
    /// `gsb_coord`, when one exists.
    fn cbx_at(&self, gsb_coord: GridCoord) -> Option<GridCoord>;

    /// Returns the Y-channel connection block of the routing group at
    /// `gsb_coord`, when one exists.
    fn cby_at(&self, gsb_coord: GridCoord) -> Option<GridCoord>;

    /// Returns the switch block of the routing group at `gsb_coord`, when
    /// one exists.
    fn sb_at(&self, gsb_coord: GridCoord) -> Option<GridCoord>;

    /// Judges whether two tiles aggregate structurally identical resources.
    ///
    /// Equality is over relative structure; two tiles at different absolute
    /// coordinates are equivalent whenever their sub-blocks have the same
    /// kinds and the same layout relative to each tile's own coordinate.
    fn structures_equivalent(&self, a: &TileStructure<'_>, b: &TileStructure<'_>) -> bool;
}
