//! The physically ordered fabric bitstream.
//!
//! While the [`ConfigTree`](crate::ConfigTree) mirrors the *logical*
//! decomposition of the fabric, a [`FabricBitstream`] records the *physical*
//! order in which bits are shifted into the device, partitioned into regions
//! (configuration-chain columns) that load in lockstep. Each fabric bit is a
//! reference back to the tree bit whose value it carries, so the tree stays
//! the single owner of bit values.

use crate::ids::{ConfigBitId, FabricBitId, FabricRegionId};
use serde::{Deserialize, Serialize};

/// A position in the physical programming order, referencing a tree bit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FabricBit {
    /// The unique ID of this fabric bit.
    pub id: FabricBitId,
    /// The configuration bit whose value is shifted at this position.
    pub config_bit: ConfigBitId,
}

/// An ordered sequence of fabric bits, partitioned into loadable regions.
///
/// Regions model independently wired configuration chains; they shift in
/// lockstep, so their relative lengths drive the compression metrics in
/// [`compress`](crate::compress). Zero-length regions are legal and occur
/// for chains that carry no programmable resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FabricBitstream {
    bits: Vec<FabricBit>,
    regions: Vec<Vec<FabricBitId>>,
}

impl FabricBitstream {
    /// Creates an empty fabric bitstream.
    pub fn new() -> Self {
        Self {
            bits: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Appends a new, empty region and returns its ID.
    ///
    /// Region order is creation order and matches the physical chain layout.
    pub fn add_region(&mut self) -> FabricRegionId {
        let id = FabricRegionId::from_raw(self.regions.len() as u32);
        self.regions.push(Vec::new());
        id
    }

    /// Appends a bit to the tail of `region`, referencing `config_bit`.
    pub fn add_bit(&mut self, region: FabricRegionId, config_bit: ConfigBitId) -> FabricBitId {
        let id = FabricBitId::from_raw(self.bits.len() as u32);
        self.bits.push(FabricBit { id, config_bit });
        self.regions[region.as_raw() as usize].push(id);
        id
    }

    /// Returns whether `region` refers to a region in this bitstream.
    pub fn valid_region_id(&self, region: FabricRegionId) -> bool {
        (region.as_raw() as usize) < self.regions.len()
    }

    /// Returns whether `bit` refers to a bit in this bitstream.
    pub fn valid_bit_id(&self, bit: FabricBitId) -> bool {
        (bit.as_raw() as usize) < self.bits.len()
    }

    /// Iterates over all region IDs in chain order.
    pub fn regions(&self) -> impl Iterator<Item = FabricRegionId> + '_ {
        (0..self.regions.len()).map(|i| FabricRegionId::from_raw(i as u32))
    }

    /// Returns the ordered bits of a region.
    pub fn region_bits(&self, region: FabricRegionId) -> &[FabricBitId] {
        &self.regions[region.as_raw() as usize]
    }

    /// Returns the tree bit referenced by a fabric bit.
    pub fn config_bit(&self, bit: FabricBitId) -> ConfigBitId {
        self.bits[bit.as_raw() as usize].config_bit
    }

    /// Returns the number of regions.
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// Returns the total number of fabric bits across all regions.
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bitstream() {
        let fabric = FabricBitstream::new();
        assert_eq!(fabric.num_regions(), 0);
        assert_eq!(fabric.num_bits(), 0);
        assert!(!fabric.valid_region_id(FabricRegionId::from_raw(0)));
    }

    #[test]
    fn regions_keep_creation_order() {
        let mut fabric = FabricBitstream::new();
        let r0 = fabric.add_region();
        let r1 = fabric.add_region();
        let ids: Vec<FabricRegionId> = fabric.regions().collect();
        assert_eq!(ids, vec![r0, r1]);
    }

    #[test]
    fn bits_append_to_their_region() {
        let mut fabric = FabricBitstream::new();
        let r0 = fabric.add_region();
        let r1 = fabric.add_region();
        let b0 = fabric.add_bit(r0, ConfigBitId::from_raw(10));
        let b1 = fabric.add_bit(r1, ConfigBitId::from_raw(11));
        let b2 = fabric.add_bit(r0, ConfigBitId::from_raw(12));

        assert_eq!(fabric.region_bits(r0), &[b0, b2]);
        assert_eq!(fabric.region_bits(r1), &[b1]);
        assert_eq!(fabric.num_bits(), 3);
    }

    #[test]
    fn config_bit_reference_is_preserved() {
        let mut fabric = FabricBitstream::new();
        let r0 = fabric.add_region();
        let bit = fabric.add_bit(r0, ConfigBitId::from_raw(77));
        assert_eq!(fabric.config_bit(bit), ConfigBitId::from_raw(77));
    }

    #[test]
    fn zero_length_region_is_legal() {
        let mut fabric = FabricBitstream::new();
        let r0 = fabric.add_region();
        assert!(fabric.valid_region_id(r0));
        assert!(fabric.region_bits(r0).is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut fabric = FabricBitstream::new();
        let r0 = fabric.add_region();
        fabric.add_bit(r0, ConfigBitId::from_raw(3));

        let json = serde_json::to_string(&fabric).unwrap();
        let back: FabricBitstream = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_regions(), 1);
        assert_eq!(back.num_bits(), 1);
        assert_eq!(back.config_bit(FabricBitId::from_raw(0)), ConfigBitId::from_raw(3));
    }
}
