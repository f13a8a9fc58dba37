//! Compression metrics for configuration-chain programming.
//!
//! All regions of a fabric bitstream shift in lockstep, so the longest
//! region bounds the shift-register depth, and shorter regions are padded at
//! the head. When the hardware's reset state already equals the value at the
//! head of every chain, those leading shift cycles can be omitted entirely —
//! the functions here quantify both effects. Everything is a pure function
//! over an already-built [`ConfigTree`] and [`FabricBitstream`].

use crate::config_tree::ConfigTree;
use crate::fabric::FabricBitstream;
use crate::ids::FabricRegionId;

/// Returns the element count of the largest region, 0 when there are none.
///
/// Zero-length regions participate (contributing 0); they are never excluded
/// from consideration. This bounds the worst-case shift-register depth since
/// all regions shift in lockstep.
pub fn max_regional_size(fabric: &FabricBitstream) -> usize {
    fabric
        .regions()
        .map(|region| fabric.region_bits(region).len())
        .max()
        .unwrap_or(0)
}

/// Returns the length of the maximal leading run of `skip_value`.
///
/// 0 when the sequence is empty or its first element differs. This is the
/// number of leading shift cycles a single chain could omit when the
/// hardware's reset state already equals `skip_value`.
pub fn chain_skip_length(sequence: &[bool], skip_value: bool) -> usize {
    sequence
        .iter()
        .take_while(|&&value| value == skip_value)
        .count()
}

/// Resolves a region's bits to their programmed values, in chain order.
pub fn region_values(
    tree: &ConfigTree,
    fabric: &FabricBitstream,
    region: FabricRegionId,
) -> Vec<bool> {
    fabric
        .region_bits(region)
        .iter()
        .map(|&bit| tree.bit_value(fabric.config_bit(bit)))
        .collect()
}

/// Returns the number of leading shift cycles the whole chain can skip.
///
/// Regions shorter than the longest one are head-padded up to the common
/// depth, and that padding is skippable by construction; beyond it, a region
/// contributes its own leading run of `bit_value_to_skip`. Since all regions
/// shift together, the chain-wide skip is the minimum across regions.
/// A bitstream without regions has nothing to shift, hence nothing to skip.
pub fn config_chain_skip_size(
    tree: &ConfigTree,
    fabric: &FabricBitstream,
    bit_value_to_skip: bool,
) -> usize {
    if fabric.num_regions() == 0 {
        return 0;
    }

    let max_size = max_regional_size(fabric);
    let mut num_bits_to_skip = usize::MAX;
    for region in fabric.regions() {
        let values = region_values(tree, fabric, region);
        let head_padding = max_size - values.len();
        let curr_skip = chain_skip_length(&values, bit_value_to_skip) + head_padding;
        num_bits_to_skip = num_bits_to_skip.min(curr_skip);
    }
    num_bits_to_skip
}

/// Organizes the bitstream into per-region chains aligned to a common depth.
///
/// Every region is padded with `false` at the head so all chains reach
/// [`max_regional_size`]; the region's own values occupy the tail. This is
/// the layout a configuration-chain loader shifts in directly.
pub fn build_config_chain_by_region(
    tree: &ConfigTree,
    fabric: &FabricBitstream,
) -> Vec<Vec<bool>> {
    let max_size = max_regional_size(fabric);

    let mut regional_chains = Vec::with_capacity(fabric.num_regions());
    for region in fabric.regions() {
        let values = region_values(tree, fabric, region);
        let mut chain = vec![false; max_size];
        let offset = max_size - values.len();
        chain[offset..].copy_from_slice(&values);
        regional_chains.push(chain);
    }
    regional_chains
}
