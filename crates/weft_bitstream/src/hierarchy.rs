//! Stateless navigation and addressing queries over a [`ConfigTree`].
//!
//! These algorithms are deliberately not methods on the tree: they combine
//! tree lookups in ways specific to bitstream emission (ancestor chains for
//! hierarchical instance names, flattened bit offsets for elided hierarchy
//! levels) and none of them need private state.

use crate::config_tree::ConfigTree;
use crate::ids::{ConfigBitId, ConfigBlockId};
use weft_common::{InternalError, WeftResult};

/// Collects the ancestor chain of `block`, root-first.
///
/// Starting at `block`, the walk appends the current block and moves to its
/// parent until a top-level block is reached. When `stop_name` is given the
/// walk stops (inclusively) at the first block carrying that name; a name
/// that never matches simply degrades to the full root-to-block chain.
///
/// An invalid `block` yields an empty chain. Cost is O(depth).
pub fn find_block_hierarchy(
    tree: &ConfigTree,
    block: ConfigBlockId,
    stop_name: Option<&str>,
) -> Vec<ConfigBlockId> {
    let mut chain = Vec::new();
    if !tree.valid_block_id(block) {
        return chain;
    }

    let mut current = Some(block);
    while let Some(blk) = current {
        chain.push(blk);
        // Inclusive stop at the designated block, if one was named.
        if stop_name.is_some_and(|stop| tree.block_name(blk) == stop) {
            break;
        }
        current = tree.block_parent(blk);
    }

    // Reverse so the top-level block comes first.
    chain.reverse();
    chain
}

/// Returns all top-level blocks, i.e. blocks without a parent.
///
/// Cost is O(number of blocks).
pub fn find_top_blocks(tree: &ConfigTree) -> Vec<ConfigBlockId> {
    tree.blocks()
        .filter(|&blk| tree.block_parent(blk).is_none())
        .collect()
}

/// Returns the 0-based position of `bit` within its owning block's bits.
///
/// This is the physical emission offset of the bit inside its immediate
/// owner. Cost is O(bits in the owning block).
///
/// # Panics
///
/// Panics on a corrupted tree where the bit is missing from its owner's
/// bit list.
pub fn bit_index_in_parent(tree: &ConfigTree, bit: ConfigBitId) -> usize {
    let owner = tree.bit_owner(bit);
    tree.block_bits(owner)
        .iter()
        .position(|&cand| cand == bit)
        .expect("bit missing from its owner's bit list")
}

/// Returns the 0-based position of `bit` counted from its grandparent block.
///
/// The index accumulates the total subtree bit count of every sibling
/// preceding the bit's owner within the grandparent, then the bit's offset
/// inside its owner. This flattens two hierarchy levels into one linear
/// offset, used when an intermediate level is elided in generated output.
///
/// Returns an error when the owning block has no parent; the two-level
/// flattening is undefined for bits owned by a top-level block.
pub fn bit_index_in_grandparent(tree: &ConfigTree, bit: ConfigBitId) -> WeftResult<usize> {
    let parent = tree.bit_owner(bit);
    let grandparent = tree.block_parent(parent).ok_or_else(|| {
        InternalError::new(format!(
            "block '{}' has no parent; bit index cannot be flattened across two levels",
            tree.block_name(parent)
        ))
    })?;

    let mut index = 0;
    for &sibling in tree.block_children(grandparent) {
        if sibling != parent {
            index += subtree_bit_count(tree, sibling);
        } else {
            index += bit_index_in_parent(tree, bit);
            break;
        }
    }
    Ok(index)
}

/// Returns the total number of configuration bits under `block`.
///
/// Bits are stored only under leaf blocks, so internal blocks recurse over
/// their children. Cost is O(blocks + bits in the subtree).
///
/// # Panics
///
/// Panics on a corrupted tree where a block owns both bits and children.
pub fn subtree_bit_count(tree: &ConfigTree, block: ConfigBlockId) -> usize {
    let direct_bits = tree.block_bits(block);
    if !direct_bits.is_empty() {
        assert!(
            tree.block_children(block).is_empty(),
            "block '{}' owns both bits and child blocks",
            tree.block_name(block)
        );
        return direct_bits.len();
    }

    tree.block_children(block)
        .iter()
        .map(|&child| subtree_bit_count(tree, child))
        .sum()
}

/// Splits a dot-delimited hierarchy path into segments, last segment first.
///
/// The reversed order matches the bottom-up (leaf-first) resolution order
/// expected by hierarchy lookups. An empty path yields no segments, and a
/// trailing delimiter contributes none either.
pub fn split_path_reversed(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('.').collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments.reverse();
    segments
}
