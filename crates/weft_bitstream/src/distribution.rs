//! In-memory bitstream distribution report.
//!
//! Summarizes how configuration bits are distributed across the block
//! hierarchy (e.g. how many bits each tile, switch block, or connection
//! block accounts for). The report is a plain tree of named counts that
//! external writers serialize; depth limiting keeps reports readable on
//! deep hierarchies.

use crate::config_tree::ConfigTree;
use crate::hierarchy::subtree_bit_count;
use crate::ids::ConfigBlockId;
use serde::{Deserialize, Serialize};

/// The bit distribution of one block, with its reported children.
///
/// `bit_count` always covers the block's *entire* subtree, even when the
/// children themselves fall below the depth cutoff and go unreported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDistribution {
    /// The display name of the block.
    pub name: String,
    /// Total configuration bits in the block's subtree.
    pub bit_count: usize,
    /// Distributions of the block's children, empty past the depth limit.
    pub children: Vec<BlockDistribution>,
}

/// Reports the bit distribution of `block`, visiting children depth-first.
///
/// `max_depth` limits how many hierarchy levels below `block` are expanded:
/// 0 reports the block alone, 1 adds its direct children, and so on.
pub fn bitstream_distribution(
    tree: &ConfigTree,
    block: ConfigBlockId,
    max_depth: usize,
) -> BlockDistribution {
    rec_block_distribution(tree, block, max_depth, 0)
}

fn rec_block_distribution(
    tree: &ConfigTree,
    block: ConfigBlockId,
    max_depth: usize,
    depth: usize,
) -> BlockDistribution {
    let children = if depth < max_depth {
        tree.block_children(block)
            .iter()
            .map(|&child| rec_block_distribution(tree, child, max_depth, depth + 1))
            .collect()
    } else {
        Vec::new()
    };

    BlockDistribution {
        name: tree.block_name(block).to_string(),
        bit_count: subtree_bit_count(tree, block),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (ConfigTree, ConfigBlockId) {
        let mut tree = ConfigTree::new();
        let top = tree.add_block("top");
        let grid = tree.add_child_block(top, "grid");
        let clb = tree.add_child_block(grid, "clb_1_1");
        tree.add_block_bits(clb, &[true; 4]);
        let sb = tree.add_child_block(grid, "sb_1_1");
        tree.add_block_bits(sb, &[false; 3]);
        (tree, top)
    }

    #[test]
    fn counts_agree_with_subtree_bit_count() {
        let (tree, top) = sample_tree();
        let report = bitstream_distribution(&tree, top, 3);
        assert_eq!(report.bit_count, subtree_bit_count(&tree, top));
        assert_eq!(report.children.len(), 1);
        let grid = &report.children[0];
        assert_eq!(grid.name, "grid");
        assert_eq!(grid.bit_count, 7);
        assert_eq!(grid.children[0].bit_count, 4);
        assert_eq!(grid.children[1].bit_count, 3);
    }

    #[test]
    fn zero_depth_reports_the_block_alone() {
        let (tree, top) = sample_tree();
        let report = bitstream_distribution(&tree, top, 0);
        assert_eq!(report.name, "top");
        assert_eq!(report.bit_count, 7);
        assert!(report.children.is_empty());
    }

    #[test]
    fn depth_limit_truncates_but_counts_stay_total() {
        let (tree, top) = sample_tree();
        let report = bitstream_distribution(&tree, top, 1);
        let grid = &report.children[0];
        // The clb/sb level is cut off, yet grid still reports all 7 bits.
        assert!(grid.children.is_empty());
        assert_eq!(grid.bit_count, 7);
    }

    #[test]
    fn leaf_report() {
        let mut tree = ConfigTree::new();
        let leaf = tree.add_block("lone_leaf");
        tree.add_block_bits(leaf, &[true, true]);
        let report = bitstream_distribution(&tree, leaf, 5);
        assert_eq!(report.bit_count, 2);
        assert!(report.children.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let (tree, top) = sample_tree();
        let report = bitstream_distribution(&tree, top, 2);
        let json = serde_json::to_string(&report).unwrap();
        let back: BlockDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
