//! The configuration-bit hierarchy.
//!
//! A [`ConfigTree`] mirrors the structural decomposition of the fabric: the
//! top module at the root, sub-modules as internal blocks, and leaf blocks
//! owning the actual configuration memory cells. Blocks and bits live in
//! arenas indexed by opaque IDs; the parent link is a lookup relation while
//! ownership flows strictly root-to-children, so the tree stays acyclic.
//!
//! The tree is populated once by the bitstream construction phase and is
//! structurally immutable afterwards; only bit *values* may still change
//! through [`ConfigTree::set_bit_value`].

use crate::ids::{ConfigBitId, ConfigBlockId};
use serde::{Deserialize, Serialize};

/// A named block in the configuration hierarchy.
///
/// A block owns either child blocks or configuration bits, never both:
/// internal blocks carry structure, leaf blocks carry memory cells. Child
/// order is creation order and is structurally meaningful: it determines
/// the physical emission order of the bits below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigBlock {
    /// The unique ID of this block.
    pub id: ConfigBlockId,
    /// The display name of this block (one segment of a hierarchy path).
    pub name: String,
    /// The parent block, or `None` for a top-level block.
    ///
    /// This is a back-reference for upward walks, not an ownership edge.
    pub parent: Option<ConfigBlockId>,
    /// Child blocks in creation order. Empty for leaf blocks.
    pub children: Vec<ConfigBlockId>,
    /// Configuration bits in creation order. Empty for internal blocks.
    pub bits: Vec<ConfigBitId>,
}

/// A single configuration memory cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfigBit {
    /// The unique ID of this bit.
    pub id: ConfigBitId,
    /// The leaf block owning this bit. Exactly one owner, assigned at creation.
    pub owner: ConfigBlockId,
    /// The programmed value of this bit.
    pub value: bool,
}

/// The hierarchical tree of configuration blocks and bits.
///
/// Blocks and bits are stored in append-only arenas; IDs are indices into
/// them. All structural mutators are construction primitives used by the
/// bitstream builder; downstream consumers only query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigTree {
    blocks: Vec<ConfigBlock>,
    bits: Vec<ConfigBit>,
}

impl ConfigTree {
    /// Creates an empty configuration tree.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            bits: Vec::new(),
        }
    }

    /// Adds a top-level block with the given name and returns its ID.
    pub fn add_block(&mut self, name: impl Into<String>) -> ConfigBlockId {
        let id = ConfigBlockId::from_raw(self.blocks.len() as u32);
        self.blocks.push(ConfigBlock {
            id,
            name: name.into(),
            parent: None,
            children: Vec::new(),
            bits: Vec::new(),
        });
        id
    }

    /// Adds a child block under `parent` and returns the child's ID.
    ///
    /// Children are appended in creation order, which is the physical
    /// emission order.
    ///
    /// # Panics
    ///
    /// Panics if `parent` already owns configuration bits. A block owns
    /// children or bits, never both.
    pub fn add_child_block(
        &mut self,
        parent: ConfigBlockId,
        name: impl Into<String>,
    ) -> ConfigBlockId {
        assert!(
            self.block(parent).bits.is_empty(),
            "block '{}' owns bits and cannot own child blocks",
            self.block(parent).name
        );
        let id = ConfigBlockId::from_raw(self.blocks.len() as u32);
        self.blocks.push(ConfigBlock {
            id,
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            bits: Vec::new(),
        });
        self.blocks[parent.as_raw() as usize].children.push(id);
        id
    }

    /// Adds a configuration bit to a leaf block and returns the bit's ID.
    ///
    /// The bit's position within the block is stable once assigned.
    ///
    /// # Panics
    ///
    /// Panics if `block` already owns child blocks.
    pub fn add_bit(&mut self, block: ConfigBlockId, value: bool) -> ConfigBitId {
        assert!(
            self.block(block).children.is_empty(),
            "block '{}' owns child blocks and cannot own bits",
            self.block(block).name
        );
        let id = ConfigBitId::from_raw(self.bits.len() as u32);
        self.bits.push(ConfigBit {
            id,
            owner: block,
            value,
        });
        self.blocks[block.as_raw() as usize].bits.push(id);
        id
    }

    /// Adds a sequence of configuration bits to a leaf block.
    ///
    /// Returns the IDs in the same order as `values`.
    pub fn add_block_bits(&mut self, block: ConfigBlockId, values: &[bool]) -> Vec<ConfigBitId> {
        values.iter().map(|&v| self.add_bit(block, v)).collect()
    }

    /// Overwrites the value of an existing bit.
    pub fn set_bit_value(&mut self, bit: ConfigBitId, value: bool) {
        self.bits[bit.as_raw() as usize].value = value;
    }

    /// Returns whether `block` refers to a block in this tree.
    pub fn valid_block_id(&self, block: ConfigBlockId) -> bool {
        (block.as_raw() as usize) < self.blocks.len()
    }

    /// Returns whether `bit` refers to a bit in this tree.
    pub fn valid_bit_id(&self, bit: ConfigBitId) -> bool {
        (bit.as_raw() as usize) < self.bits.len()
    }

    /// Returns the block with the given ID.
    pub fn block(&self, id: ConfigBlockId) -> &ConfigBlock {
        &self.blocks[id.as_raw() as usize]
    }

    /// Returns the bit with the given ID.
    pub fn bit(&self, id: ConfigBitId) -> &ConfigBit {
        &self.bits[id.as_raw() as usize]
    }

    /// Returns the display name of a block.
    pub fn block_name(&self, block: ConfigBlockId) -> &str {
        &self.block(block).name
    }

    /// Returns the parent of a block, or `None` for a top-level block.
    pub fn block_parent(&self, block: ConfigBlockId) -> Option<ConfigBlockId> {
        self.block(block).parent
    }

    /// Returns the ordered children of a block. Empty for leaf blocks.
    pub fn block_children(&self, block: ConfigBlockId) -> &[ConfigBlockId] {
        &self.block(block).children
    }

    /// Returns the ordered bits of a block. Empty for internal blocks.
    pub fn block_bits(&self, block: ConfigBlockId) -> &[ConfigBitId] {
        &self.block(block).bits
    }

    /// Returns the single block owning a bit.
    pub fn bit_owner(&self, bit: ConfigBitId) -> ConfigBlockId {
        self.bit(bit).owner
    }

    /// Returns the programmed value of a bit.
    pub fn bit_value(&self, bit: ConfigBitId) -> bool {
        self.bit(bit).value
    }

    /// Finds a direct child of `block` by name.
    ///
    /// Returns `None` when no child carries that name. Only immediate
    /// children are searched; hierarchy paths are resolved segment by
    /// segment by the caller.
    pub fn find_child_block(&self, block: ConfigBlockId, name: &str) -> Option<ConfigBlockId> {
        self.block(block)
            .children
            .iter()
            .copied()
            .find(|&child| self.block(child).name == name)
    }

    /// Iterates over all block IDs in creation order.
    pub fn blocks(&self) -> impl Iterator<Item = ConfigBlockId> + '_ {
        (0..self.blocks.len()).map(|i| ConfigBlockId::from_raw(i as u32))
    }

    /// Iterates over all bit IDs in creation order.
    pub fn bits(&self) -> impl Iterator<Item = ConfigBitId> + '_ {
        (0..self.bits.len()).map(|i| ConfigBitId::from_raw(i as u32))
    }

    /// Returns the number of blocks in the tree.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of bits in the tree.
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }
}
