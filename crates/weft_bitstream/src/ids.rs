//! Opaque ID newtypes for bitstream entities.
//!
//! [`ConfigBlockId`] and [`ConfigBitId`] are arena indices into the
//! [`ConfigTree`](crate::ConfigTree); [`FabricBitId`] and [`FabricRegionId`]
//! index the [`FabricBitstream`](crate::FabricBitstream). All are thin `u32`
//! wrappers that are `Copy`, `Hash`, and `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a block in the configuration tree.
    ConfigBlockId
);

define_id!(
    /// Opaque, copyable ID for a configuration bit owned by a leaf block.
    ConfigBitId
);

define_id!(
    /// Opaque, copyable ID for a bit in the physically ordered fabric bitstream.
    FabricBitId
);

define_id!(
    /// Opaque, copyable ID for an independently loadable bitstream region.
    FabricRegionId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn block_id_roundtrip() {
        let id = ConfigBlockId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn bit_id_roundtrip() {
        let id = ConfigBitId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
    }

    #[test]
    fn id_equality() {
        let a = FabricBitId::from_raw(3);
        let b = FabricBitId::from_raw(3);
        let c = FabricBitId::from_raw(4);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(FabricRegionId::from_raw(1));
        set.insert(FabricRegionId::from_raw(2));
        set.insert(FabricRegionId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = ConfigBlockId::from_raw(55);
        let json = serde_json::to_string(&id).unwrap();
        let restored: ConfigBlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn id_zero_and_max() {
        let zero = ConfigBitId::from_raw(0);
        let max = ConfigBitId::from_raw(u32::MAX);
        assert_ne!(zero, max);
        assert_eq!(zero.as_raw(), 0);
        assert_eq!(max.as_raw(), u32::MAX);
    }

    #[test]
    fn id_display() {
        let id = FabricRegionId::from_raw(42);
        assert_eq!(format!("{id}"), "42");
    }
}
