//! Item to block lookups for placement routing.

use std::collections::HashMap;

use gate_core::{BlockKind, ItemKind, ItemOracle};

/// Registry mapping held items to the block kinds they place.
///
/// Tools and other non-placeable items simply have no entry.
#[derive(Clone, Debug)]
pub struct ItemRegistry {
    map: HashMap<ItemKind, BlockKind>,
}

impl ItemRegistry {
    /// Registry with no placeable items.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry with the standard placeable set.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(ItemKind::Stone, BlockKind::Stone);
        registry.register(ItemKind::Dirt, BlockKind::Dirt);
        registry.register(ItemKind::Planks, BlockKind::Planks);
        registry
    }

    pub fn register(&mut self, item: ItemKind, kind: BlockKind) {
        self.map.insert(item, kind);
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ItemOracle for ItemRegistry {
    fn block_kind_for_item(&self, item: ItemKind) -> Option<BlockKind> {
        self.map.get(&item).copied()
    }
}
