use std::fmt;

use crate::{ItemStack, WindowId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CreativeMode {
    /// The item is thrown into the creative "trash" and destroyed.
    Delete,
    /// The item is taken out of the creative item list.
    Create,
}

/// One slot-level item movement a client claims happened.
///
/// `source_item` is what the slot held before the action and `target_item`
/// what the client says it holds afterwards. Actions are never modified once
/// decoded; whoever executes the transaction compares them against the real
/// inventories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InventoryAction {
    /// A change to a slot of an addressable window.
    SlotChange {
        source_item: ItemStack,
        target_item: ItemStack,
        window_id: WindowId,
        slot: u32,
    },
    /// An item thrown out into the world.
    DropItem {
        source_item: ItemStack,
        target_item: ItemStack,
    },
    /// Creative mode materialising or discarding an item.
    CreativeInventory {
        source_item: ItemStack,
        target_item: ItemStack,
        mode: CreativeMode,
    },
}

impl InventoryAction {
    pub fn source_item(&self) -> &ItemStack {
        match self {
            Self::SlotChange { source_item, .. }
            | Self::DropItem { source_item, .. }
            | Self::CreativeInventory { source_item, .. } => source_item,
        }
    }

    pub fn target_item(&self) -> &ItemStack {
        match self {
            Self::SlotChange { target_item, .. }
            | Self::DropItem { target_item, .. }
            | Self::CreativeInventory { target_item, .. } => target_item,
        }
    }

    /// The window this action touches, if it addresses one.
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::SlotChange { window_id, .. } => Some(*window_id),
            Self::DropItem { .. } | Self::CreativeInventory { .. } => None,
        }
    }
}

impl fmt::Display for InventoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotChange {
                source_item,
                target_item,
                window_id,
                slot,
            } => write!(
                f,
                "SlotChange(window {window_id}, slot {slot}: {source_item} -> {target_item})"
            ),
            Self::DropItem {
                source_item,
                target_item,
            } => write!(f, "DropItem({source_item} -> {target_item})"),
            Self::CreativeInventory {
                source_item,
                target_item,
                mode,
            } => write!(f, "Creative{mode:?}({source_item} -> {target_item})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container_id;

    #[test]
    fn accessors_cover_every_variant() {
        let stone = ItemStack::new(1, 1);
        let actions = [
            InventoryAction::SlotChange {
                source_item: ItemStack::EMPTY,
                target_item: stone.clone(),
                window_id: container_id::INVENTORY,
                slot: 9,
            },
            InventoryAction::DropItem {
                source_item: ItemStack::EMPTY,
                target_item: stone.clone(),
            },
            InventoryAction::CreativeInventory {
                source_item: ItemStack::EMPTY,
                target_item: stone.clone(),
                mode: CreativeMode::Create,
            },
        ];

        for action in &actions {
            assert!(action.source_item().is_empty());
            assert_eq!(action.target_item(), &stone);
        }
        assert_eq!(actions[0].window_id(), Some(container_id::INVENTORY));
        assert_eq!(actions[1].window_id(), None);
        assert_eq!(
            actions[0].to_string(),
            "SlotChange(window 0, slot 9: Air -> 1:0 x1)"
        );
        assert_eq!(actions[2].to_string(), "CreativeCreate(Air -> 1:0 x1)");
    }
}
