use std::io::Read;

use ember_inventory::{
    CraftingGrid, CreativeMode, InventoryAction, ItemStack, WindowId, container_id,
    player::PlayerInventory,
};
use ember_macros::packet;
use ember_util::math::{position::BlockPos, vector3::Vector3};

use crate::{
    ServerPacket,
    packet::serverbound::INVENTORY_TRANSACTION,
    ser::{NetworkReadExt, ReadingError, TagKind},
};

/// Most actions reserved up front while decoding. The count on the wire is
/// untrusted, larger batches grow the buffer as their actions arrive.
pub const DEFAULT_MAX_ACTIONS: usize = 512;

pub const WORLD_DROP_ITEM_SLOT: u32 = 0;
/// Sent by the server only, a client never picks items up through a transaction.
pub const WORLD_PICKUP_ITEM_SLOT: u32 = 1;

pub const CREATIVE_DELETE_ITEM_SLOT: u32 = 0;
pub const CREATIVE_CREATE_ITEM_SLOT: u32 = 1;

// Slots of the crafting source. Reserved, decoding does not look at them.
pub const CRAFT_PUT_SLOT: u32 = 3;
pub const CRAFT_GET_SLOT: u32 = 5;
pub const CRAFT_GET_RESULT_SLOT: u32 = 7;
pub const CRAFT_USE_SLOT: u32 = 9;

fn unexpected(kind: TagKind, value: impl Into<i64>) -> ReadingError {
    ReadingError::UnexpectedTag {
        kind,
        value: value.into(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TransactionType {
    Normal = 0,
    Mismatch = 1,
    UseItem = 2,
    UseItemOnEntity = 3,
    ReleaseItem = 4,
}

impl TryFrom<u32> for TransactionType {
    type Error = ReadingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Mismatch),
            2 => Ok(Self::UseItem),
            3 => Ok(Self::UseItemOnEntity),
            4 => Ok(Self::ReleaseItem),
            _ => Err(unexpected(TagKind::TransactionType, value)),
        }
    }
}

/// Where the items of one action logically come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum InventorySourceType {
    Container = 0,
    /// Dropped into or picked up from the world.
    World = 2,
    Creative = 3,
    Craft = 99999,
}

impl TryFrom<u32> for InventorySourceType {
    type Error = ReadingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Container),
            2 => Ok(Self::World),
            3 => Ok(Self::Creative),
            99999 => Ok(Self::Craft),
            _ => Err(unexpected(TagKind::InventorySourceType, value)),
        }
    }
}

/// Special slot codes carried by crafting sources. Only [`CraftSlotType::CraftingResult`]
/// changes how an action decodes; the others are placeholders for windows the
/// server does not implement yet and may change with the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CraftSlotType {
    CraftingAddIngredient = -2,
    CraftingRemoveIngredient = -3,
    CraftingResult = -4,
    CraftingUseIngredient = -5,

    AnvilInput = -10,
    AnvilMaterial = -11,
    AnvilResult = -12,
    AnvilOutput = -13,

    EnchantInput = -15,
    EnchantMaterial = -16,
    EnchantOutput = -17,

    TradingInput1 = -20,
    TradingInput2 = -21,
    TradingUseInputs = -22,
    TradingOutput = -23,

    Beacon = -24,

    ContainerDropContents = -100,
}

#[derive(Debug)]
pub struct InvalidCraftSlotType;

impl TryFrom<i32> for CraftSlotType {
    type Error = InvalidCraftSlotType;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            -2 => Self::CraftingAddIngredient,
            -3 => Self::CraftingRemoveIngredient,
            -4 => Self::CraftingResult,
            -5 => Self::CraftingUseIngredient,
            -10 => Self::AnvilInput,
            -11 => Self::AnvilMaterial,
            -12 => Self::AnvilResult,
            -13 => Self::AnvilOutput,
            -15 => Self::EnchantInput,
            -16 => Self::EnchantMaterial,
            -17 => Self::EnchantOutput,
            -20 => Self::TradingInput1,
            -21 => Self::TradingInput2,
            -22 => Self::TradingUseInputs,
            -23 => Self::TradingOutput,
            -24 => Self::Beacon,
            -100 => Self::ContainerDropContents,
            _ => return Err(InvalidCraftSlotType),
        })
    }
}

/// Old clients address the armor and cursor windows separately; the player
/// inventory stores them after the 36 main slots. Returns the window and slot
/// the action really targets.
pub fn remap_legacy_container_slot(window_id: WindowId, slot: u32) -> (WindowId, u32) {
    match window_id {
        // An out of range slot stays out of range and is rejected on execution.
        container_id::ARMOR => (
            container_id::INVENTORY,
            slot.saturating_add(PlayerInventory::ARMOR_OFFSET),
        ),
        container_id::CURSOR => (container_id::INVENTORY, PlayerInventory::CURSOR_INDEX),
        _ => (window_id, slot),
    }
}

/// Source specific fields read before the common slot and item fields.
enum SourcePrefix {
    Container(WindowId),
    World,
    Creative,
    Craft(i32),
}

fn read_action(read: &mut impl Read) -> Result<InventoryAction, ReadingError> {
    let source_type = InventorySourceType::try_from(read.get_var_uint()?.0)?;
    let prefix = match source_type {
        InventorySourceType::Container => SourcePrefix::Container(read.get_var_int()?.0),
        InventorySourceType::World => {
            // Unused flags, still have to be consumed.
            read.get_var_uint()?;
            SourcePrefix::World
        }
        InventorySourceType::Creative => SourcePrefix::Creative,
        InventorySourceType::Craft => SourcePrefix::Craft(read.get_var_int()?.0),
    };

    let slot = read.get_var_uint()?.0;
    let source_item = read.get_item_stack()?;
    let target_item = read.get_item_stack()?;

    match prefix {
        SourcePrefix::Container(window_id) => {
            let (window_id, slot) = remap_legacy_container_slot(window_id, slot);
            Ok(InventoryAction::SlotChange {
                source_item,
                target_item,
                window_id,
                slot,
            })
        }
        SourcePrefix::World => {
            if slot != WORLD_DROP_ITEM_SLOT {
                return Err(unexpected(TagKind::WorldActionSlot, slot));
            }
            Ok(InventoryAction::DropItem {
                source_item,
                target_item,
            })
        }
        SourcePrefix::Creative => {
            let mode = match slot {
                CREATIVE_DELETE_ITEM_SLOT => CreativeMode::Delete,
                CREATIVE_CREATE_ITEM_SLOT => CreativeMode::Create,
                _ => return Err(unexpected(TagKind::CreativeActionSlot, slot)),
            };
            Ok(InventoryAction::CreativeInventory {
                source_item,
                target_item,
                mode,
            })
        }
        SourcePrefix::Craft(code) => {
            let slot = match CraftSlotType::try_from(code) {
                Ok(CraftSlotType::CraftingResult) => CraftingGrid::RESULT_INDEX,
                _ => slot,
            };
            Ok(InventoryAction::SlotChange {
                source_item,
                target_item,
                window_id: CraftingGrid::WINDOW_ID,
                slot,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseItemAction {
    ClickBlock,
    ClickAir,
    BreakBlock,
}

#[derive(Debug)]
pub struct InvalidUseItemAction;

impl TryFrom<u32> for UseItemAction {
    type Error = InvalidUseItemAction;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ClickBlock),
            1 => Ok(Self::ClickAir),
            2 => Ok(Self::BreakBlock),
            _ => Err(InvalidUseItemAction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseItemOnEntityAction {
    Interact,
    Attack,
}

#[derive(Debug)]
pub struct InvalidUseItemOnEntityAction;

impl TryFrom<u32> for UseItemOnEntityAction {
    type Error = InvalidUseItemOnEntityAction;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Interact),
            1 => Ok(Self::Attack),
            _ => Err(InvalidUseItemOnEntityAction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseItemAction {
    /// Bow shot.
    Release,
    /// Finished eating or drinking.
    Consume,
}

#[derive(Debug)]
pub struct InvalidReleaseItemAction;

impl TryFrom<u32> for ReleaseItemAction {
    type Error = InvalidReleaseItemAction;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Release),
            1 => Ok(Self::Consume),
            _ => Err(InvalidReleaseItemAction),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UseItemData {
    /// Raw action code, see [`UseItemData::action`].
    pub action_type: u32,
    pub block_pos: BlockPos,
    pub face: i32,
    pub hotbar_slot: i32,
    pub item_in_hand: ItemStack,
    pub player_pos: Vector3<f32>,
    pub click_pos: Vector3<f32>,
}

impl UseItemData {
    fn read(read: &mut impl Read) -> Result<Self, ReadingError> {
        Ok(Self {
            action_type: read.get_var_uint()?.0,
            block_pos: read.get_block_pos()?,
            face: read.get_var_int()?.0,
            hotbar_slot: read.get_var_int()?.0,
            item_in_hand: read.get_item_stack()?,
            player_pos: read.get_vector3_f32()?,
            click_pos: read.get_vector3_f32()?,
        })
    }

    /// `None` for action codes newer than this server.
    pub fn action(&self) -> Option<UseItemAction> {
        UseItemAction::try_from(self.action_type).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UseItemOnEntityData {
    pub entity_runtime_id: u64,
    pub action_type: u32,
    pub hotbar_slot: i32,
    pub item_in_hand: ItemStack,
    pub vector1: Vector3<f32>,
    pub vector2: Vector3<f32>,
}

impl UseItemOnEntityData {
    fn read(read: &mut impl Read) -> Result<Self, ReadingError> {
        Ok(Self {
            entity_runtime_id: read.get_var_ulong()?.0,
            action_type: read.get_var_uint()?.0,
            hotbar_slot: read.get_var_int()?.0,
            item_in_hand: read.get_item_stack()?,
            vector1: read.get_vector3_f32()?,
            vector2: read.get_vector3_f32()?,
        })
    }

    pub fn action(&self) -> Option<UseItemOnEntityAction> {
        UseItemOnEntityAction::try_from(self.action_type).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseItemData {
    pub action_type: u32,
    pub hotbar_slot: i32,
    pub item_in_hand: ItemStack,
    pub head_pos: Vector3<f32>,
}

impl ReleaseItemData {
    fn read(read: &mut impl Read) -> Result<Self, ReadingError> {
        Ok(Self {
            action_type: read.get_var_uint()?.0,
            hotbar_slot: read.get_var_int()?.0,
            item_in_hand: read.get_item_stack()?,
            head_pos: read.get_vector3_f32()?,
        })
    }

    pub fn action(&self) -> Option<ReleaseItemAction> {
        ReleaseItemAction::try_from(self.action_type).ok()
    }
}

/// What the client meant the transaction to do. The variant is the transaction type.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionData {
    Normal,
    Mismatch,
    UseItem(UseItemData),
    UseItemOnEntity(UseItemOnEntityData),
    ReleaseItem(ReleaseItemData),
}

impl TransactionData {
    fn read(read: &mut impl Read, transaction_type: TransactionType) -> Result<Self, ReadingError> {
        Ok(match transaction_type {
            TransactionType::Normal => Self::Normal,
            TransactionType::Mismatch => Self::Mismatch,
            TransactionType::UseItem => Self::UseItem(UseItemData::read(read)?),
            TransactionType::UseItemOnEntity => {
                Self::UseItemOnEntity(UseItemOnEntityData::read(read)?)
            }
            TransactionType::ReleaseItem => Self::ReleaseItem(ReleaseItemData::read(read)?),
        })
    }

    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Normal => TransactionType::Normal,
            Self::Mismatch => TransactionType::Mismatch,
            Self::UseItem(_) => TransactionType::UseItem,
            Self::UseItemOnEntity(_) => TransactionType::UseItemOnEntity,
            Self::ReleaseItem(_) => TransactionType::ReleaseItem,
        }
    }
}

/// A batch of inventory actions the client wants applied together.
///
/// Actions keep the order the client sent them in. Decoding either yields the
/// whole packet or an error; nothing is handed out from a packet that failed
/// halfway.
#[derive(Debug, Clone, PartialEq)]
#[packet(INVENTORY_TRANSACTION)]
pub struct SInventoryTransaction {
    pub actions: Vec<InventoryAction>,
    pub data: TransactionData,
}

impl SInventoryTransaction {
    pub fn transaction_type(&self) -> TransactionType {
        self.data.transaction_type()
    }

    /// Decodes the packet body, refusing more than `max_actions` actions before
    /// reading any of them.
    pub fn read_bounded(read: impl Read, max_actions: usize) -> Result<Self, ReadingError> {
        Self::read_with_limit(read, Some(max_actions))
    }

    fn read_with_limit(read: impl Read, max_actions: Option<usize>) -> Result<Self, ReadingError> {
        let mut read = read;

        // The type tag is validated after the actions, in wire order.
        let raw_type = read.get_var_uint()?.0;

        let action_count = read.get_var_uint()?.0 as usize;
        if let Some(max_actions) = max_actions {
            if action_count > max_actions {
                return Err(ReadingError::TooLarge(format!(
                    "{action_count} inventory actions (at most {max_actions})"
                )));
            }
        }
        let mut actions = Vec::with_capacity(action_count.min(DEFAULT_MAX_ACTIONS));
        for _ in 0..action_count {
            actions.push(read_action(&mut read)?);
        }

        let transaction_type = TransactionType::try_from(raw_type)?;
        let data = TransactionData::read(&mut read, transaction_type)?;

        Ok(Self { actions, data })
    }
}

impl ServerPacket for SInventoryTransaction {
    fn read(read: impl Read) -> Result<Self, ReadingError> {
        Self::read_with_limit(read, None)
    }
}
