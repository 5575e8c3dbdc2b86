pub mod action;
pub mod container_id;
mod crafting;
mod error;
pub mod item;
mod open_container;
pub mod player;
pub mod window_type;

pub use action::{CreativeMode, InventoryAction};
pub use crafting::CraftingGrid;
pub use error::InventoryError;
pub use item::ItemStack;
pub use open_container::*;

/// Numeric identifier of an addressable inventory window, as sent on the wire.
pub type WindowId = i32;
