use crate::WindowId;

/// The player's crafting grid.
///
/// The grid is addressed through a window id of its own; ingredient slots are
/// `0..SIZE` and the crafted output lives in a fixed slot after them.
pub struct CraftingGrid;

impl CraftingGrid {
    pub const WINDOW_ID: WindowId = 125;
    /// Ingredient slots of the largest (3x3) grid.
    pub const SIZE: u32 = 9;
    pub const RESULT_INDEX: u32 = Self::SIZE;
}
