/// Slot layout of the player's own inventory window.
///
/// Armor and the cursor are separate windows on the wire, but the server keeps
/// them as a contiguous extension of the main inventory: armor at
/// `ARMOR_OFFSET..ARMOR_OFFSET + ARMOR_SIZE`, the cursor right after.
pub struct PlayerInventory;

impl PlayerInventory {
    pub const HOTBAR_SIZE: u32 = 9;
    pub const MAIN_SIZE: u32 = 36;
    pub const ARMOR_SIZE: u32 = 4;
    pub const ARMOR_OFFSET: u32 = Self::MAIN_SIZE;
    pub const CURSOR_INDEX: u32 = Self::ARMOR_OFFSET + Self::ARMOR_SIZE;
    pub const SIZE: u32 = Self::CURSOR_INDEX + 1;
}

#[cfg(test)]
mod tests {
    use super::PlayerInventory;

    #[test]
    fn layout() {
        assert_eq!(PlayerInventory::ARMOR_OFFSET, 36);
        assert_eq!(PlayerInventory::CURSOR_INDEX, 40);
        assert_eq!(PlayerInventory::SIZE, 41);
    }
}
