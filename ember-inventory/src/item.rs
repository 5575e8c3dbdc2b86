use std::fmt;

/// An item as the client describes it.
///
/// The server never interprets `nbt`, `can_place_on` or `can_destroy` while
/// decoding; they are carried so a transaction can be compared against the
/// authoritative inventory.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ItemStack {
    pub id: i32,
    /// Damage or variant. `-1` is the wildcard used by recipes.
    pub meta: i16,
    pub count: u8,
    pub nbt: Vec<u8>,
    pub can_place_on: Vec<String>,
    pub can_destroy: Vec<String>,
}

impl ItemStack {
    pub const AIR_ID: i32 = 0;
    pub const WILDCARD_META: i16 = -1;

    pub const EMPTY: ItemStack = ItemStack {
        id: Self::AIR_ID,
        meta: 0,
        count: 0,
        nbt: Vec::new(),
        can_place_on: Vec::new(),
        can_destroy: Vec::new(),
    };

    pub fn new(count: u8, id: i32) -> Self {
        Self {
            id,
            count,
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, meta: i16) -> Self {
        self.meta = meta;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id == Self::AIR_ID || self.count == 0
    }

    pub fn has_nbt(&self) -> bool {
        !self.nbt.is_empty()
    }

}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Air");
        }
        write!(f, "{}:{} x{}", self.id, self.meta, self.count)?;
        if self.has_nbt() {
            write!(f, " ({} bytes nbt)", self.nbt.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack() {
        assert!(ItemStack::EMPTY.is_empty());
        assert_eq!(ItemStack::EMPTY, ItemStack::default());
        assert!(ItemStack::new(0, 1).is_empty());
        assert!(!ItemStack::new(1, 1).is_empty());
        assert_eq!(ItemStack::EMPTY.to_string(), "Air");
    }

    #[test]
    fn display() {
        assert_eq!(ItemStack::new(3, 5).with_meta(2).to_string(), "5:2 x3");
        let mut stack = ItemStack::new(1, 5);
        stack.nbt = vec![0x0a, 0x00, 0x00];
        assert_eq!(stack.to_string(), "5:0 x1 (3 bytes nbt)");
    }
}
