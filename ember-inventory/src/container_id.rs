//! Window ids the client uses to address containers.
//!
//! Ids in `FIRST..=LAST` are handed out dynamically for opened containers, the
//! rest are fixed.

use crate::WindowId;

pub const NONE: WindowId = -1;
pub const INVENTORY: WindowId = 0;
pub const FIRST: WindowId = 1;
pub const LAST: WindowId = 100;
pub const OFFHAND: WindowId = 119;
pub const ARMOR: WindowId = 120;
pub const CREATIVE: WindowId = 121;
pub const HOTBAR: WindowId = 122;
pub const FIXED_INVENTORY: WindowId = 123;
pub const CURSOR: WindowId = 124;
