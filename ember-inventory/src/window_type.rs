//! Kinds of window the client can be told to open. The client picks the
//! screen layout from this, independently of the window id.

pub type WindowType = i8;

pub const INVENTORY: WindowType = -1;
pub const CONTAINER: WindowType = 0;
