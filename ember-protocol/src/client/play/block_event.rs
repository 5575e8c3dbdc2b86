use std::io::Write;

use ember_macros::packet;
use ember_util::math::position::BlockPos;

use crate::{
    ClientPacket, VarInt,
    packet::clientbound::BLOCK_EVENT,
    ser::{NetworkWriteExt, WritingError},
};

/// Event type a chest uses for its lid animation.
pub const CHEST_LID_EVENT: i32 = 1;

#[packet(BLOCK_EVENT)]
pub struct CBlockEvent {
    location: BlockPos,
    event_type: i32,
    event_data: i32,
}

impl CBlockEvent {
    pub fn new(location: BlockPos, event_type: i32, event_data: i32) -> Self {
        Self {
            location,
            event_type,
            event_data,
        }
    }

    /// Opens or shuts the lid of the chest at `location` for everyone who sees it.
    pub fn chest_lid(location: BlockPos, open: bool) -> Self {
        Self::new(location, CHEST_LID_EVENT, i32::from(open))
    }
}

impl ClientPacket for CBlockEvent {
    fn write_packet_data(&self, write: impl Write) -> Result<(), WritingError> {
        let mut write = write;
        write.write_block_pos(&self.location)?;
        write.write_var_int(&VarInt(self.event_type))?;
        write.write_var_int(&VarInt(self.event_data))
    }
}
