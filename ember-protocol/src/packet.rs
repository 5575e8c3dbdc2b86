pub trait Packet {
    const PACKET_ID: u32;
}

/// Packet ids of the Bedrock protocol revision this server speaks.
pub mod serverbound {
    pub const INVENTORY_TRANSACTION: u32 = 0x1e;
}

pub mod clientbound {
    pub const DISCONNECT: u32 = 0x05;
    pub const LEVEL_SOUND_EVENT: u32 = 0x18;
    pub const BLOCK_EVENT: u32 = 0x1a;
}
