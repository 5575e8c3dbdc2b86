use std::io::{Read, Write};

use bytes::Bytes;
use codec::var_uint::VarUInt;
use packet::Packet;
use ser::{NetworkWriteExt, ReadingError, WritingError};

pub mod client;
pub mod codec;
pub mod packet;
pub mod ser;
pub mod server;

pub use codec::{var_int::VarInt, var_ulong::VarULong};

/// A framed packet body as it arrives from the connection layer, id already split off.
pub struct RawPacket {
    pub id: u32,
    pub payload: Bytes,
}

pub trait ClientPacket: Packet {
    fn write_packet_data(&self, write: impl Write) -> Result<(), WritingError>;

    fn write(&self, write: impl Write) -> Result<(), WritingError> {
        let mut write = write;
        write.write_var_uint(&VarUInt(Self::PACKET_ID))?;
        self.write_packet_data(write)
    }

    /// Serializes the packet, id included, into a fresh buffer.
    fn to_bytes(&self) -> Result<Bytes, WritingError> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(buf.into())
    }
}

pub trait ServerPacket: Packet + Sized {
    fn read(read: impl Read) -> Result<Self, ReadingError>;
}
