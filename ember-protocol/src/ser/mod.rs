use std::{
    fmt,
    io::{Read, Write},
};

use ember_inventory::ItemStack;
use ember_util::math::{position::BlockPos, vector3::Vector3};
use thiserror::Error;

use crate::codec::{
    Codec, item_stack::NetworkItemStack, network_pos::NetworkPos, var_int::VarInt,
    var_uint::VarUInt, var_ulong::VarULong,
};

/// Which discriminator of a packet held a value the decoder does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    InventorySourceType,
    WorldActionSlot,
    CreativeActionSlot,
    TransactionType,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InventorySourceType => "inventory source type",
            Self::WorldActionSlot => "world action slot",
            Self::CreativeActionSlot => "creative inventory action type",
            Self::TransactionType => "transaction type",
        })
    }
}

#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("incomplete: {0}")]
    Incomplete(String),
    #[error("too large: {0}")]
    TooLarge(String),
    #[error("unexpected {kind} {value}")]
    UnexpectedTag { kind: TagKind, value: i64 },
    #[error("{0}")]
    Message(String),
}

#[derive(Debug, Error)]
pub enum WritingError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Failed to serialize packet: {0}")]
    Message(String),
}

/// Typed reads over a byte source. Fixed width values are little endian.
pub trait NetworkReadExt {
    fn get_u8(&mut self) -> Result<u8, ReadingError>;
    fn get_u16_le(&mut self) -> Result<u16, ReadingError>;
    fn get_f32_le(&mut self) -> Result<f32, ReadingError>;
    fn read_boxed_slice(&mut self, count: usize) -> Result<Box<[u8]>, ReadingError>;

    fn get_bool(&mut self) -> Result<bool, ReadingError>;
    fn get_var_int(&mut self) -> Result<VarInt, ReadingError>;
    fn get_var_uint(&mut self) -> Result<VarUInt, ReadingError>;
    fn get_var_ulong(&mut self) -> Result<VarULong, ReadingError>;
    fn get_string_bounded(&mut self, bound: usize) -> Result<String, ReadingError>;
    fn get_string(&mut self) -> Result<String, ReadingError>;
    fn get_block_pos(&mut self) -> Result<BlockPos, ReadingError>;
    fn get_vector3_f32(&mut self) -> Result<Vector3<f32>, ReadingError>;
    fn get_item_stack(&mut self) -> Result<ItemStack, ReadingError>;
}

macro_rules! get_le {
    ($self:ident, $ty:ty) => {{
        let mut buf = [0u8; size_of::<$ty>()];
        $self
            .read_exact(&mut buf)
            .map_err(|err| ReadingError::Incomplete(err.to_string()))?;
        Ok(<$ty>::from_le_bytes(buf))
    }};
}

impl<R: Read> NetworkReadExt for R {
    fn get_u8(&mut self) -> Result<u8, ReadingError> {
        get_le!(self, u8)
    }

    fn get_u16_le(&mut self) -> Result<u16, ReadingError> {
        get_le!(self, u16)
    }

    fn get_f32_le(&mut self) -> Result<f32, ReadingError> {
        get_le!(self, f32)
    }

    fn read_boxed_slice(&mut self, count: usize) -> Result<Box<[u8]>, ReadingError> {
        let mut buf = vec![0u8; count];
        self.read_exact(&mut buf)
            .map_err(|err| ReadingError::Incomplete(err.to_string()))?;

        Ok(buf.into())
    }

    fn get_bool(&mut self) -> Result<bool, ReadingError> {
        let byte = self.get_u8()?;
        Ok(byte != 0)
    }

    fn get_var_int(&mut self) -> Result<VarInt, ReadingError> {
        VarInt::decode(self)
    }

    fn get_var_uint(&mut self) -> Result<VarUInt, ReadingError> {
        VarUInt::decode(self)
    }

    fn get_var_ulong(&mut self) -> Result<VarULong, ReadingError> {
        VarULong::decode(self)
    }

    fn get_string_bounded(&mut self, bound: usize) -> Result<String, ReadingError> {
        let size = self.get_var_uint()?.0 as usize;
        if size > bound {
            return Err(ReadingError::TooLarge("string".to_string()));
        }

        let data = self.read_boxed_slice(size)?;
        String::from_utf8(data.into()).map_err(|e| ReadingError::Message(e.to_string()))
    }

    fn get_string(&mut self) -> Result<String, ReadingError> {
        self.get_string_bounded(i16::MAX as usize)
    }

    fn get_block_pos(&mut self) -> Result<BlockPos, ReadingError> {
        Ok(NetworkPos::decode(self)?.0)
    }

    fn get_vector3_f32(&mut self) -> Result<Vector3<f32>, ReadingError> {
        Ok(Vector3::new(
            self.get_f32_le()?,
            self.get_f32_le()?,
            self.get_f32_le()?,
        ))
    }

    fn get_item_stack(&mut self) -> Result<ItemStack, ReadingError> {
        Ok(NetworkItemStack::decode(self)?.0.into_owned())
    }
}

pub trait NetworkWriteExt {
    fn write_u8(&mut self, data: u8) -> Result<(), WritingError>;
    fn write_u16_le(&mut self, data: u16) -> Result<(), WritingError>;
    fn write_f32_le(&mut self, data: f32) -> Result<(), WritingError>;
    fn write_slice(&mut self, data: &[u8]) -> Result<(), WritingError>;

    fn write_bool(&mut self, data: bool) -> Result<(), WritingError>;
    fn write_var_int(&mut self, data: &VarInt) -> Result<(), WritingError>;
    fn write_var_uint(&mut self, data: &VarUInt) -> Result<(), WritingError>;
    fn write_var_ulong(&mut self, data: &VarULong) -> Result<(), WritingError>;
    fn write_string_bounded(&mut self, data: &str, bound: usize) -> Result<(), WritingError>;
    fn write_string(&mut self, data: &str) -> Result<(), WritingError>;
    fn write_block_pos(&mut self, data: &BlockPos) -> Result<(), WritingError>;
    fn write_vector3_f32(&mut self, data: &Vector3<f32>) -> Result<(), WritingError>;
    fn write_item_stack(&mut self, data: &ItemStack) -> Result<(), WritingError>;
}

impl<W: Write> NetworkWriteExt for W {
    fn write_u8(&mut self, data: u8) -> Result<(), WritingError> {
        self.write_all(&data.to_le_bytes())
            .map_err(WritingError::IoError)
    }

    fn write_u16_le(&mut self, data: u16) -> Result<(), WritingError> {
        self.write_all(&data.to_le_bytes())
            .map_err(WritingError::IoError)
    }

    fn write_f32_le(&mut self, data: f32) -> Result<(), WritingError> {
        self.write_all(&data.to_le_bytes())
            .map_err(WritingError::IoError)
    }

    fn write_slice(&mut self, data: &[u8]) -> Result<(), WritingError> {
        self.write_all(data).map_err(WritingError::IoError)
    }

    fn write_bool(&mut self, data: bool) -> Result<(), WritingError> {
        self.write_u8(u8::from(data))
    }

    fn write_var_int(&mut self, data: &VarInt) -> Result<(), WritingError> {
        data.encode(self)
    }

    fn write_var_uint(&mut self, data: &VarUInt) -> Result<(), WritingError> {
        data.encode(self)
    }

    fn write_var_ulong(&mut self, data: &VarULong) -> Result<(), WritingError> {
        data.encode(self)
    }

    fn write_string_bounded(&mut self, data: &str, bound: usize) -> Result<(), WritingError> {
        if data.len() > bound {
            return Err(WritingError::Message(format!(
                "string of {} bytes exceeds the bound of {bound}",
                data.len()
            )));
        }
        self.write_var_uint(&VarUInt::try_from(data.len()).map_err(|e| {
            WritingError::Message(e.to_string())
        })?)?;
        self.write_all(data.as_bytes())
            .map_err(WritingError::IoError)
    }

    fn write_string(&mut self, data: &str) -> Result<(), WritingError> {
        self.write_string_bounded(data, i16::MAX as usize)
    }

    fn write_block_pos(&mut self, data: &BlockPos) -> Result<(), WritingError> {
        NetworkPos(*data).encode(self)
    }

    fn write_vector3_f32(&mut self, data: &Vector3<f32>) -> Result<(), WritingError> {
        self.write_f32_le(data.x)?;
        self.write_f32_le(data.y)?;
        self.write_f32_le(data.z)
    }

    fn write_item_stack(&mut self, data: &ItemStack) -> Result<(), WritingError> {
        NetworkItemStack(std::borrow::Cow::Borrowed(data)).encode(self)
    }
}
