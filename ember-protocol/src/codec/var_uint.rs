use std::{
    io::{Read, Write},
    num::NonZeroUsize,
    ops::Deref,
};

use crate::ser::{NetworkReadExt, NetworkWriteExt, ReadingError, WritingError};

use super::Codec;

pub type VarUIntType = u32;

/// An unsigned LEB128 integer, at most 5 bytes on the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VarUInt(pub VarUIntType);

impl Codec<Self> for VarUInt {
    const MAX_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

    fn written_size(&self) -> usize {
        match self.0 {
            0 => 1,
            n => (31 - n.leading_zeros() as usize) / 7 + 1,
        }
    }

    fn encode(&self, write: &mut impl Write) -> Result<(), WritingError> {
        let mut val = self.0;
        while val > 0x7F {
            write.write_u8((val as u8) | 0x80)?;
            val >>= 7;
        }
        write.write_u8(val as u8)
    }

    fn decode(read: &mut impl Read) -> Result<Self, ReadingError> {
        let mut val: u32 = 0;
        for i in 0..Self::MAX_SIZE.get() {
            let byte = read.get_u8()?;
            // The fifth byte only has room for the top four bits.
            if i == 4 && byte & 0xF0 != 0 {
                return Err(ReadingError::TooLarge("VarUInt".to_string()));
            }
            val |= (u32::from(byte) & 0x7F) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(VarUInt(val));
            }
        }
        Err(ReadingError::TooLarge("VarUInt".to_string()))
    }
}

impl From<u8> for VarUInt {
    fn from(value: u8) -> Self {
        VarUInt(value.into())
    }
}

impl From<u16> for VarUInt {
    fn from(value: u16) -> Self {
        VarUInt(value.into())
    }
}

impl From<u32> for VarUInt {
    fn from(value: u32) -> Self {
        VarUInt(value)
    }
}

impl TryFrom<usize> for VarUInt {
    type Error = <u32 as TryFrom<usize>>::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Ok(VarUInt(value.try_into()?))
    }
}

impl Deref for VarUInt {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
