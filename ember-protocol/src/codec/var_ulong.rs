use std::{
    io::{Read, Write},
    num::NonZeroUsize,
    ops::Deref,
};

use crate::ser::{NetworkReadExt, NetworkWriteExt, ReadingError, WritingError};

use super::Codec;

pub type VarULongType = u64;

/// An unsigned LEB128 long. Entity runtime ids travel in this form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VarULong(pub VarULongType);

impl Codec<Self> for VarULong {
    const MAX_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

    fn written_size(&self) -> usize {
        match self.0 {
            0 => 1,
            n => (63 - n.leading_zeros() as usize) / 7 + 1,
        }
    }

    fn encode(&self, write: &mut impl Write) -> Result<(), WritingError> {
        let mut x = self.0;
        loop {
            let byte = (x & 0x7F) as u8;
            x >>= 7;
            if x == 0 {
                write.write_u8(byte)?;
                break;
            }
            write.write_u8(byte | 0x80)?;
        }

        Ok(())
    }

    fn decode(read: &mut impl Read) -> Result<Self, ReadingError> {
        let mut val: u64 = 0;
        for i in 0..Self::MAX_SIZE.get() {
            let byte = read.get_u8()?;
            if i == 9 && byte & 0xFE != 0 {
                return Err(ReadingError::TooLarge("VarULong".to_string()));
            }
            val |= (u64::from(byte) & 0x7F) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(VarULong(val));
            }
        }
        Err(ReadingError::TooLarge("VarULong".to_string()))
    }
}

impl From<u64> for VarULong {
    fn from(value: u64) -> Self {
        VarULong(value)
    }
}

impl From<u32> for VarULong {
    fn from(value: u32) -> Self {
        VarULong(value.into())
    }
}

impl Deref for VarULong {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodings() {
        for (value, len) in [(0u64, 1), (127, 1), (128, 2), (1 << 35, 6), (u64::MAX, 10)] {
            let mut buf = Vec::new();
            VarULong(value).encode(&mut buf).unwrap();
            assert_eq!(buf.len(), len);
            assert_eq!(VarULong(value).written_size(), len);
            assert_eq!(VarULong::decode(&mut buf.as_slice()).unwrap().0, value);
        }
    }

    #[test]
    fn eleven_bytes_rejected() {
        let mut bytes = vec![0x80; 10];
        bytes.push(0x00);
        assert!(matches!(
            VarULong::decode(&mut bytes.as_slice()),
            Err(ReadingError::TooLarge(_))
        ));
    }
}
