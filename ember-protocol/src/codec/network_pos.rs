use std::{
    io::{Read, Write},
    num::NonZeroUsize,
};

use ember_util::math::position::BlockPos;

use crate::ser::{NetworkReadExt, NetworkWriteExt, ReadingError, WritingError};

use super::{Codec, var_int::VarInt, var_uint::VarUInt};

/// Bedrock writes block positions as a signed x, an unsigned y and a signed z.
pub struct NetworkPos(pub BlockPos);

impl Codec<Self> for NetworkPos {
    const MAX_SIZE: NonZeroUsize = NonZeroUsize::new(15).unwrap();

    fn written_size(&self) -> usize {
        VarInt(self.0.0.x).written_size()
            + VarUInt(self.0.0.y as u32).written_size()
            + VarInt(self.0.0.z).written_size()
    }

    fn encode(&self, write: &mut impl Write) -> Result<(), WritingError> {
        write.write_var_int(&VarInt(self.0.0.x))?;
        write.write_var_uint(&VarUInt(self.0.0.y as u32))?;
        write.write_var_int(&VarInt(self.0.0.z))
    }

    fn decode(read: &mut impl Read) -> Result<Self, ReadingError> {
        let x = read.get_var_int()?.0;
        let y = read.get_var_uint()?.0 as i32;
        let z = read.get_var_int()?.0;
        Ok(NetworkPos(BlockPos::new(x, y, z)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout() {
        let mut buf = Vec::new();
        NetworkPos(BlockPos::new(1, 64, -1)).encode(&mut buf).unwrap();
        assert_eq!(buf, [0x02, 0x40, 0x01]);
        assert_eq!(NetworkPos(BlockPos::new(1, 64, -1)).written_size(), 3);
    }

    #[test]
    fn negative_y_survives() {
        let mut buf = Vec::new();
        NetworkPos(BlockPos::new(0, -60, 0)).encode(&mut buf).unwrap();
        let pos = NetworkPos::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(pos.0, BlockPos::new(0, -60, 0));
    }
}
