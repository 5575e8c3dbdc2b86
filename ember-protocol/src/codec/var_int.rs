use std::{
    io::{Read, Write},
    num::NonZeroUsize,
    ops::Deref,
};

use crate::ser::{ReadingError, WritingError};

use super::{Codec, var_uint::VarUInt};

pub type VarIntType = i32;

/**
 * A zig-zag encoded variable-length integer, as Bedrock writes signed 32 bit values.
 */
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub VarIntType);

impl VarInt {
    fn zigzag(self) -> VarUInt {
        VarUInt(((self.0 << 1) ^ (self.0 >> 31)) as u32)
    }

    fn unzigzag(raw: VarUInt) -> Self {
        VarInt(((raw.0 >> 1) as i32) ^ -((raw.0 & 1) as i32))
    }
}

impl Codec<Self> for VarInt {
    /// The maximum number of bytes a `VarInt` can occupy.
    const MAX_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

    fn written_size(&self) -> usize {
        self.zigzag().written_size()
    }

    fn encode(&self, write: &mut impl Write) -> Result<(), WritingError> {
        self.zigzag().encode(write)
    }

    fn decode(read: &mut impl Read) -> Result<Self, ReadingError> {
        VarUInt::decode(read)
            .map(Self::unzigzag)
            .map_err(|err| match err {
                ReadingError::TooLarge(_) => ReadingError::TooLarge("VarInt".to_string()),
                other => other,
            })
    }
}

// Macros are needed because traits over generics don't cover the std integer set
macro_rules! gen_from {
    ($ty: ty) => {
        impl From<$ty> for VarInt {
            fn from(value: $ty) -> Self {
                VarInt(value.into())
            }
        }
    };
}

gen_from!(i8);
gen_from!(u8);
gen_from!(i16);
gen_from!(u16);
gen_from!(i32);

macro_rules! gen_try_from {
    ($ty: ty) => {
        impl TryFrom<$ty> for VarInt {
            type Error = <i32 as TryFrom<$ty>>::Error;

            fn try_from(value: $ty) -> Result<Self, Self::Error> {
                Ok(VarInt(value.try_into()?))
            }
        }
    };
}

gen_try_from!(u32);
gen_try_from!(i64);
gen_try_from!(usize);

impl Deref for VarInt {
    type Target = i32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
