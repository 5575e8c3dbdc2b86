use std::{
    io::{Read, Write},
    num::NonZeroUsize,
};

use crate::ser::{ReadingError, WritingError};

pub mod item_stack;
pub mod network_pos;
pub mod var_int;
pub mod var_uint;
pub mod var_ulong;

pub trait Codec<T> {
    const MAX_SIZE: NonZeroUsize;

    fn written_size(&self) -> usize;

    fn encode(&self, write: &mut impl Write) -> Result<(), WritingError>;

    fn decode(read: &mut impl Read) -> Result<T, ReadingError>;
}
