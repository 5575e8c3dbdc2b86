use std::{
    borrow::Cow,
    io::{Read, Write},
    num::NonZeroUsize,
};

use ember_inventory::ItemStack;

use crate::ser::{NetworkReadExt, NetworkWriteExt, ReadingError, WritingError};

use super::{Codec, var_int::VarInt};

/// Aux value meta that stands for "any meta".
const WILDCARD_AUX_META: i32 = 0x7fff;
/// Upper bound on the can-place-on / can-destroy lists of one stack.
const MAX_BLOCK_NAMES: usize = 256;
const MAX_BLOCK_NAME_LEN: usize = 256;

pub struct NetworkItemStack<'a>(pub Cow<'a, ItemStack>);

impl NetworkItemStack<'_> {
    fn read_block_names(read: &mut impl Read) -> Result<Vec<String>, ReadingError> {
        let count = read.get_var_int()?.0;
        let count = usize::try_from(count)
            .map_err(|_| ReadingError::Message(format!("negative block name count {count}")))?;
        if count > MAX_BLOCK_NAMES {
            return Err(ReadingError::TooLarge(format!("{count} block names")));
        }
        (0..count)
            .map(|_| read.get_string_bounded(MAX_BLOCK_NAME_LEN))
            .collect()
    }

    fn write_block_names(write: &mut impl Write, names: &[String]) -> Result<(), WritingError> {
        write.write_var_int(
            &VarInt::try_from(names.len()).map_err(|e| WritingError::Message(e.to_string()))?,
        )?;
        for name in names {
            write.write_string_bounded(name, MAX_BLOCK_NAME_LEN)?;
        }
        Ok(())
    }

    fn aux(&self) -> VarInt {
        let meta = match self.0.meta {
            ItemStack::WILDCARD_META => WILDCARD_AUX_META,
            meta => i32::from(meta),
        };
        VarInt((meta << 8) | i32::from(self.0.count))
    }
}

impl Codec<Self> for NetworkItemStack<'_> {
    const MAX_SIZE: NonZeroUsize = NonZeroUsize::new(
        12 + u16::MAX as usize + 2 * (5 + MAX_BLOCK_NAMES * (2 + MAX_BLOCK_NAME_LEN)),
    )
    .unwrap();

    fn written_size(&self) -> usize {
        if self.0.is_empty() {
            return 1;
        }
        let names = |names: &[String]| {
            VarInt(names.len() as i32).written_size()
                + names
                    .iter()
                    .map(|name| {
                        super::var_uint::VarUInt(name.len() as u32).written_size() + name.len()
                    })
                    .sum::<usize>()
        };
        VarInt(self.0.id).written_size()
            + self.aux().written_size()
            + 2
            + self.0.nbt.len()
            + names(&self.0.can_place_on)
            + names(&self.0.can_destroy)
    }

    fn encode(&self, write: &mut impl Write) -> Result<(), WritingError> {
        if self.0.is_empty() {
            return write.write_var_int(&VarInt(ItemStack::AIR_ID));
        }
        write.write_var_int(&VarInt(self.0.id))?;
        write.write_var_int(&self.aux())?;

        let nbt_len = u16::try_from(self.0.nbt.len())
            .map_err(|_| WritingError::Message("item nbt longer than u16::MAX".to_string()))?;
        write.write_u16_le(nbt_len)?;
        write.write_slice(&self.0.nbt)?;

        Self::write_block_names(write, &self.0.can_place_on)?;
        Self::write_block_names(write, &self.0.can_destroy)
    }

    fn decode(read: &mut impl Read) -> Result<Self, ReadingError> {
        let id = read.get_var_int()?.0;
        if id == ItemStack::AIR_ID {
            return Ok(NetworkItemStack(Cow::Owned(ItemStack::EMPTY)));
        }

        let aux = read.get_var_int()?.0;
        let count = (aux & 0xff) as u8;
        let meta = match aux >> 8 {
            WILDCARD_AUX_META => ItemStack::WILDCARD_META,
            meta => i16::try_from(meta)
                .map_err(|_| ReadingError::Message(format!("item meta {meta} out of range")))?,
        };

        let nbt_len = read.get_u16_le()?;
        let nbt = read.read_boxed_slice(nbt_len as usize)?.into_vec();

        let can_place_on = Self::read_block_names(read)?;
        let can_destroy = Self::read_block_names(read)?;

        Ok(NetworkItemStack(Cow::Owned(ItemStack {
            id,
            meta,
            count,
            nbt,
            can_place_on,
            can_destroy,
        })))
    }
}
