use std::io::Write;

use ember_macros::packet;
use ember_util::math::vector3::Vector3;

use crate::{
    ClientPacket, VarInt,
    packet::clientbound::LEVEL_SOUND_EVENT,
    ser::{NetworkWriteExt, WritingError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LevelSound {
    ChestOpen = 68,
    ChestClosed = 69,
}

#[packet(LEVEL_SOUND_EVENT)]
pub struct CLevelSoundEvent {
    sound: LevelSound,
    position: Vector3<f32>,
    extra_data: i32,
    pitch: i32,
    unknown: bool,
    disable_relative_volume: bool,
}

impl CLevelSoundEvent {
    pub fn new(sound: LevelSound, position: Vector3<f32>) -> Self {
        Self {
            sound,
            position,
            extra_data: -1,
            pitch: 1,
            unknown: false,
            disable_relative_volume: false,
        }
    }
}

impl ClientPacket for CLevelSoundEvent {
    fn write_packet_data(&self, write: impl Write) -> Result<(), WritingError> {
        let mut write = write;
        write.write_u8(self.sound as u8)?;
        write.write_vector3_f32(&self.position)?;
        write.write_var_int(&VarInt(self.extra_data))?;
        write.write_var_int(&VarInt(self.pitch))?;
        write.write_bool(self.unknown)?;
        write.write_bool(self.disable_relative_volume)
    }
}
