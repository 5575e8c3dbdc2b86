use std::io::Write;

use ember_macros::packet;

use crate::{
    ClientPacket,
    packet::clientbound::DISCONNECT,
    ser::{NetworkWriteExt, WritingError},
};

#[packet(DISCONNECT)]
pub struct CDisconnect<'a> {
    hide_disconnect_screen: bool,
    message: &'a str,
}

impl<'a> CDisconnect<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            hide_disconnect_screen: false,
            message,
        }
    }
}

impl ClientPacket for CDisconnect<'_> {
    fn write_packet_data(&self, write: impl Write) -> Result<(), WritingError> {
        let mut write = write;
        write.write_bool(self.hide_disconnect_screen)?;
        // The message is left out entirely when the screen is hidden
        if !self.hide_disconnect_screen {
            write.write_string(self.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn carries_the_reason() {
        let bytes = CDisconnect::new("bye").to_bytes().unwrap();
        assert_eq!(&bytes[..], [0x05, 0x00, 0x03, b'b', b'y', b'e']);
    }
}
