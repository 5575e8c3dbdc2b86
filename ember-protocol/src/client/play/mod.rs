mod block_event;
mod disconnect;
mod level_sound_event;

pub use block_event::*;
pub use disconnect::*;
pub use level_sound_event::*;
