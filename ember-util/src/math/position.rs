use std::fmt;

use super::{get_section_cord, vector2::Vector2, vector3::Vector3};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// Aka Block Position
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The coordinate of the chunk column this block lives in.
    pub fn chunk_coordinate(&self) -> Vector2<i32> {
        Vector2::new(get_section_cord(self.0.x), get_section_cord(self.0.z))
    }

    /// The centre of the block, used as the origin of block sounds.
    pub fn to_centered_f32(&self) -> Vector3<f32> {
        Vector3::new(self.0.x as f32, self.0.y as f32, self.0.z as f32)
            + Vector3::new(0.5, 0.5, 0.5)
    }

    pub fn floored(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(
            x.floor() as i32,
            y.floor() as i32,
            z.floor() as i32,
        ))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
