pub mod position;
pub mod vector2;
pub mod vector3;

/// Converts a world coordinate to the corresponding chunk coordinate.
pub const fn get_section_cord(coord: i32) -> i32 {
    coord >> 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cord_floors_negative_coordinates() {
        assert_eq!(get_section_cord(0), 0);
        assert_eq!(get_section_cord(15), 0);
        assert_eq!(get_section_cord(16), 1);
        assert_eq!(get_section_cord(-1), -1);
        assert_eq!(get_section_cord(-16), -1);
        assert_eq!(get_section_cord(-17), -2);
    }
}
