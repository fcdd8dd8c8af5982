//! The 17-pocket sector.
//!
//! Centered on the pocket reached by moving the skip distance from the
//! previous number (forward for clockwise, backward for counter-clockwise)
//! and extended eight pockets either side, in wheel order.

use crate::types::Direction;
use crate::wheel;

/// Pockets on each side of the sector center.
pub const SECTOR_HALF_WIDTH: i64 = 8;
/// Pockets covered by one sector bet.
pub const SECTOR_SIZE: u8 = 17;

/// Build the sector for a previous-number position and skip distance.
pub fn build_sector(base_position: usize, skip: u8, direction: Direction) -> Vec<u8> {
    let base = base_position as i64;
    let skip = i64::from(skip);

    (-SECTOR_HALF_WIDTH..=SECTOR_HALF_WIDTH)
        .map(|i| {
            let offset = match direction {
                Direction::Clockwise => skip + i,
                Direction::CounterClockwise => -skip + i,
            };
            wheel::pocket_at(base + offset)
        })
        .collect()
}
