//! Coordinate conversion for drag operations.
//!
//! Both directions of the anchor math live here so the press and move
//! handlers cannot drift apart.

use crate::types::Point;

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Vector from the item's position to the pointer at press time.
    #[inline]
    pub fn anchor_offset(pointer: Point, item_position: Point) -> Point {
        pointer - item_position
    }

    /// Item position that keeps the pointer at the same spot on the item.
    #[inline]
    pub fn item_position(pointer: Point, anchor_offset: Point) -> Point {
        pointer - anchor_offset
    }
}
