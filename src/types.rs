//! Core value types for the drag controller.
//!
//! These are the plain data structures that flow between the host and the
//! controller: coordinates, canvas bounds, item geometry and the position
//! updates handed to the host callback.

use crate::error::{DragError, DragResult};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A 2D point (or vector) in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height of the hosting canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject sizes the host could never have measured (negative or non-finite).
    pub fn validate(self) -> DragResult<Self> {
        if self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0 {
            Ok(self)
        } else {
            Err(DragError::InvalidGeometry(format!(
                "canvas size {}x{} must be finite and non-negative",
                self.width, self.height
            )))
        }
    }
}

// ============================================================================
// Pointer Input
// ============================================================================

/// A single pointer event in absolute (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

impl From<Point> for PointerEvent {
    fn from(position: Point) -> Self {
        Self { position }
    }
}

// ============================================================================
// Item Geometry & Position Updates
// ============================================================================

/// Host-owned geometry of the draggable item.
///
/// The controller reads these values fresh every time a handler runs, so the
/// host can keep them in sync as its own layout changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    /// Current position of the item on the canvas
    pub position: Point,
    /// Total rendered height of the item
    pub total_height: f64,
    /// Bounds of the canvas hosting the item
    pub canvas_size: Size,
}

impl ItemGeometry {
    pub fn new(x: f64, y: f64, total_height: f64, canvas_size: Size) -> Self {
        Self {
            position: Point::new(x, y),
            total_height,
            canvas_size,
        }
    }

    /// Check that every value is usable for coordinate math.
    pub fn validate(self) -> DragResult<Self> {
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(DragError::InvalidGeometry(format!(
                "item position ({}, {}) must be finite",
                self.position.x, self.position.y
            )));
        }
        if !self.total_height.is_finite() || self.total_height < 0.0 {
            return Err(DragError::InvalidGeometry(format!(
                "total height {} must be finite and non-negative",
                self.total_height
            )));
        }
        self.canvas_size.validate()?;
        Ok(self)
    }
}

/// A position update handed to the host.
///
/// Serialized as camelCase JSON so hosts can forward it verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInfo {
    /// Identifier of the dragged item
    pub id: String,
    /// Candidate new position of the item
    pub position: Point,
    /// Item height, passed through from the host
    pub total_height: f64,
    /// Canvas bounds, passed through from the host
    pub canvas_size: Size,
}

impl PositionInfo {
    pub fn to_json(&self) -> DragResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> DragResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
