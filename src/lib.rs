//! Pointer-driven drag-to-reposition controller for items on a 2D canvas.
//!
//! A `DragController` turns a press on an item followed by pointer moves and
//! a release into a stream of position updates for the host:
//!
//! - every move yields an interim update (`committed = false`)
//! - the release yields one committed update with the last interim position,
//!   provided the pointer moved at all
//!
//! Moves and releases come from a shared `PointerEvents` source. A controller
//! only listens on it while its own drag is active.
//!
//! Rendering, layout and what the host does with an update are outside this
//! crate; they meet it through `UpdatePositionFn` and `ItemGeometry`.

pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod types;

pub use controller::{DragController, PressHandler, UpdatePositionFn};
pub use error::{DragError, DragResult};
pub use input::{DragSession, DragState, ListenerGuard, PointerEventKind, PointerEvents, PressOutcome};
pub use settings::{DragSettings, SecondPressPolicy};
pub use types::{ItemGeometry, Point, PointerEvent, PositionInfo, Size};
