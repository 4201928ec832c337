//! Pointer input handling for a draggable item.
//!
//! ## Architecture
//!
//! The drag lifecycle is an explicit state machine (`DragState`). The anchor
//! offset and last computed position live inside the `Dragging` variant, so a
//! "dragging without an anchor" state cannot be constructed.
//!
//! ```text
//! Idle -> Dragging        (press on the item)
//! Dragging -> Dragging    (pointer move, emits an interim update)
//! Dragging -> Idle        (pointer release, emits the committed update)
//! Dragging -> Idle        (teardown, nothing emitted)
//! ```
//!
//! While dragging, the controller listens on the shared `PointerEvents`
//! source. The registration is held as `ListenerGuard`s, so every exit from
//! `Dragging` releases it.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and session record
//! - `coords` - Anchor and position math
//! - `listeners` - Shared pointer event source and scoped registrations
//! - `mouse_down` - Press handling (drag start)
//! - `drag` - Move handling (interim updates)
//! - `mouse_up` - Release handling (commit) and teardown

pub mod coords;
mod drag;
mod listeners;
mod mouse_down;
mod mouse_up;
mod state;

pub use listeners::{ListenerGuard, ListenerId, PointerEventKind, PointerEvents, PointerListener};
pub use mouse_down::PressOutcome;
pub use state::{DragSession, DragState};
