//! Drag state machine - a single tagged record for the drag lifecycle.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging       (start: anchor fixed for the whole session)
//! Dragging -> Dragging   (record: newest interim position replaces the last)
//! Dragging -> Dragging   (restart: new anchor, previous position discarded)
//! Dragging -> Idle       (take_session: hands the session to the caller)
//! ```

use crate::types::{Point, PositionInfo};

/// Ephemeral state of one press-to-release cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Pointer position at press minus item position at press
    anchor_offset: Point,
    /// Most recent interim update, committed on release
    last_position: Option<PositionInfo>,
}

impl DragSession {
    pub fn new(anchor_offset: Point) -> Self {
        Self {
            anchor_offset,
            last_position: None,
        }
    }

    pub fn anchor_offset(&self) -> Point {
        self.anchor_offset
    }

    pub fn last_position(&self) -> Option<&PositionInfo> {
        self.last_position.as_ref()
    }

    /// Remember the newest interim update.
    pub fn record(&mut self, info: PositionInfo) {
        self.last_position = Some(info);
    }

    /// Consume the session, yielding the position to commit (if any move happened).
    pub fn into_last_position(self) -> Option<PositionInfo> {
        self.last_position
    }
}

/// Drag lifecycle of one controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No pointer is pressed on the item
    #[default]
    Idle,

    /// A press on the item is active
    Dragging(DragSession),
}

impl DragState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Get the anchor offset, if dragging
    pub fn anchor_offset(&self) -> Option<Point> {
        self.session().map(DragSession::anchor_offset)
    }

    /// Get the last recorded position, if dragging and moved
    pub fn last_position(&self) -> Option<&PositionInfo> {
        self.session().and_then(DragSession::last_position)
    }

    /// Enter Dragging with a fresh session.
    pub fn start(&mut self, anchor_offset: Point) {
        *self = Self::Dragging(DragSession::new(anchor_offset));
    }

    /// Replace the running session with a fresh one, returning the old one.
    pub fn restart(&mut self, anchor_offset: Point) -> Option<DragSession> {
        let previous = self.take_session();
        self.start(anchor_offset);
        previous
    }

    /// Leave Dragging, handing back the finished session.
    pub fn take_session(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
