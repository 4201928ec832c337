//! Move handling - interim position updates while dragging.
//!
//! Called once per pointer move, so it stays lean: one short borrow of the
//! state, one clone of the update, then the host callback.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::controller::DragCore;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::{PointerEvent, PositionInfo};

impl DragCore {
    pub(crate) fn drag_move(&self, event: &PointerEvent) {
        profile_scope!("drag_move");

        let info = {
            let mut state = self.state.borrow_mut();
            let Some(session) = state.session_mut() else {
                return;
            };

            let geometry = self.geometry.get();
            let info = PositionInfo {
                id: self.id.clone(),
                position: CoordinateConverter::item_position(event.position, session.anchor_offset()),
                total_height: geometry.total_height,
                canvas_size: geometry.canvas_size,
            };
            session.record(info.clone());
            info
        };

        tracing::trace!(id = %self.id, x = info.position.x, y = info.position.y, "Drag move");
        self.notify(&info, false);
    }
}
