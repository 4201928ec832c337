//! Release handling - commit the last position and leave Dragging.
//!
//! Both ways out of Dragging live here. `end_drag` is the normal release path;
//! `teardown` is the forced one used when the host goes away mid-drag. Both
//! drop the listener registrations before anything else runs.

use crate::controller::DragCore;
use tracing::debug;

impl DragCore {
    pub(crate) fn end_drag(&self) {
        let Some(session) = self.state.borrow_mut().take_session() else {
            return;
        };
        // Detach before calling the host: the commit callback may start a new
        // drag, and its fresh registrations must survive.
        self.detach_listeners();

        match session.into_last_position() {
            Some(info) => {
                debug!(id = %self.id, x = info.position.x, y = info.position.y, "Drag committed");
                self.notify(&info, true);
            }
            None => debug!(id = %self.id, "Drag ended without movement"),
        }
        self.log_callback_stats();
    }

    fn log_callback_stats(&self) {
        let stats = self.callback_stats.borrow();
        if stats.count() == 0 {
            return;
        }
        debug!(
            id = %self.id,
            callbacks = stats.count(),
            avg_ms = format!("{:.2}", stats.average()),
            max_ms = format!("{:.2}", stats.max_ms()),
            "Position callback timings"
        );
    }

    pub(crate) fn teardown(&self) {
        let session = self.state.borrow_mut().take_session();
        self.detach_listeners();

        if let Some(session) = session {
            debug!(
                id = %self.id,
                discarded = session.last_position().is_some(),
                "Drag torn down"
            );
        }
    }
}
