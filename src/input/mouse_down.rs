//! Press handling - anchor the drag and start listening for moves and release.

use crate::controller::{DragCore, DragListeners};
use crate::input::coords::CoordinateConverter;
use crate::input::PointerEventKind;
use crate::settings::SecondPressPolicy;
use crate::types::PointerEvent;
use std::rc::Rc;
use tracing::debug;

/// What a press did to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Idle -> Dragging
    Started,
    /// Already dragging; the press was dropped
    Ignored,
    /// Already dragging; the session was replaced with a new anchor
    Restarted,
}

impl DragCore {
    pub(crate) fn begin_drag(self: &Rc<Self>, event: &PointerEvent) -> PressOutcome {
        let item_position = self.geometry.get().position;
        let anchor_offset = CoordinateConverter::anchor_offset(event.position, item_position);

        {
            let mut state = self.state.borrow_mut();
            if state.is_dragging() {
                return match self.settings.get().second_press {
                    SecondPressPolicy::Ignore => {
                        debug!(id = %self.id, "Press ignored, drag already active");
                        PressOutcome::Ignored
                    }
                    SecondPressPolicy::Restart => {
                        let discarded = state.restart(anchor_offset);
                        debug!(
                            id = %self.id,
                            uncommitted = discarded.is_some_and(|s| s.last_position().is_some()),
                            anchor_x = anchor_offset.x,
                            anchor_y = anchor_offset.y,
                            "Drag restarted"
                        );
                        PressOutcome::Restarted
                    }
                };
            }
            state.start(anchor_offset);
        }

        self.attach_listeners();
        debug!(
            id = %self.id,
            anchor_x = anchor_offset.x,
            anchor_y = anchor_offset.y,
            "Drag started"
        );
        PressOutcome::Started
    }

    fn attach_listeners(self: &Rc<Self>) {
        let core = Rc::downgrade(self);
        let on_move = self.events.add_listener(PointerEventKind::Move, move |event| {
            if let Some(core) = core.upgrade() {
                core.drag_move(event);
            }
        });

        let core = Rc::downgrade(self);
        let on_up = self.events.add_listener(PointerEventKind::Up, move |_| {
            if let Some(core) = core.upgrade() {
                core.end_drag();
            }
        });

        *self.listeners.borrow_mut() = Some(DragListeners {
            _on_move: on_move,
            _on_up: on_up,
        });
    }
}
