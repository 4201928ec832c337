//! The drag controller for a single canvas item.
//!
//! `DragController` is the host-facing handle. The state it shares with the
//! pointer listeners lives in `DragCore`; listeners hold only a weak
//! reference to it, so dropping the handle tears the drag down and releases
//! every registration.
//!
//! The press, move and release handlers are implemented in the `input`
//! module.

use crate::error::DragResult;
use crate::input::{DragState, PointerEvents, PressOutcome};
use crate::perf::{OperationStats, measure};
use crate::settings::DragSettings;
use crate::types::{ItemGeometry, Point, PointerEvent, PositionInfo, Size};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Host callback receiving every position update.
///
/// `committed` is `false` for interim updates during a drag and `true` for
/// the final update on release.
pub type UpdatePositionFn = Rc<dyn Fn(&PositionInfo, bool)>;

/// Press handler the host wires onto the draggable element.
pub type PressHandler = Rc<dyn Fn(&PointerEvent)>;

/// Listener registrations held for the lifetime of one drag.
pub(crate) struct DragListeners {
    pub(crate) _on_move: crate::input::ListenerGuard,
    pub(crate) _on_up: crate::input::ListenerGuard,
}

/// Shared controller state. Only ever borrowed for short, non-reentrant
/// sections; no borrow is held while the host callback runs.
pub(crate) struct DragCore {
    pub(crate) id: String,
    pub(crate) geometry: Cell<ItemGeometry>,
    pub(crate) update_position: UpdatePositionFn,
    pub(crate) events: PointerEvents,
    pub(crate) settings: Cell<DragSettings>,
    pub(crate) state: RefCell<DragState>,
    pub(crate) listeners: RefCell<Option<DragListeners>>,
    pub(crate) callback_stats: RefCell<OperationStats>,
}

impl DragCore {
    /// Hand an update to the host, timing the callback.
    pub(crate) fn notify(&self, info: &PositionInfo, committed: bool) {
        let ((), elapsed_ms) = measure(|| (self.update_position)(info, committed));
        self.callback_stats.borrow_mut().record(elapsed_ms);

        let threshold_ms = self.settings.get().slow_callback_ms;
        if elapsed_ms > threshold_ms {
            tracing::warn!(
                id = %self.id,
                committed,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", threshold_ms),
                "Slow position update callback"
            );
        }
    }

    /// Drop the listener registrations, if any.
    pub(crate) fn detach_listeners(&self) {
        let listeners = self.listeners.borrow_mut().take();
        drop(listeners);
    }
}

/// Drag-to-reposition controller for one item.
///
/// # Example
/// ```ignore
/// let events = PointerEvents::new();
/// let controller = DragController::new(
///     "card-1",
///     ItemGeometry::new(50.0, 50.0, 40.0, Size::new(800.0, 600.0)),
///     Rc::new(|info, committed| println!("{info:?} {committed}")),
///     &events,
/// );
/// let on_pointer_down = controller.on_pointer_down();
///
/// on_pointer_down(&PointerEvent::new(60.0, 70.0));
/// events.dispatch_move(PointerEvent::new(100.0, 150.0)); // (90, 130), false
/// events.dispatch_up(PointerEvent::new(100.0, 150.0));   // (90, 130), true
/// ```
pub struct DragController {
    core: Rc<DragCore>,
}

impl DragController {
    pub fn new(
        id: impl Into<String>,
        geometry: ItemGeometry,
        update_position: UpdatePositionFn,
        events: &PointerEvents,
    ) -> Self {
        Self {
            core: Rc::new(DragCore {
                id: id.into(),
                geometry: Cell::new(geometry),
                update_position,
                events: events.clone(),
                settings: Cell::new(DragSettings::default()),
                state: RefCell::new(DragState::Idle),
                listeners: RefCell::new(None),
                callback_stats: RefCell::new(OperationStats::default()),
            }),
        }
    }

    /// Like `new`, but rejects geometry with non-finite or negative values.
    pub fn try_new(
        id: impl Into<String>,
        geometry: ItemGeometry,
        update_position: UpdatePositionFn,
        events: &PointerEvents,
    ) -> DragResult<Self> {
        let geometry = geometry.validate()?;
        Ok(Self::new(id, geometry, update_position, events))
    }

    pub fn with_settings(self, settings: DragSettings) -> Self {
        self.core.settings.set(settings);
        self
    }

    // ------------------------------------------------------------------------
    // Host wiring
    // ------------------------------------------------------------------------

    /// The press handler to attach to the item's pointer-down event.
    ///
    /// The handler does nothing once the controller has been dropped.
    pub fn on_pointer_down(&self) -> PressHandler {
        let core = Rc::downgrade(&self.core);
        Rc::new(move |event: &PointerEvent| {
            if let Some(core) = core.upgrade() {
                core.begin_drag(event);
            }
        })
    }

    /// Start a drag at `event`. See `PressOutcome` for the mid-drag case.
    pub fn begin_drag(&self, event: &PointerEvent) -> PressOutcome {
        self.core.begin_drag(event)
    }

    /// Move the item under the pointer. No-op while idle.
    pub fn drag_move(&self, event: &PointerEvent) {
        self.core.drag_move(event);
    }

    /// Finish the drag, committing the last position if the pointer moved.
    /// No-op while idle.
    pub fn end_drag(&self) {
        self.core.end_drag();
    }

    /// Abandon any active drag without committing. Also runs on drop.
    pub fn teardown(&self) {
        self.core.teardown();
    }

    // ------------------------------------------------------------------------
    // Geometry sync
    // ------------------------------------------------------------------------

    // The setters below store what the host hands them unchecked; only
    // `try_new` and `try_sync_geometry` validate.

    pub fn set_item_position(&self, x: f64, y: f64) {
        let mut geometry = self.core.geometry.get();
        geometry.position = Point::new(x, y);
        self.core.geometry.set(geometry);
    }

    pub fn set_total_height(&self, total_height: f64) {
        let mut geometry = self.core.geometry.get();
        geometry.total_height = total_height;
        self.core.geometry.set(geometry);
    }

    pub fn set_canvas_size(&self, canvas_size: Size) {
        let mut geometry = self.core.geometry.get();
        geometry.canvas_size = canvas_size;
        self.core.geometry.set(geometry);
    }

    /// Replace all geometry at once. Not validated.
    pub fn sync_geometry(&self, geometry: ItemGeometry) {
        self.core.geometry.set(geometry);
    }

    /// Replace all geometry at once, keeping the current geometry if the new
    /// one has non-finite or negative values.
    pub fn try_sync_geometry(&self, geometry: ItemGeometry) -> DragResult<()> {
        let geometry = geometry.validate()?;
        self.core.geometry.set(geometry);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.core.id
    }

    pub fn is_dragging(&self) -> bool {
        self.core.state.borrow().is_dragging()
    }

    pub fn anchor_offset(&self) -> Option<Point> {
        self.core.state.borrow().anchor_offset()
    }

    pub fn last_position(&self) -> Option<PositionInfo> {
        self.core.state.borrow().last_position().cloned()
    }

    pub fn geometry(&self) -> ItemGeometry {
        self.core.geometry.get()
    }

    pub fn settings(&self) -> DragSettings {
        self.core.settings.get()
    }

    /// Timing statistics of the host callback.
    pub fn callback_stats(&self) -> OperationStats {
        self.core.callback_stats.borrow().clone()
    }
}

impl Drop for DragController {
    fn drop(&mut self) {
        self.core.teardown();
    }
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("id", &self.core.id)
            .field("geometry", &self.core.geometry.get())
            .field("state", &self.core.state.borrow())
            .finish_non_exhaustive()
    }
}
