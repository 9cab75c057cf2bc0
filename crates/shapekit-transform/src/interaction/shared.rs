//! Re-entrancy guarded handle to an interaction.
//!
//! Pointer dispatch in a UI toolkit can synchronously re-enter a callback, for
//! example when an event handler updates the cursor and the toolkit replays a
//! motion event. A nested call on a `SharedInteraction` finds the interaction
//! already borrowed and is dropped.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use tracing::trace;

use super::TransformInteraction;
use crate::pointer::{CursorHint, PointerEvent};
use crate::scene::TransformHost;

#[derive(Debug, Clone)]
pub struct SharedInteraction(Rc<RefCell<TransformInteraction>>);

impl SharedInteraction {
    pub fn new(interaction: TransformInteraction) -> Self {
        Self(Rc::new(RefCell::new(interaction)))
    }

    /// Dispatches `event`, or returns `None` if a callback is already running.
    pub fn dispatch<H: TransformHost + ?Sized>(
        &self,
        host: &mut H,
        event: PointerEvent,
    ) -> Option<CursorHint> {
        match self.0.try_borrow_mut() {
            Ok(mut interaction) => Some(interaction.dispatch(host, event)),
            Err(_) => {
                trace!("Ignoring re-entrant {:?} pointer callback", event.kind);
                None
            }
        }
    }

    /// Runs `f` with exclusive access, or returns `None` if a callback is
    /// already running.
    pub fn with<R>(&self, f: impl FnOnce(&mut TransformInteraction) -> R) -> Option<R> {
        match self.0.try_borrow_mut() {
            Ok(mut interaction) => Some(f(&mut interaction)),
            Err(_) => {
                trace!("Ignoring re-entrant interaction access");
                None
            }
        }
    }

    /// Shared read access, or `None` while a callback holds the interaction.
    pub fn borrow(&self) -> Option<Ref<'_, TransformInteraction>> {
        self.0.try_borrow().ok()
    }

    /// A non-owning handle, for event handlers that need to reach back.
    pub fn downgrade(&self) -> WeakInteraction {
        WeakInteraction(Rc::downgrade(&self.0))
    }
}

#[derive(Debug, Clone)]
pub struct WeakInteraction(Weak<RefCell<TransformInteraction>>);

impl WeakInteraction {
    pub fn upgrade(&self) -> Option<SharedInteraction> {
        self.0.upgrade().map(SharedInteraction)
    }
}
