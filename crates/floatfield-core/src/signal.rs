//! Change notifications for field state.
//!
//! A field publishes each observable change (editing began, text changed,
//! masking flipped, label moved) as a [`Signal`]. Hosts attach closures with
//! [`Signal::connect`]; every attached closure runs synchronously on the
//! emitting thread, oldest first.
//!
//! ```
//! use floatfield_core::Signal;
//!
//! let secure_changed = Signal::<bool>::new();
//! let id = secure_changed.connect(|secure| println!("masking: {secure}"));
//!
//! secure_changed.emit(true);
//! assert!(secure_changed.disconnect(id));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle for detaching a closure from the [`Signal`] it was attached to.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of closures notified with `&Args` on every [`emit`](Signal::emit).
///
/// The closure list is copied out before any closure runs, so a closure may
/// attach or detach closures on the same signal.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Attach `slot`. Keep the returned id to detach it again.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Detach a closure. Returns `false` if `id` was already detached.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Number of attached closures.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Notify every attached closure with `args`.
    #[tracing::instrument(skip_all, target = "floatfield_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        if snapshot.is_empty() {
            return;
        }
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "notifying");

        for slot in &snapshot {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_slots_in_order() {
        let signal = Signal::<&'static str>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let log = log.clone();
            signal.connect(move |text| log.lock().push(format!("{tag}:{text}")));
        }

        signal.emit("Email");
        assert_eq!(*log.lock(), vec!["first:Email", "second:Email"]);
    }

    #[test]
    fn test_disconnected_slot_is_skipped() {
        let signal = Signal::<bool>::new();
        let flips = Arc::new(Mutex::new(Vec::new()));

        let flips_clone = flips.clone();
        let id = signal.connect(move |&secure| flips_clone.lock().push(secure));

        signal.emit(true);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(false);

        assert_eq!(*flips.lock(), vec![true]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_detaching_itself_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let own_id = Arc::new(Mutex::new(None));

        let signal_clone = signal.clone();
        let own_id_clone = own_id.clone();
        let id = signal.connect(move |_| {
            if let Some(id) = own_id_clone.lock().take() {
                signal_clone.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit(());
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_emit_from_worker_threads() {
        let signal = Arc::new(Signal::<u32>::new());
        let total = Arc::new(Mutex::new(0));

        let total_clone = total.clone();
        signal.connect(move |&n| *total_clone.lock() += n);

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let signal = signal.clone();
                std::thread::spawn(move || signal.emit(i))
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(*total.lock(), 6);
    }
}
