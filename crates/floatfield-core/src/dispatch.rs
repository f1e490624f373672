//! UI task queue.
//!
//! Work that changes what is on screen must run on the UI thread. A
//! [`UiQueue`] is owned by the UI thread and drained there, usually once per
//! frame. Any number of [`UiSender`]s can be cloned off it and moved to other
//! threads; posting never blocks and never waits for the work to run.
//!
//! # Example
//!
//! ```
//! use floatfield_core::UiQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Command {
//!     Redraw,
//! }
//!
//! let queue = UiQueue::new();
//! queue.sender().post(Command::Redraw);
//!
//! assert_eq!(queue.pending_count(), 1);
//! assert_eq!(queue.drain(), vec![Command::Redraw]);
//! assert!(!queue.has_pending());
//! ```

use std::thread::{self, ThreadId};

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::logging::targets;

/// The receiving side of the UI task queue.
///
/// The queue remembers the thread it was created on. Draining from any other
/// thread still works but is logged, since it means effects are being applied
/// off the UI thread.
pub struct UiQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
    owner: ThreadId,
}

impl<T> Default for UiQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UiQueue<T> {
    /// Create a queue owned by the current thread.
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            sender,
            receiver,
            owner: thread::current().id(),
        }
    }

    /// Get a posting handle that can be moved to other threads.
    pub fn sender(&self) -> UiSender<T> {
        UiSender {
            sender: self.sender.clone(),
        }
    }

    /// The thread this queue belongs to.
    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    /// Check whether the caller is on the owning thread.
    pub fn is_owner_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Check if there are any pending items.
    pub fn has_pending(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// Get the number of pending items.
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Take every pending item, in posting order.
    pub fn drain(&self) -> Vec<T> {
        if !self.is_owner_thread() {
            tracing::warn!(
                target: targets::DISPATCH,
                "UI queue drained off its owning thread"
            );
        }

        let mut items = Vec::with_capacity(self.receiver.len());
        loop {
            match self.receiver.try_recv() {
                Ok(item) => items.push(item),
                // The queue holds its own sender, so it can never disconnect.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if !items.is_empty() {
            tracing::trace!(target: targets::DISPATCH, count = items.len(), "drained UI queue");
        }
        items
    }
}

/// The posting side of a [`UiQueue`].
///
/// Cheap to clone and `Send` whenever `T` is.
pub struct UiSender<T> {
    sender: Sender<T>,
}

impl<T> Clone for UiSender<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> UiSender<T> {
    /// Post an item to the UI thread.
    ///
    /// Returns `false` if the queue has been dropped, in which case the item
    /// is discarded.
    pub fn post(&self, item: T) -> bool {
        match self.sender.send(item) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(target: targets::DISPATCH, "UI queue gone, dropping posted item");
                false
            }
        }
    }
}

static_assertions::assert_impl_all!(UiSender<u32>: Send, Sync, Clone);
