//! The delegate contract.
//!
//! A delegate is the external controller that observes editing and decides
//! whether each keystroke is accepted. The field holds it weakly: dropping
//! the delegate silently stops notifications, and validation falls back to
//! accepting every change.

use std::fmt;
use std::ops::Range;
use std::rc::{Rc, Weak};

use super::field::FloatingLabelField;

/// Callbacks a field makes into its controller.
///
/// All methods have defaults, so a delegate only implements what it needs.
/// Callbacks take `&self`; use `Cell`/`RefCell` for delegate-side state.
pub trait FieldDelegate {
    /// The field gained focus (or a begin was synthesized).
    fn did_begin_editing(&self, _field: &FloatingLabelField) {}

    /// The field lost focus (or an end was synthesized).
    fn did_end_editing(&self, _field: &FloatingLabelField) {}

    /// Decide whether the graphemes in `range` may be replaced by `replacement`.
    ///
    /// The answer is honored verbatim.
    fn should_change_characters(
        &self,
        _field: &FloatingLabelField,
        _range: Range<usize>,
        _replacement: &str,
    ) -> bool {
        true
    }
}

/// A non-owning reference to a delegate.
#[derive(Clone)]
pub struct DelegateRef(Weak<dyn FieldDelegate>);

impl DelegateRef {
    /// Refer to `delegate` without keeping it alive.
    pub fn new<D: FieldDelegate + 'static>(delegate: &Rc<D>) -> Self {
        let weak: Weak<D> = Rc::downgrade(delegate);
        Self(weak)
    }

    /// The delegate, if it is still alive.
    pub fn upgrade(&self) -> Option<Rc<dyn FieldDelegate>> {
        self.0.upgrade()
    }

    /// Whether the delegate is still alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl<D: FieldDelegate + 'static> From<&Rc<D>> for DelegateRef {
    fn from(delegate: &Rc<D>) -> Self {
        Self::new(delegate)
    }
}

impl fmt::Debug for DelegateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateRef")
            .field("alive", &self.is_alive())
            .finish()
    }
}
