//! Deferred-initialization handle.
//!
//! Reference implementation of the forwarding-placeholder contract consumed
//! by `InstallLazyPlaceholder`: the handle starts `Uninitialized` holding an
//! initializer closure; the first access runs the closure exactly once,
//! stores the produced value, and drops the closure so no further
//! interception can occur. Every later access goes straight to the value.
//!
//! Hosts that need a proxy satisfying a full object interface can build one
//! on top of this handle behind their own dispatch layer.

use std::fmt;

type Initializer<T> = Box<dyn FnOnce() -> T>;

enum State<T> {
    Uninitialized(Option<Initializer<T>>),
    Initialized(T),
}

/// A single-use lazy slot: `Uninitialized(initializer)` until first forced,
/// `Initialized(value)` afterwards.
pub struct LazyHandle<T> {
    state: State<T>,
}

impl<T> LazyHandle<T> {
    /// Create an uninitialized handle with the given initializer.
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            state: State::Uninitialized(Some(Box::new(initializer))),
        }
    }

    /// Create a handle that is already initialized.
    pub fn initialized(value: T) -> Self {
        Self {
            state: State::Initialized(value),
        }
    }

    /// Whether the real value has been produced.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Initialized(_))
    }

    /// Get the value without forcing initialization.
    pub fn get(&self) -> Option<&T> {
        match &self.state {
            State::Initialized(value) => Some(value),
            State::Uninitialized(_) => None,
        }
    }

    /// Get the value, running the initializer on first access.
    ///
    /// The initializer is consumed by the transition, so it runs at most
    /// once per handle.
    ///
    /// # Panics
    ///
    /// Panics if a previous call to `force` panicked inside the
    /// initializer, leaving the handle without a value or an initializer.
    pub fn force(&mut self) -> &T {
        if let State::Uninitialized(slot) = &mut self.state {
            if let Some(initializer) = slot.take() {
                self.state = State::Initialized(initializer());
            }
        }
        match &self.state {
            State::Initialized(value) => value,
            State::Uninitialized(_) => panic!("lazy initializer panicked on a previous access"),
        }
    }

    /// Consume the handle, forcing initialization if necessary.
    pub fn into_inner(mut self) -> T {
        self.force();
        match self.state {
            State::Initialized(value) => value,
            State::Uninitialized(_) => unreachable!(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Uninitialized(_) => f.write_str("LazyHandle(<uninitialized>)"),
            State::Initialized(value) => write!(f, "LazyHandle({value:?})"),
        }
    }
}
