//! Observer pattern: a subject broadcasts its state to registered observers.
//!
//! The subject keeps only weak references, so observers live and die on
//! their own. Registration is keyed by handle identity, never by value, and
//! notification follows the order of first registration.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use log::{debug, warn};
use uuid::Uuid;

// ============================================================================
// Observer capability
// ============================================================================

pub trait Observer<S> {
    /// Called once per notification pass; pull whatever is needed from `subject`.
    fn update(&mut self, subject: &Subject<S>);
}

// Closures work as lightweight observers
impl<S, F> Observer<S> for F
where
    F: FnMut(&Subject<S>),
{
    fn update(&mut self, subject: &Subject<S>) {
        self(subject)
    }
}

type WeakObserver<S> = Weak<RefCell<dyn Observer<S>>>;

fn identity<O>(observer: &Rc<RefCell<O>>) -> usize {
    Rc::as_ptr(observer) as *const () as usize
}

// ============================================================================
// Subject
// ============================================================================

pub struct Subject<S> {
    // Keyed by allocation address. A stored Weak keeps the allocation alive,
    // so an address cannot be reused while its entry is present.
    observers: RefCell<IndexMap<usize, WeakObserver<S>>>,
    state: Option<S>,
}

impl<S> Subject<S> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(IndexMap::new()),
            state: None,
        }
    }

    /// Adds `observer` unless this exact handle is already registered.
    ///
    /// Takes `&self` so an observer may register others from inside
    /// [`Observer::update`]; such additions take effect on the next
    /// [`notify`](Self::notify).
    pub fn register<O>(&self, observer: &Rc<RefCell<O>>)
    where
        O: Observer<S> + 'static,
    {
        let key = identity(observer);
        self.prune();
        let mut observers = self.observers.borrow_mut();

        if observers.contains_key(&key) {
            debug!("observer {:#x} already registered", key);
            return;
        }

        let weak: Weak<RefCell<O>> = Rc::downgrade(observer);
        observers.insert(key, weak as WeakObserver<S>);
        debug!(
            "registered observer {:#x} ({} registered)",
            key,
            observers.len()
        );
    }

    /// Removes `observer`, returning whether it was registered.
    pub fn unregister<O>(&self, observer: &Rc<RefCell<O>>) -> bool
    where
        O: Observer<S> + 'static,
    {
        self.prune();
        let key = identity(observer);
        let removed = self.observers.borrow_mut().shift_remove(&key).is_some();
        debug!("unregister observer {:#x}: removed={}", key, removed);
        removed
    }

    /// Delivers the current state to every registered observer, in
    /// registration order.
    ///
    /// The registered set is snapshotted first: observers added or removed
    /// during the pass do not change who is notified in this pass. An
    /// observer whose `update` is already running higher up the stack is
    /// skipped rather than re-entered.
    pub fn notify(&self) {
        self.prune();
        let snapshot: Vec<Rc<RefCell<dyn Observer<S>>>> = self
            .observers
            .borrow()
            .values()
            .filter_map(Weak::upgrade)
            .collect();

        debug!("notifying {} observers", snapshot.len());
        for observer in snapshot {
            match observer.try_borrow_mut() {
                Ok(mut observer) => observer.update(self),
                Err(_) => warn!("observer is already being updated, skipping it"),
            }
        }
    }

    // Drops entries whose observer is gone, releasing their allocations.
    fn prune(&self) {
        self.observers
            .borrow_mut()
            .retain(|_, weak| weak.strong_count() > 0);
    }

    /// Replaces the state. Observers are not told until [`notify`](Self::notify).
    pub fn set_state(&mut self, state: S) {
        self.state = Some(state);
    }

    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Observers dropped by their owners no longer count.
    pub fn number_of_observers(&self) -> usize {
        self.observers
            .borrow()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl<S> Default for Subject<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug> fmt::Debug for Subject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("state", &self.state)
            .field("observers", &self.number_of_observers())
            .finish()
    }
}

// ============================================================================
// Concrete observer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    fn new() -> Self {
        ObserverId(Uuid::new_v4())
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remembers the last state it was notified of.
#[derive(Debug)]
pub struct ConcreteObserver<S> {
    id: ObserverId,
    last_observed_state: Option<S>,
}

impl<S> ConcreteObserver<S> {
    pub fn new() -> Self {
        Self {
            id: ObserverId::new(),
            last_observed_state: None,
        }
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    pub fn last_observed_state(&self) -> Option<&S> {
        self.last_observed_state.as_ref()
    }
}

impl<S> Default for ConcreteObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Display for ConcreteObserver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {}", self.id)
    }
}

impl<S: Clone> Observer<S> for ConcreteObserver<S> {
    fn update(&mut self, subject: &Subject<S>) {
        self.last_observed_state = subject.state().cloned();
    }
}
