//! Shared observable value cell.
//!
//! This is the reactive primitive the panel engine is built on: a
//! single-threaded, reference-counted container whose value is only ever
//! replaced whole. Replacing the value bumps a version counter and notifies
//! live subscribers in the order they registered, so observers always see
//! transitions in the order they were applied.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Subscriber callbacks are kept alive by the [`Subscription`] guard and
/// held here only weakly, so a dropped guard unsubscribes.
type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared value with whole-value replacement and change notification.
///
/// Cloning an `Observable` clones the *handle*: both handles see the same
/// value, the same version counter, and the same subscribers. Setting a
/// value equal to the current one (by `PartialEq`) is a no-op.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Handle identity: two observables are equal when they share the same
/// inner cell. This lets snapshots of handle maps be compared cheaply when
/// the registry publishes a new mapping.
impl<T> PartialEq for Observable<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Observable<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Creates a cell holding `value`, at version 0, with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replaces the value whole. If the new value differs from the current
    /// one the version is bumped and subscribers are notified; an equal
    /// value leaves both the version and the subscribers untouched.
    ///
    /// The borrow is released before callbacks run, so a subscriber may
    /// call `set` again without panicking.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Registers a change callback, invoked with the new value after every
    /// effective replacement. Dropping the returned [`Subscription`]
    /// unsubscribes it.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        // `Rc<dyn Fn(&T)>` cannot coerce to `Rc<dyn Any>` directly, so the
        // guard boxes the strong Rc instead.
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of effective replacements so far. Useful for dirty-checking
    /// caches against the cell without subscribing.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Live subscriber count (dead entries may linger until the next
    /// notification prunes them).
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        // Collect live callbacks first so no borrow is held while they run.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner.subscribers.iter().filter_map(|w| w.upgrade()).collect()
        };

        if callbacks.is_empty() {
            return;
        }

        let value = self.inner.borrow().value.clone();
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII guard for a subscriber. Dropping it releases the only strong
/// reference to the callback, so the observable's weak entry dies and is
/// pruned on the next notification.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_get_and_set_round_trip() {
        let cell = Observable::new(7u32);
        assert_eq!(cell.get(), 7);
        cell.set(8);
        assert_eq!(cell.get(), 8);
        assert_eq!(cell.version(), 1);
    }

    #[test]
    fn test_equal_set_is_a_no_op() {
        let cell = Observable::new("same".to_string());
        let hits = Rc::new(RefCell::new(0));
        let hits_in_cb = Rc::clone(&hits);
        let _sub = cell.subscribe(move |_| *hits_in_cb.borrow_mut() += 1);

        cell.set("same".to_string());
        assert_eq!(cell.version(), 0);
        assert_eq!(*hits.borrow(), 0);

        cell.set("changed".to_string());
        assert_eq!(cell.version(), 1);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_subscribers_fire_in_registration_order() {
        let cell = Observable::new(0i32);
        let order = Rc::new(RefCell::new(Vec::new()));

        let o1 = Rc::clone(&order);
        let _s1 = cell.subscribe(move |_| o1.borrow_mut().push("first"));
        let o2 = Rc::clone(&order);
        let _s2 = cell.subscribe(move |_| o2.borrow_mut().push("second"));

        cell.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_dropped_subscription_stops_callbacks() {
        let cell = Observable::new(0i32);
        let hits = Rc::new(RefCell::new(0));
        let hits_in_cb = Rc::clone(&hits);
        let sub = cell.subscribe(move |_| *hits_in_cb.borrow_mut() += 1);

        cell.set(1);
        assert_eq!(*hits.borrow(), 1);

        drop(sub);
        cell.set(2);
        assert_eq!(*hits.borrow(), 1);
        // The dead weak entry is pruned by the notification above.
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let a = Observable::new(1u8);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.get(), 2);
        assert_eq!(a, b);
        assert_ne!(a, Observable::new(2u8));
    }

    #[test]
    fn test_callback_sees_new_value() {
        let cell = Observable::new(10i64);
        let seen = Rc::new(RefCell::new(None));
        let seen_in_cb = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| *seen_in_cb.borrow_mut() = Some(*v));

        cell.set(99);
        assert_eq!(*seen.borrow(), Some(99));
    }
}
