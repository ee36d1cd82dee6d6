//! Typed observer lists for controller notifications.

use std::cell::Cell;
use std::rc::Rc;

type Callback<A> = Box<dyn FnMut(&A)>;

struct Entry<A> {
    active: Rc<Cell<bool>>,
    callback: Callback<A>,
}

/// Ordered, append-only callbacks for one notification.
///
/// Callbacks run in registration order. A registration stops firing once
/// its [`Subscription`] is disposed.
pub(crate) struct Observers<A> {
    entries: Vec<Entry<A>>,
}

impl<A> Observers<A> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, callback: impl FnMut(&A) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.entries.push(Entry {
            active: Rc::clone(&active),
            callback: Box::new(callback),
        });
        Subscription { active }
    }

    pub(crate) fn emit(&mut self, arg: &A) {
        for entry in &mut self.entries {
            if entry.active.get() {
                (entry.callback)(arg);
            }
        }
        self.entries.retain(|e| e.active.get());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.active.get()).count()
    }
}

impl<A> Default for Observers<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Disposer for one observer registration.
///
/// Dropping a `Subscription` leaves the observer registered; call
/// [`Subscription::dispose`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    /// Remove the registration. Safe to call from inside the callback.
    pub fn dispose(self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn callbacks_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers: Observers<u32> = Observers::new();

        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            observers.subscribe(move |n| log.borrow_mut().push(format!("{tag}{n}")));
        }

        observers.emit(&1);
        assert_eq!(*log.borrow(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn disposed_subscription_stops_firing() {
        let hits = Rc::new(Cell::new(0));
        let mut observers: Observers<()> = Observers::new();

        let h = Rc::clone(&hits);
        let sub = observers.subscribe(move |_| h.set(h.get() + 1));
        let h = Rc::clone(&hits);
        let _keep = observers.subscribe(move |_| h.set(h.get() + 10));

        assert_eq!(observers.len(), 2);
        sub.dispose();
        assert_eq!(observers.len(), 1);

        observers.emit(&());
        assert_eq!(hits.get(), 10);
    }

    #[test]
    fn dropping_subscription_keeps_observer() {
        let hits = Rc::new(Cell::new(0));
        let mut observers: Observers<()> = Observers::new();

        let h = Rc::clone(&hits);
        drop(observers.subscribe(move |_| h.set(h.get() + 1)));

        observers.emit(&());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dispose_from_inside_callback() {
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let mut observers: Observers<()> = Observers::new();

        let h = Rc::clone(&hits);
        let s = Rc::clone(&slot);
        let sub = observers.subscribe(move |_| {
            h.set(h.get() + 1);
            if let Some(sub) = s.borrow_mut().take() {
                sub.dispose();
            }
        });
        *slot.borrow_mut() = Some(sub);

        observers.emit(&());
        observers.emit(&());
        assert_eq!(hits.get(), 1);
        assert_eq!(observers.len(), 0);
    }
}
