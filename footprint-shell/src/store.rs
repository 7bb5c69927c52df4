use std::cell::RefCell;
use std::rc::Rc;

use crate::filters::Filters;

pub type SubscriptionId = u64;

struct Inner {
    current: Filters,
    version: u64,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Rc<dyn Fn(&Filters)>)>,
}

/// Replace-only store for the page's shared filter selection.
///
/// There is deliberately no `&mut Filters` accessor: every edit goes through
/// [`FilterStore::replace`] with a complete new snapshot, and subscribers are
/// notified synchronously before `replace` returns. Single-threaded by
/// construction, matching the UI event loop.
#[derive(Clone)]
pub struct FilterStore {
    inner: Rc<RefCell<Inner>>,
}

impl FilterStore {
    pub fn new(initial: Filters) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: initial,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> Filters {
        self.inner.borrow().current.clone()
    }

    /// Bumped on every replacement; lets observers cheaply detect change.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Swap in a new snapshot and fan it out to every subscriber. Callbacks
    /// run outside the borrow, so they may read `current()` reentrantly.
    pub fn replace(&self, next: Filters) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            inner.current = next;
            inner.version += 1;
            let callbacks: Vec<Rc<dyn Fn(&Filters)>> = inner
                .subscribers
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect();
            (inner.current.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&Filters) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{DropdownOption, FilterOptions, Filters};

    fn options() -> FilterOptions {
        FilterOptions {
            cloud_providers: vec![DropdownOption::new("AWS", "AWS")],
            accounts: vec![DropdownOption::scoped("a-1", "prod", "AWS")],
            services: vec![DropdownOption::scoped("ec2", "ec2", "AWS")],
        }
    }

    #[test]
    fn replace_fans_out_to_all_subscribers() {
        let opts = options();
        let store = FilterStore::new(Filters::from_options(&opts));

        let seen_a = Rc::new(RefCell::new(Vec::<u32>::new()));
        let seen_b = Rc::new(RefCell::new(Vec::<u32>::new()));
        {
            let seen = Rc::clone(&seen_a);
            store.subscribe(move |f| seen.borrow_mut().push(f.timeframe_months));
        }
        {
            let seen = Rc::clone(&seen_b);
            store.subscribe(move |f| seen.borrow_mut().push(f.timeframe_months));
        }

        store.replace(store.current().with_timeframe(6));

        // Both observers saw the identical replaced value before `replace`
        // returned, and the reader agrees.
        assert_eq!(seen_a.borrow().as_slice(), &[6]);
        assert_eq!(seen_b.borrow().as_slice(), &[6]);
        assert_eq!(store.current().timeframe_months, 6);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn subscriber_can_read_current_during_notify() {
        let opts = options();
        let store = FilterStore::new(Filters::from_options(&opts));
        let observed = Rc::new(RefCell::new(None));
        {
            let store = store.clone();
            let observed = Rc::clone(&observed);
            store.clone().subscribe(move |f| {
                *observed.borrow_mut() = Some(store.current().timeframe_months == f.timeframe_months);
            });
        }
        store.replace(store.current().with_timeframe(3));
        assert_eq!(*observed.borrow(), Some(true));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let opts = options();
        let store = FilterStore::new(Filters::from_options(&opts));
        let count = Rc::new(RefCell::new(0u32));
        let id = {
            let count = Rc::clone(&count);
            store.subscribe(move |_| *count.borrow_mut() += 1)
        };
        store.replace(store.current().with_timeframe(1));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.replace(store.current().with_timeframe(2));
        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.version(), 2);
    }
}
