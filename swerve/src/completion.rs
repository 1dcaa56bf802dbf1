//! Completion - fires a callback once every pending property has transitioned

/// Pending property names plus the callback to run when they are all done.
///
/// The list may hold duplicates: one entry per node per property.
pub struct PendingTransitions {
    pending: Vec<String>,
    callback: Option<Box<dyn FnOnce()>>,
}

impl PendingTransitions {
    pub fn new(pending: Vec<String>, callback: impl FnOnce() + 'static) -> Self {
        Self {
            pending,
            callback: Some(Box::new(callback)),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_done(&self) -> bool {
        self.callback.is_none()
    }

    /// Record one finished property. Unknown names are ignored.
    /// Returns true when this call fired the callback.
    pub fn complete(&mut self, property: &str) -> bool {
        if let Some(i) = self.pending.iter().position(|p| p == property) {
            self.pending.remove(i);
        }
        self.fire_if_empty()
    }

    /// Record an event seen by a listener. Events that bubbled up from a
    /// descendant or came from a pseudo-element (`own` false) are ignored.
    pub fn complete_from(&mut self, own: bool, property: &str) -> bool {
        if !own {
            return false;
        }
        self.complete(property)
    }

    /// Run the callback now if nothing is pending
    pub fn fire_if_empty(&mut self) -> bool {
        if !self.pending.is_empty() {
            return false;
        }
        match self.callback.take() {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for PendingTransitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTransitions")
            .field("pending", &self.pending)
            .field("done", &self.is_done())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, move || h.set(h.get() + 1))
    }

    #[test]
    fn fires_after_last_property() {
        let (hits, cb) = counter();
        let mut p = PendingTransitions::new(vec!["transform".into(), "opacity".into()], cb);

        assert!(!p.complete("transform"));
        assert_eq!(hits.get(), 0);
        assert!(p.complete("opacity"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn duplicates_need_one_event_each() {
        let (hits, cb) = counter();
        let mut p = PendingTransitions::new(vec!["transform".into(), "transform".into()], cb);

        p.complete("transform");
        assert_eq!(p.remaining(), 1);
        assert_eq!(hits.get(), 0);
        p.complete("transform");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unrelated_events_do_not_count() {
        let (hits, cb) = counter();
        let mut p = PendingTransitions::new(vec!["-webkit-transform".into()], cb);

        p.complete("color");
        assert_eq!(p.remaining(), 1);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn foreign_events_are_ignored() {
        let (hits, cb) = counter();
        let mut p = PendingTransitions::new(vec!["transform".into(), "transform".into()], cb);

        assert!(!p.complete_from(false, "transform"));
        assert_eq!(p.remaining(), 2);
        p.complete_from(true, "transform");
        assert!(p.complete_from(true, "transform"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn fires_only_once() {
        let (hits, cb) = counter();
        let mut p = PendingTransitions::new(vec!["transform".into()], cb);

        p.complete("transform");
        assert!(!p.complete("transform"));
        assert_eq!(hits.get(), 1);
        assert!(p.is_done());
    }

    #[test]
    fn empty_list_fires_immediately() {
        let (hits, cb) = counter();
        let mut p = PendingTransitions::new(Vec::new(), cb);
        assert!(p.fire_if_empty());
        assert_eq!(hits.get(), 1);
    }
}
