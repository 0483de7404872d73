#![forbid(unsafe_code)]

//! Values computed from another observable.

use std::rc::Rc;

use super::observable::{Observable, ReadSignal, Subscription};

/// An observable whose value is `f(source)`, recomputed every time the
/// source changes.
///
/// The mapping closure may read other state (live geometry, for instance);
/// call [`Derived::recompute`] when that state changes without the source
/// changing. Dropping the `Derived` detaches it from the source.
pub struct Derived<U> {
    output: Observable<U>,
    refresh: Rc<dyn Fn()>,
    _upstream: Subscription,
}

impl<U: Clone + PartialEq + 'static> Derived<U> {
    /// Derive from `source` through `f`. The initial value is computed
    /// immediately.
    pub fn new<T: Clone + PartialEq + 'static>(
        source: &Observable<T>,
        f: impl Fn(&T) -> U + 'static,
    ) -> Self {
        let f: Rc<dyn Fn(&T) -> U> = Rc::new(f);
        let output = Observable::new(source.with(|v| f(v)));

        let out = output.clone();
        let map = Rc::clone(&f);
        let upstream = source.subscribe(move |v| out.set(map(v)));

        let out = output.clone();
        let src = source.clone();
        let refresh: Rc<dyn Fn()> = Rc::new(move || out.set(src.with(|v| f(v))));

        Self {
            output,
            refresh,
            _upstream: upstream,
        }
    }

    #[must_use]
    pub fn get(&self) -> U {
        self.output.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&U) + 'static) -> Subscription {
        self.output.subscribe(callback)
    }

    /// Re-run the mapping against the current source value.
    pub fn recompute(&self) {
        (self.refresh)();
    }

    /// Read-only handle to the derived value.
    #[must_use]
    pub fn signal(&self) -> ReadSignal<U> {
        self.output.read_only()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.output.version()
    }
}

impl<U: std::fmt::Debug> std::fmt::Debug for Derived<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derived")
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Shorthand for [`Derived::new`].
    pub fn map<U: Clone + PartialEq + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        Derived::new(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn initial_value_computed() {
        let src = Observable::new(10.0_f64);
        let d = src.map(|v| v * 2.0);
        assert!((d.get() - 20.0).abs() < f64::EPSILON);
        assert_eq!(d.version(), 0);
    }

    #[test]
    fn follows_source() {
        let src = Observable::new(1);
        let d = src.map(|v| v + 100);
        src.set(5);
        assert_eq!(d.get(), 105);
        assert_eq!(d.version(), 1);
    }

    #[test]
    fn chained_subscribers_fire() {
        let src = Observable::new(0);
        let d = src.map(|v| v * 10);
        let seen = Rc::new(Cell::new(0));
        let seen_clone = Rc::clone(&seen);
        let _sub = d.subscribe(move |v| seen_clone.set(*v));
        src.set(4);
        assert_eq!(seen.get(), 40);
    }

    #[test]
    fn recompute_reads_external_state() {
        let offset = Rc::new(Cell::new(0));
        let src = Observable::new(1);
        let o = Rc::clone(&offset);
        let d = src.map(move |v| v + o.get());
        offset.set(50);
        assert_eq!(d.get(), 1, "external change alone does not propagate");
        d.recompute();
        assert_eq!(d.get(), 51);
    }

    #[test]
    fn dropping_derived_detaches() {
        let src = Observable::new(0);
        let d = src.map(|v| *v);
        assert_eq!(src.subscriber_count(), 1);
        drop(d);
        src.set(1);
        assert_eq!(src.subscriber_count(), 0);
    }

    #[test]
    fn unchanged_output_does_not_bump() {
        let src = Observable::new(1);
        let d = src.map(|v| *v > 0);
        src.set(2);
        assert_eq!(d.version(), 0);
    }
}
