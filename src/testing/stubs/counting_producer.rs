use std::cell::Cell;
use std::rc::Rc;

/// Hands out target producers and providers that count their invocations.
#[derive(Debug, Clone, Default)]
pub struct CountingProducer {
    calls: Rc<Cell<usize>>,
}

impl CountingProducer {
    /// One-shot producer for `SeasonApplicator::set_target_with`.
    pub fn producing<T>(&self, target: Option<T>) -> impl FnOnce() -> Option<T> + use<T> {
        let calls = Rc::clone(&self.calls);
        move || {
            calls.set(calls.get() + 1);
            target
        }
    }

    /// Repeatable provider for `SeasonApplicator::with_default_provider`.
    pub fn provider<T: Clone>(&self, target: Option<T>) -> impl Fn() -> Option<T> + use<T> {
        let calls = Rc::clone(&self.calls);
        move || {
            calls.set(calls.get() + 1);
            target.clone()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}
