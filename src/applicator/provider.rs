/// Supplies a target when none was set on an applicator.
///
/// Stands in for an ambient lookup (such as "the first `body` element of the
/// current document") so it can be injected and replaced in tests.
pub trait DefaultTargetProvider<T> {
    fn default_target(&self) -> Option<T>;
}

impl<T, F> DefaultTargetProvider<T> for F
where
    F: Fn() -> Option<T>,
{
    fn default_target(&self) -> Option<T> {
        self()
    }
}

/// Provider for environments without a default target.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaultTarget;

impl<T> DefaultTargetProvider<T> for NoDefaultTarget {
    fn default_target(&self) -> Option<T> {
        None
    }
}

/// Yields a clone of the first element of a collection, if any.
///
/// With shared handles (e.g. `Rc<RefCell<ClassList>>`) the clone refers to
/// the same element the collection holds.
#[derive(Debug, Clone, Default)]
pub struct FirstOf<T> {
    elements: Vec<T>,
}

impl<T> FirstOf<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> DefaultTargetProvider<T> for FirstOf<T> {
    fn default_target(&self) -> Option<T> {
        self.elements.first().cloned()
    }
}
