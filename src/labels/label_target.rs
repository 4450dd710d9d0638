use std::cell::RefCell;
use std::rc::Rc;

/// Anything carrying a mutable set of string labels, such as the class list
/// of a UI element.
///
/// Implementations must treat labels they do not carry as a no-op on
/// removal. Whether adding an existing label duplicates it is up to the
/// implementation; [`ClassList`](crate::labels::ClassList) does not.
pub trait LabelTarget {
    fn add_label(&mut self, label: &str);
    fn remove_label(&mut self, label: &str);
}

impl<L: LabelTarget + ?Sized> LabelTarget for &mut L {
    fn add_label(&mut self, label: &str) {
        (**self).add_label(label)
    }

    fn remove_label(&mut self, label: &str) {
        (**self).remove_label(label)
    }
}

impl<L: LabelTarget + ?Sized> LabelTarget for Box<L> {
    fn add_label(&mut self, label: &str) {
        (**self).add_label(label)
    }

    fn remove_label(&mut self, label: &str) {
        (**self).remove_label(label)
    }
}

/// Shared targets: the environment keeps one handle, the applicator another.
impl<L: LabelTarget + ?Sized> LabelTarget for Rc<RefCell<L>> {
    fn add_label(&mut self, label: &str) {
        self.borrow_mut().add_label(label)
    }

    fn remove_label(&mut self, label: &str) {
        self.borrow_mut().remove_label(label)
    }
}
