use std::cell::RefCell;
use std::rc::Rc;

use crate::labels::{ClassList, LabelTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelCall {
    Add(String),
    Remove(String),
}

/// Label target that logs every call. Clones share the same state, so a
/// test can keep one handle and give another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    labels: Rc<RefCell<ClassList>>,
    calls: Rc<RefCell<Vec<LabelCall>>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the labels of a `class` attribute, e.g. `"page dark"`.
    pub fn with_labels(class_attribute: &str) -> Self {
        let target = Self::new();
        for label in class_attribute.split_whitespace() {
            target.labels.borrow_mut().add(label);
        }
        target
    }

    pub fn labels(&self) -> ClassList {
        self.labels.borrow().clone()
    }

    pub fn calls(&self) -> Vec<LabelCall> {
        self.calls.borrow().clone()
    }
}

impl LabelTarget for RecordingTarget {
    fn add_label(&mut self, label: &str) {
        self.calls.borrow_mut().push(LabelCall::Add(label.to_string()));
        self.labels.borrow_mut().add(label);
    }

    fn remove_label(&mut self, label: &str) {
        self.calls
            .borrow_mut()
            .push(LabelCall::Remove(label.to_string()));
        self.labels.borrow_mut().remove(label);
    }
}
