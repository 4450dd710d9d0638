use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::labels::LabelTarget;

/// Ordered, duplicate-free set of labels, modelled after a DOM class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    labels: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `label` unless it is already present.
    pub fn add(&mut self, label: &str) {
        if !self.contains(label) {
            self.labels.push(label.to_string());
        }
    }

    /// Removes `label` if present.
    pub fn remove(&mut self, label: &str) {
        self.labels.retain(|l| l != label);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl LabelTarget for ClassList {
    fn add_label(&mut self, label: &str) {
        self.add(label)
    }

    fn remove_label(&mut self, label: &str) {
        self.remove(label)
    }
}

/// Renders the list as a `class` attribute value.
impl Display for ClassList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels.join(" "))
    }
}

impl FromStr for ClassList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut list = ClassList::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        Ok(list)
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for label in iter {
            list.add(label);
        }
        list
    }
}
