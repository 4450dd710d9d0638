use std::fmt::{Debug, Formatter};
use std::mem;

use crate::applicator::DefaultTargetProvider;

/// Lazily produces a target. Invoked at most once.
pub type TargetProducer<'a, T> = Box<dyn FnOnce() -> Option<T> + 'a>;

/// Storage for an applicator's target.
///
/// `Unset` and `Producer` are resolved on first use and replaced by either
/// `Direct` or `Missing`, so resolution runs at most once.
pub enum TargetSlot<'a, T> {
    Unset,
    Direct(T),
    Producer(TargetProducer<'a, T>),
    Missing,
}

impl<'a, T> TargetSlot<'a, T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, TargetSlot::Direct(_) | TargetSlot::Missing)
    }

    /// Resolves the slot, consulting `fallback` only if no target was ever
    /// set, and returns the cached target.
    pub fn resolve(&mut self, fallback: &dyn DefaultTargetProvider<T>) -> Option<&mut T> {
        if !self.is_resolved() {
            let resolved = match mem::replace(self, TargetSlot::Missing) {
                TargetSlot::Unset => {
                    log::debug!("no target set, resolving default target");
                    fallback.default_target()
                }
                TargetSlot::Producer(produce) => {
                    log::debug!("resolving target from producer");
                    produce()
                }
                TargetSlot::Direct(target) => Some(target),
                TargetSlot::Missing => None,
            };
            *self = match resolved {
                Some(target) => TargetSlot::Direct(target),
                None => TargetSlot::Missing,
            };
        }

        match self {
            TargetSlot::Direct(target) => Some(target),
            _ => None,
        }
    }
}

impl<'a, T> Default for TargetSlot<'a, T> {
    fn default() -> Self {
        TargetSlot::Unset
    }
}

impl<'a, T: Debug> Debug for TargetSlot<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetSlot::Unset => write!(f, "Unset"),
            TargetSlot::Direct(target) => f.debug_tuple("Direct").field(target).finish(),
            TargetSlot::Producer(_) => write!(f, "Producer(..)"),
            TargetSlot::Missing => write!(f, "Missing"),
        }
    }
}
