mod provider;
mod season_applicator;
mod target_slot;

pub use provider::{DefaultTargetProvider, FirstOf, NoDefaultTarget};
pub use season_applicator::SeasonApplicator;
pub use target_slot::{TargetProducer, TargetSlot};
