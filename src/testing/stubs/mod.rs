pub mod counting_producer;
pub mod recording_target;

pub use counting_producer::CountingProducer;
pub use recording_target::{LabelCall, RecordingTarget};
