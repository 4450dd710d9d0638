mod classifier;
mod convention;
mod location;
mod season;

pub use classifier::{classify, classify_month, month_of};
pub use convention::*;
pub use location::{INDIA, Location, NORTHERN, SOUTHERN};
pub use season::Season;
