mod dates;

pub use dates::{date, mid_month};
