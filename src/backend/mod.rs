pub mod countdown;
pub mod duration;

pub use countdown::{Countdown, Remaining};
pub use duration::{DurationError, format_hms, parse_hms};
