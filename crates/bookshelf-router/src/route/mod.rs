/// Route module
///
/// Pattern parsing and matching for route table entries.
pub mod pattern;

pub use pattern::{classify_segment, Pattern, Segment};
