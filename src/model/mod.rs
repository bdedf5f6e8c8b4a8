//! Outline model types.
//!
//! These types are what the outline pipeline produces and what the output
//! surfaces serialize. They carry no behavior beyond construction and
//! simple queries.

mod heading;
mod line;
mod outline;

pub use heading::{HeadingCandidate, HeadingLevel};
pub use line::Line;
pub use outline::{OutlineReport, OutlineResult};
