//! Metadata blob emission from analyzed layouts.
//!
//! Linking happens in two passes over immutable analysis results:
//! - relative: prefix sums of run sizes within the bit-range table
//! - absolute: region bases from the counts, then per-entry offsets
//!
//! The emitter writes the regions in a single buffer sized up front.

mod emitter;
mod error;
mod link;


pub use emitter::emit;
pub use error::EmitError;
pub use link::{LinkPlan, PlannedRun, SectionOffsets};
