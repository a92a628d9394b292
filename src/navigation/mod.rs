//! Navigation - segment/rectangle geometry and obstacle routing.
//!
//! Pure functions only; the player plugin owns the systems that call them.

mod geometry;
mod router;

pub use geometry::{inset_bounds, segment_intersects_rect, segments_intersect};
pub use router::{route, Route};
