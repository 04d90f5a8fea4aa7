//! Gesture interpretation
//!
//! Turns a stream of pointer lifecycle events into a sequence of consistent
//! ROI states. Two recognizers share one event vocabulary:
//! - `SurfaceGesture`: one-finger pan, two-finger pinch/twist (translation,
//!   rotation and scale computed together in a single pass per move)
//! - `HandleGesture`: single-pointer scale+rotate about the ROI center,
//!   driven from the corner handle
//!
//! `GestureRouter` decides between them at pointer-down via handle
//! hit-testing and keeps the choice fixed for the whole gesture.
//!
//! Everything here is synchronous and single-threaded: each event is
//! processed to completion, and at most one transition comes out of it.

mod handle;
mod router;
mod surface;
mod track;

pub use handle::HandleGesture;
pub use router::{handle_bounds, GestureMode, GestureRouter};
pub use surface::SurfaceGesture;
pub use track::PointerTrack;

use crate::geometry::Point;
use crate::roi::Roi;

/// Dampening applied to the raw pinch ratio before it scales the ROI
pub const DEFAULT_SCALE_RESISTANCE: f32 = 0.8;

/// One pointer position sample, tagged with its stable pointer id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: u64,
    pub at: Point,
}

/// A pointer lifecycle event in surface coordinates.
///
/// `Down` while a session is already active means a secondary pointer
/// arrived; `Up` of a non-final pointer means one of two pointers lifted.
/// The recognizers infer this from their session state, so the adapter
/// never has to distinguish primary from secondary contacts.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down { id: u64, at: Point },
    /// One or more simultaneous position updates (touch moves are batched)
    Move { samples: Vec<PointerSample> },
    Up { id: u64 },
    Cancel,
}

/// A gesture transition carrying an immutable ROI snapshot.
///
/// Per gesture, `Started` is emitted exactly once before any `Changing`,
/// and `Ended` at most once - only on pointer-up, never on cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Started(Roi),
    Changing(Roi),
    Ended(Roi),
}
