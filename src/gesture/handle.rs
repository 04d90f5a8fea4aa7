//! Handle-mode recognizer: single-pointer scale and rotate about the center
//!
//! Dragging the corner handle resizes the ROI by the ratio of the pointer's
//! distance from the ROI center (before vs after the move) and rotates it by
//! the signed angle swept around that center. The center itself never moves
//! during a handle drag.

use super::{PointerEvent, Transition};
use crate::geometry::{angle_between_degrees, Point};
use crate::roi::{Rect, Roi};

#[derive(Debug, Clone, Copy)]
struct HandleSession {
    id: u64,
    last: Point,
}

/// Gesture state machine for drags that begin on the corner handle
#[derive(Debug, Default)]
pub struct HandleGesture {
    session: Option<HandleSession>,
}

impl HandleGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a handle drag is currently open
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Process one pointer event against the current ROI.
    pub fn handle_event(&mut self, roi: &mut Roi, event: &PointerEvent) -> Option<Transition> {
        match event {
            PointerEvent::Down { id, at } => {
                if self.session.is_some() {
                    // Handle drags are strictly single-pointer; later
                    // contacts are ignored for the whole gesture
                    return None;
                }
                self.session = Some(HandleSession { id: *id, last: *at });
                Some(Transition::Started(*roi))
            }
            PointerEvent::Move { samples } => {
                let session = self.session.as_mut()?;
                let at = samples
                    .iter()
                    .find(|s| s.id == session.id)
                    .map(|s| s.at)?;

                let center = roi.rect.center();
                let old_v = session.last.vector_from(center);
                let new_v = at.vector_from(center);
                let old_len = center.distance_to(session.last);
                let new_len = center.distance_to(at);
                session.last = at;

                // A pointer sitting on the center gives no usable direction
                // or distance; skip the step rather than divide by zero
                if old_v.is_zero() || new_v.is_zero() {
                    return None;
                }

                let factor = new_len / old_len;
                let rect = Rect::from_center_size(
                    center,
                    roi.rect.width() * factor,
                    roi.rect.height() * factor,
                );
                let rotation = roi.rotation_degrees + angle_between_degrees(old_v, new_v);
                *roi = roi.with_rect_and_rotation(rect, rotation);
                Some(Transition::Changing(*roi))
            }
            PointerEvent::Up { id } => {
                let session = self.session.as_ref()?;
                if session.id != *id {
                    return None;
                }
                self.session = None;
                Some(Transition::Ended(*roi))
            }
            PointerEvent::Cancel => {
                self.session = None;
                None
            }
        }
    }
}
