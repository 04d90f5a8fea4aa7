//! Hit-test dispatch between the surface and handle recognizers
//!
//! The choice is made once, at the pointer-down that opens a gesture, and
//! stays fixed until that gesture ends or is cancelled. Later pointers and
//! moves go wherever the opening pointer went, even if they wander over or
//! off the handle mid-drag.

use super::handle::HandleGesture;
use super::surface::SurfaceGesture;
use super::{PointerEvent, Transition};
use crate::roi::{Corner, Rect, Roi};

/// Which recognizer owns the current gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    Surface,
    Handle,
}

/// Axis-aligned hit/draw box centered on the ROI's rotated bottom-right
/// corner
pub fn handle_bounds(roi: &Roi, size: f32) -> Rect {
    Rect::from_center_size(roi.corner_at(Corner::BottomRight), size, size)
}

/// Routes pointer events to one of the two recognizers per gesture
#[derive(Debug)]
pub struct GestureRouter {
    surface: SurfaceGesture,
    handle: HandleGesture,
    handle_size: f32,
    mode: Option<GestureMode>,
}

impl GestureRouter {
    pub fn new(scale_resistance: f32, handle_size: f32) -> Self {
        Self {
            surface: SurfaceGesture::new(scale_resistance),
            handle: HandleGesture::new(),
            handle_size,
            mode: None,
        }
    }

    /// The mode of the gesture in flight, if any
    pub fn active_mode(&self) -> Option<GestureMode> {
        self.mode
    }

    /// Process one pointer event, dispatching on the mode fixed at the
    /// opening pointer-down.
    pub fn handle_event(&mut self, roi: &mut Roi, event: &PointerEvent) -> Option<Transition> {
        let mode = match self.mode {
            Some(mode) => mode,
            None => match event {
                PointerEvent::Down { at, .. } => {
                    let mode = if handle_bounds(roi, self.handle_size).contains(*at) {
                        GestureMode::Handle
                    } else {
                        GestureMode::Surface
                    };
                    self.mode = Some(mode);
                    mode
                }
                // No gesture in flight: moves, ups and cancels of pointers
                // we never saw go nowhere
                _ => return None,
            },
        };

        let transition = match mode {
            GestureMode::Surface => self.surface.handle_event(roi, event),
            GestureMode::Handle => self.handle.handle_event(roi, event),
        };

        let still_active = match mode {
            GestureMode::Surface => self.surface.is_active(),
            GestureMode::Handle => self.handle.is_active(),
        };
        if !still_active {
            self.mode = None;
        }
        transition
    }
}
