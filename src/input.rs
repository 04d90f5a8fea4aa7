//! Input polling
//!
//! Polls macroquad's mouse and touch state once per frame and flattens both
//! into the shared pointer-event vocabulary. The mouse is just another
//! pointer with a reserved id, so the recognizers never know which device a
//! gesture came from.
//!
//! `main` disables macroquad's mouse-from-touch simulation; without that a
//! touch would be reported twice, once as itself and once as the mouse.

use macroquad::prelude::*;

use crate::geometry::Point;
use crate::gesture::{PointerEvent, PointerSample};

/// Pointer id reserved for the mouse; real touch ids come from the OS
pub const MOUSE_POINTER_ID: u64 = u64::MAX;

/// Per-frame pointer event source
pub struct PointerAdapter {
    mouse_last: Option<Point>,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self { mouse_last: None }
    }

    /// Drain this frame's pointer activity as ordered events: downs first,
    /// then one batched move, then ups, then any cancel.
    pub fn poll(&mut self) -> Vec<PointerEvent> {
        let mut downs = Vec::new();
        let mut moved = Vec::new();
        let mut ups = Vec::new();
        let mut cancelled = false;

        for touch in touches() {
            let at = Point::new(touch.position.x, touch.position.y);
            match touch.phase {
                TouchPhase::Started => downs.push(PointerEvent::Down { id: touch.id, at }),
                TouchPhase::Moved => moved.push(PointerSample { id: touch.id, at }),
                TouchPhase::Stationary => {}
                TouchPhase::Ended => ups.push(PointerEvent::Up { id: touch.id }),
                TouchPhase::Cancelled => cancelled = true,
            }
        }

        let (mx, my) = mouse_position();
        let at = Point::new(mx, my);
        if is_mouse_button_pressed(MouseButton::Left) {
            downs.push(PointerEvent::Down { id: MOUSE_POINTER_ID, at });
            self.mouse_last = Some(at);
        } else if is_mouse_button_down(MouseButton::Left) && self.mouse_last != Some(at) {
            moved.push(PointerSample { id: MOUSE_POINTER_ID, at });
            self.mouse_last = Some(at);
        }
        if is_mouse_button_released(MouseButton::Left) {
            ups.push(PointerEvent::Up { id: MOUSE_POINTER_ID });
            self.mouse_last = None;
        }

        let mut events = downs;
        if !moved.is_empty() {
            events.push(PointerEvent::Move { samples: moved });
        }
        events.extend(ups);
        if cancelled {
            events.push(PointerEvent::Cancel);
        }
        events
    }
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new()
    }
}
