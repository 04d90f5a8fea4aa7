//! Application state
//!
//! Owns the authoritative ROI, the gesture router and the settings, and
//! forwards per-frame pointer events into the router. Gesture start/end are
//! logged to stdout for quick eyeballing during development.

use macroquad::prelude::{screen_height, screen_width};

use crate::config::Settings;
use crate::geometry::Point;
use crate::gesture::{GestureMode, GestureRouter, PointerEvent, Transition};
use crate::roi::{Rect, Roi};

pub struct AppState {
    pub settings: Settings,
    pub roi: Roi,
    router: GestureRouter,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let roi = seed_roi(&settings);
        let router = GestureRouter::new(settings.scale_resistance, settings.handle_size);
        Self { settings, roi, router }
    }

    /// Put the ROI back where it started and drop any gesture in flight
    pub fn reset(&mut self) {
        self.roi = seed_roi(&self.settings);
        self.router =
            GestureRouter::new(self.settings.scale_resistance, self.settings.handle_size);
        println!("ROI reset");
    }

    pub fn active_mode(&self) -> Option<GestureMode> {
        self.router.active_mode()
    }

    /// Feed one frame's worth of pointer events through the router
    pub fn process_events(&mut self, events: &[PointerEvent]) {
        for event in events {
            let transition = self.router.handle_event(&mut self.roi, event);
            if !cfg!(debug_assertions) {
                continue;
            }
            match transition {
                Some(Transition::Started(roi)) => {
                    println!(
                        "Gesture started ({:?}) at {:.0}x{:.0}",
                        self.router.active_mode(),
                        roi.rect.width(),
                        roi.rect.height()
                    );
                }
                Some(Transition::Ended(roi)) => {
                    println!(
                        "Gesture ended at {:.0}x{:.0}, {:.1} deg",
                        roi.rect.width(),
                        roi.rect.height(),
                        roi.rotation_degrees
                    );
                }
                Some(Transition::Changing(_)) | None => {}
            }
        }
    }
}

/// The demo's starting ROI: a settings-sized square centered on screen
fn seed_roi(settings: &Settings) -> Roi {
    let center = Point::new(screen_width() * 0.5, screen_height() * 0.5);
    Roi::new(
        Rect::from_center_size(center, settings.roi_size, settings.roi_size),
        settings.initial_rotation_degrees,
    )
}
