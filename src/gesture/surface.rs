//! Surface-mode recognizer: pan, pinch and twist
//!
//! Owns the per-drag session (which pointer ids are tracked and where they
//! last were) and threads the ROI through as an explicit value - the caller
//! owns the authoritative ROI and hands it in mutably per event.
//!
//! A two-pointer move applies translation (centroid delta), rotation
//! (subtended-angle delta) and scale (dampened pinch ratio) in one pass, so
//! every input event produces at most one `Changing` emission and observers
//! never see a half-applied update.

use super::track::PointerTrack;
use super::{PointerEvent, Transition, DEFAULT_SCALE_RESISTANCE};
use crate::geometry::{wrap_degrees, Point};
use crate::roi::{Rect, Roi};

/// Per-drag session state, alive between first down and last up/cancel
#[derive(Debug, Clone)]
struct Session {
    active_id: u64,
    extra_id: Option<u64>,
    track: PointerTrack,
}

/// Gesture state machine for pointers landing on the open surface
#[derive(Debug)]
pub struct SurfaceGesture {
    scale_resistance: f32,
    session: Option<Session>,
}

impl SurfaceGesture {
    pub fn new(scale_resistance: f32) -> Self {
        Self { scale_resistance, session: None }
    }

    /// Whether a drag session is currently open
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Process one pointer event against the current ROI.
    ///
    /// Unknown pointer ids and out-of-place lifecycle events degrade to
    /// "no visible change": they return `None` without touching state.
    pub fn handle_event(&mut self, roi: &mut Roi, event: &PointerEvent) -> Option<Transition> {
        match event {
            PointerEvent::Down { id, at } => self.on_down(*roi, *id, *at),
            PointerEvent::Move { samples } => self.on_move(roi, samples),
            PointerEvent::Up { id } => self.on_up(*roi, *id),
            PointerEvent::Cancel => {
                // Tear down without a terminal emission; the last committed
                // ROI stands
                self.session = None;
                None
            }
        }
    }

    fn on_down(&mut self, roi: Roi, id: u64, at: Point) -> Option<Transition> {
        match &mut self.session {
            None => {
                self.session = Some(Session {
                    active_id: id,
                    extra_id: None,
                    track: PointerTrack::single(at),
                });
                Some(Transition::Started(roi))
            }
            Some(session) if session.extra_id.is_none() && session.active_id != id => {
                // Second pointer arrives: record its baseline position but
                // emit nothing, so the 1->2 transition can't pop the ROI
                session.extra_id = Some(id);
                session.track = session.track.with_extra(at);
                None
            }
            // A third pointer (or a duplicate down) is ignored
            Some(_) => None,
        }
    }

    fn on_move(
        &mut self,
        roi: &mut Roi,
        samples: &[super::PointerSample],
    ) -> Option<Transition> {
        let session = self.session.as_mut()?;

        let mut active = session.track.active;
        let mut extra = session.track.extra;
        let mut touched = false;
        for sample in samples {
            if sample.id == session.active_id {
                active = sample.at;
                touched = true;
            } else if session.extra_id == Some(sample.id) {
                extra = Some(sample.at);
                touched = true;
            }
        }
        if !touched {
            return None;
        }

        if let (Some(extra), Some(_)) = (extra, session.extra_id) {
            let new_track = PointerTrack::pair(active, extra);
            let old_track = session.track;

            let old_centroid = old_track.centroid();
            let new_centroid = new_track.centroid();
            let mut rect = roi
                .rect
                .offset(new_centroid.x - old_centroid.x, new_centroid.y - old_centroid.y);

            // Rotation and scale both need a usable baseline on both sides;
            // coincident pointers contribute no change for this step
            let mut rotation = roi.rotation_degrees;
            if let (Some(old_v), Some(new_v)) = (old_track.baseline(), new_track.baseline()) {
                if !old_v.is_zero() && !new_v.is_zero() {
                    rotation += wrap_degrees(
                        new_track.subtended_angle_degrees() - old_track.subtended_angle_degrees(),
                    );

                    let factor =
                        (new_track.span() / old_track.span() - 1.0) * self.scale_resistance + 1.0;
                    rect = Rect::from_center_size(
                        rect.center(),
                        rect.width() * factor,
                        rect.height() * factor,
                    );
                }
            }

            session.track = new_track;
            *roi = roi.with_rect_and_rotation(rect, rotation);
            Some(Transition::Changing(*roi))
        } else {
            let last = session.track.active;
            let rect = roi.rect.offset(active.x - last.x, active.y - last.y);
            session.track = session.track.with_active(active);
            *roi = roi.with_rect(rect);
            Some(Transition::Changing(*roi))
        }
    }

    fn on_up(&mut self, roi: Roi, id: u64) -> Option<Transition> {
        let session = self.session.as_mut()?;

        if session.extra_id == Some(id) {
            // Secondary lifted: back to single-pointer mode, baseline reset
            session.extra_id = None;
            session.track = PointerTrack::single(session.track.active);
            return None;
        }
        if session.active_id != id {
            return None;
        }
        if let (Some(extra_id), Some(extra_at)) = (session.extra_id, session.track.extra) {
            // Active lifted first: promote the survivor and rebase
            session.active_id = extra_id;
            session.extra_id = None;
            session.track = PointerTrack::single(extra_at);
            return None;
        }
        self.session = None;
        Some(Transition::Ended(roi))
    }
}

impl Default for SurfaceGesture {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_RESISTANCE)
    }
}
