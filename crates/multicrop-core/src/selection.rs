//! Drag-to-select rectangle tracking.
//!
//! The tracker turns a press/move/release gesture into a crop rectangle in
//! image pixel space. It never draws anything: a front end forwards pointer
//! events through [`PointerHandler`] and reads [`SelectionTracker::selection`]
//! to render the live preview.

use crate::geometry::{CropRect, Point, SelectionRect};
use serde::{Deserialize, Serialize};

/// Pointer events a front end forwards into the core.
pub trait PointerHandler {
    /// Primary button went down at `pointer`.
    fn on_press(&mut self, pointer: Point);
    /// Pointer moved to `pointer`.
    fn on_move(&mut self, pointer: Point);
    /// Primary button went up at `pointer`.
    fn on_release(&mut self, pointer: Point);
}

/// State of the primary pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Up,
    Down,
}

/// Transient state of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    pub button: ButtonState,
    pub anchor: Option<Point>,
    pub pointer: Point,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.button == ButtonState::Down && self.anchor.is_some()
    }
}

/// Tracks a single rectangle selection on the reference image.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    drag: DragState,
    pending: Option<SelectionRect>,
    bounds: Option<(u32, u32)>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image dimensions that pointer coordinates are clamped to.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.bounds = Some((width, height));
    }

    pub fn bounds(&self) -> Option<(u32, u32)> {
        self.bounds
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The latest candidate rectangle, for live preview.
    pub fn selection(&self) -> Option<SelectionRect> {
        self.pending
    }

    pub fn has_selection(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending selection, normalized into `(left, top, right, bottom)`.
    ///
    /// Returns `None` when nothing has been dragged since the last commit.
    pub fn commit(&mut self) -> Option<CropRect> {
        let rect = self.pending.take()?.normalize();
        log::debug!("selection committed: {}", rect);
        Some(rect)
    }

    /// Drop the gesture and any pending selection.
    pub fn reset(&mut self) {
        self.drag = DragState::default();
        self.pending = None;
    }

    fn clamp(&self, pointer: Point) -> Point {
        match self.bounds {
            Some((width, height)) => pointer.clamp_to(width, height),
            None => pointer.clamp_non_negative(),
        }
    }

    fn update_candidate(&mut self, pointer: Point) {
        if !self.drag.is_dragging() {
            return;
        }
        if let Some(anchor) = self.drag.anchor {
            self.pending = Some(SelectionRect::from_corners(anchor, pointer));
        }
    }
}

impl PointerHandler for SelectionTracker {
    fn on_press(&mut self, pointer: Point) {
        let pointer = self.clamp(pointer);
        self.drag = DragState {
            button: ButtonState::Down,
            anchor: Some(pointer),
            pointer,
        };
        // A new gesture replaces whatever was drawn before
        self.pending = None;
    }

    fn on_move(&mut self, pointer: Point) {
        let pointer = self.clamp(pointer);
        self.drag.pointer = pointer;
        self.update_candidate(pointer);
    }

    fn on_release(&mut self, pointer: Point) {
        let pointer = self.clamp(pointer);
        self.drag.pointer = pointer;
        self.update_candidate(pointer);
        self.drag.button = ButtonState::Up;
        self.drag.anchor = None;
    }
}
