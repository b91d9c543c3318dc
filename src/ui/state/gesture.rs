// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture tracking for the clip viewport.
//!
//! Mouse drags and touch fingers go through the same [`PointerGesture`]:
//! one active pointer pans, two active pointers pinch. Positions are window
//! coordinates; updates come out normalized to the content rectangle captured
//! when the gesture started.

use crate::domain::video::NormPoint;
use iced::{Point, Rectangle};

/// Source of a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Finger(u64),
}

/// Change produced by a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// Displacement in normalized content units.
    Pan(NormPoint),
    /// Distance ratio between the two fingers and their midpoint.
    Pinch { ratio: f32, focal: NormPoint },
}

/// Fingers closer than this (in pixels) do not produce pinch updates.
const MIN_PINCH_DISTANCE: f32 = 4.0;

#[derive(Debug, Clone, Default)]
pub struct PointerGesture {
    pointers: Vec<(PointerId, Point)>,
    content: Option<Rectangle>,
}

impl PointerGesture {
    /// Registers a new pointer. Returns `false` when it was ignored: the
    /// content area is empty or two pointers are already tracked.
    pub fn start(&mut self, id: PointerId, position: Point, content: Rectangle) -> bool {
        if content.width <= 0.0 || content.height <= 0.0 {
            return false;
        }
        if let Some(entry) = self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            entry.1 = position;
            return true;
        }
        if self.pointers.len() >= 2 {
            return false;
        }
        if self.pointers.is_empty() {
            self.content = Some(content);
        }
        self.pointers.push((id, position));
        true
    }

    /// Moves a tracked pointer.
    pub fn move_to(&mut self, id: PointerId, position: Point) -> Option<GestureUpdate> {
        let content = self.content?;
        let index = self.pointers.iter().position(|(pid, _)| *pid == id)?;
        let previous = self.pointers[index].1;
        self.pointers[index].1 = position;

        match self.pointers.as_slice() {
            [_] => {
                let dx = (position.x - previous.x) / content.width;
                let dy = (position.y - previous.y) / content.height;
                if dx == 0.0 && dy == 0.0 {
                    return None;
                }
                Some(GestureUpdate::Pan(NormPoint::new(dx, dy)))
            }
            [(_, a), (_, b)] => {
                let other = if index == 0 { *b } else { *a };
                let before = other.distance(previous);
                let after = other.distance(position);
                if before < MIN_PINCH_DISTANCE || after < MIN_PINCH_DISTANCE {
                    return None;
                }
                let mid = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                Some(GestureUpdate::Pinch {
                    ratio: after / before,
                    focal: normalize(mid, content),
                })
            }
            _ => None,
        }
    }

    /// Releases a pointer. The remaining finger of a pinch keeps panning.
    pub fn end(&mut self, id: PointerId) {
        self.pointers.retain(|(pid, _)| *pid != id);
        if self.pointers.is_empty() {
            self.content = None;
        }
    }

    pub fn cancel(&mut self) {
        self.pointers.clear();
        self.content = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pointers.len() == 2
    }
}

/// Converts a window position into normalized content coordinates.
#[must_use]
pub fn normalize(position: Point, content: Rectangle) -> NormPoint {
    if content.width <= 0.0 || content.height <= 0.0 {
        return NormPoint::CENTER;
    }
    NormPoint::new(
        ((position.x - content.x) / content.width).clamp(0.0, 1.0),
        ((position.y - content.y) / content.height).clamp(0.0, 1.0),
    )
}
