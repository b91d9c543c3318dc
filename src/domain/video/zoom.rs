// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan transform of the clip viewport.
//!
//! Coordinates are normalized to the displayed content area: `(0, 0)` is its
//! top-left corner and `(1, 1)` its bottom-right corner, whatever its size in
//! pixels. A content point `p` is displayed at `scale * p + offset`.
//!
//! The offset is kept within `[1 - scale, 0]` on both axes so the magnified
//! frame always covers the whole content area.

use super::newtypes::ZoomScale;

/// A point or displacement in normalized content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormPoint {
    pub x: f32,
    pub y: f32,
}

impl NormPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of the content area.
    pub const CENTER: Self = Self::new(0.5, 0.5);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomTransform {
    scale: ZoomScale,
    offset: NormPoint,
}

impl ZoomTransform {
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// Translation of the magnified frame, each axis in `[1 - scale, 0]`.
    #[must_use]
    pub fn offset(&self) -> NormPoint {
        self.offset
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_min()
    }

    /// Sets the scale so that the content under `focal` stays in place.
    pub fn zoom_to(&mut self, scale: ZoomScale, focal: NormPoint) {
        let old = self.scale.value();
        let new = scale.value();
        // Content point under the focal point before the change.
        let content_x = (focal.x - self.offset.x) / old;
        let content_y = (focal.y - self.offset.y) / old;

        self.scale = scale;
        self.offset = NormPoint::new(focal.x - new * content_x, focal.y - new * content_y);
        self.clamp_offset();
    }

    /// Multiplies the scale by `factor` around `focal`.
    pub fn zoom_by(&mut self, factor: f32, focal: NormPoint) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom_to(ZoomScale::new(self.scale.value() * factor), focal);
    }

    /// Moves the magnified frame by `delta`.
    pub fn pan_by(&mut self, delta: NormPoint) {
        self.offset.x += delta.x;
        self.offset.y += delta.y;
        self.clamp_offset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clamp_offset(&mut self) {
        let min = 1.0 - self.scale.value();
        self.offset.x = clamp_axis(self.offset.x, min);
        self.offset.y = clamp_axis(self.offset.y, min);
    }
}

fn clamp_axis(value: f32, min: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(min, 0.0)
}
