//! Viewport geometry shared by both engines' resize handling.

/// Size of a drawing area in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f32) -> Self {
        // browsers may report 0 while detached
        self.device_pixel_ratio = if dpr > 0.0 { dpr } else { 1.0 };
        self
    }

    /// Backing-store size in device pixels, truncated like `canvas.width = w * dpr`.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = self.device_pixel_ratio;
        (
            (self.width * dpr).max(0.0) as u32,
            (self.height * dpr).max(0.0) as u32,
        )
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Vertical extent of an element relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub top: f32,
    pub bottom: f32,
}

impl ClientRect {
    /// True when any part of the element overlaps a viewport of the given height.
    pub fn intersects_viewport(&self, viewport_height: f32) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}
