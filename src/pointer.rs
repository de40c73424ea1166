use glam::Vec2;

/// Last known pointer (mouse or first touch) position in CSS pixels.
///
/// Starts far outside any canvas so nothing reacts before the first move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl PointerState {
    pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    /// Pointer at a mouse event's `clientX` / `clientY`.
    pub fn from_client(x: i32, y: i32) -> Self {
        Self::at(x as f32, y as f32)
    }

    /// Pointer at the first touch of a `touchmove`, `None` for an empty list.
    pub fn from_touches<I>(touches: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        touches
            .into_iter()
            .next()
            .map(|(x, y)| Self::from_client(x, y))
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Self::OFFSCREEN,
        }
    }
}
