//! Width requirements of renderables.

/// The narrowest and widest a renderable can usefully be drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Width below which content must be folded or cropped.
    pub minimum: usize,
    /// Width at which content needs no wrapping.
    pub maximum: usize,
}

impl Measurement {
    pub fn new(minimum: usize, maximum: usize) -> Self {
        Measurement {
            minimum: minimum.min(maximum),
            maximum,
        }
    }

    /// Widens both bounds by `amount` (padding, borders).
    pub fn grow(self, amount: usize) -> Self {
        Measurement::new(self.minimum + amount, self.maximum + amount)
    }

    /// Limits both bounds to `max_width`.
    pub fn clamp_to(self, max_width: usize) -> Self {
        Measurement::new(self.minimum.min(max_width), self.maximum.min(max_width))
    }

    /// Applies optional lower and upper bounds.
    pub fn with_bounds(self, min_width: Option<usize>, max_width: Option<usize>) -> Self {
        let mut m = self;
        if let Some(min) = min_width {
            m = Measurement::new(m.minimum.max(min), m.maximum.max(min));
        }
        if let Some(max) = max_width {
            m = m.clamp_to(max);
        }
        m
    }

    /// Combines two measurements of content stacked vertically.
    pub fn union(self, other: Measurement) -> Self {
        Measurement::new(
            self.minimum.max(other.minimum),
            self.maximum.max(other.maximum),
        )
    }
}
