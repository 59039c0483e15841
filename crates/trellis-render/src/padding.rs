//! Cell and panel padding.

use serde::{Deserialize, Serialize};

/// Space around content, in lines (top/bottom) and columns (left/right).
///
/// Converts from CSS-like shorthands:
///
/// ```rust
/// use trellis_render::Padding;
///
/// assert_eq!(Padding::from(1), Padding::new(1, 1, 1, 1));
/// assert_eq!(Padding::from((0, 2)), Padding::new(0, 2, 0, 2));
/// assert_eq!(Padding::from((1, 2, 3, 4)).horizontal(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Builds padding from a list of one, two or four values.
    ///
    /// Returns `None` for any other length.
    pub fn from_slice(values: &[usize]) -> Option<Self> {
        match *values {
            [all] => Some(Padding::from(all)),
            [vertical, horizontal] => Some(Padding::from((vertical, horizontal))),
            [top, right, bottom, left] => Some(Padding::new(top, right, bottom, left)),
            _ => None,
        }
    }

    /// Left plus right.
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

impl From<usize> for Padding {
    fn from(all: usize) -> Self {
        Padding::new(all, all, all, all)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Padding::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<(usize, usize, usize, usize)> for Padding {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Padding::new(top, right, bottom, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        assert_eq!(Padding::from_slice(&[2]), Some(Padding::from(2)));
        assert_eq!(Padding::from_slice(&[1, 3]), Some(Padding::new(1, 3, 1, 3)));
        assert_eq!(
            Padding::from_slice(&[1, 2, 3, 4]),
            Some(Padding::new(1, 2, 3, 4))
        );
        assert_eq!(Padding::from_slice(&[1, 2, 3]), None);
        assert_eq!(Padding::from_slice(&[]), None);
    }

    #[test]
    fn test_totals() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
    }
}
