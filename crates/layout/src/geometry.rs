/// A rectangle in CSS px units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Zero-width rectangle on the left or right edge, the shape of a caret.
    pub fn collapse(self, to_right: bool) -> Self {
        Self {
            x: if to_right { self.right() } else { self.left() },
            width: 0.0,
            ..self
        }
    }

    pub fn union(self, other: Rectangle) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;

    #[test]
    fn collapse_keeps_vertical_extent() {
        let r = Rectangle {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 15.0,
        };
        let right = r.collapse(true);
        assert_eq!((right.x, right.y, right.width, right.height), (40.0, 20.0, 0.0, 15.0));
        assert_eq!(r.collapse(false).x, 10.0);
    }

    #[test]
    fn union_covers_both() {
        let a = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let b = Rectangle {
            x: 20.0,
            y: 5.0,
            width: 5.0,
            height: 20.0,
        };
        assert_eq!(
            a.union(b),
            Rectangle {
                x: 0.0,
                y: 0.0,
                width: 25.0,
                height: 25.0
            }
        );
    }
}
