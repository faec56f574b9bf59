//! Vertical relations between caret rectangles.
//!
//! Lines are compared by their top edges: the layout aligns every item on a
//! line to the line top, so two rectangles are on different lines once their
//! tops differ by more than [`LINE_EPSILON`].

use layout::Rectangle;

pub const LINE_EPSILON: f32 = 1.0;

/// `rect` starts on a line above the one `reference` is on.
pub fn is_above(rect: &Rectangle, reference: &Rectangle) -> bool {
    rect.top() < reference.top() - LINE_EPSILON
}

/// `rect` starts on a line below the one `reference` is on.
pub fn is_below(rect: &Rectangle, reference: &Rectangle) -> bool {
    rect.top() > reference.top() + LINE_EPSILON
}

/// Horizontal distance from `x` to the nearer vertical edge of `rect`.
pub fn horizontal_distance(rect: &Rectangle, x: f32) -> f32 {
    (x - rect.left()).abs().min((x - rect.right()).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 10.0,
            height: 20.0,
        }
    }

    #[test]
    fn small_offsets_stay_on_the_same_line() {
        assert!(!is_above(&at(19.5), &at(20.0)));
        assert!(!is_below(&at(20.5), &at(20.0)));
        assert!(is_above(&at(0.0), &at(20.0)));
        assert!(is_below(&at(40.0), &at(20.0)));
    }

    #[test]
    fn distance_uses_nearer_edge() {
        let r = Rectangle {
            x: 10.0,
            y: 0.0,
            width: 30.0,
            height: 20.0,
        };
        assert_eq!(horizontal_distance(&r, 0.0), 10.0);
        assert_eq!(horizontal_distance(&r, 35.0), 5.0);
    }
}
