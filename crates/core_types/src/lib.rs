//! Direction types shared by the caret and navigation crates.

/// Horizontal travel direction. The discriminant is the walk step sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HDirection {
    Backwards = -1,
    Forwards = 1,
}

impl HDirection {
    #[inline]
    pub fn from_forward(forward: bool) -> Self {
        if forward {
            HDirection::Forwards
        } else {
            HDirection::Backwards
        }
    }

    #[inline]
    pub fn is_forwards(self) -> bool {
        self == HDirection::Forwards
    }

    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            HDirection::Backwards => HDirection::Forwards,
            HDirection::Forwards => HDirection::Backwards,
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        self as i32
    }
}

/// Vertical travel direction, in visual line order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VDirection {
    Up = -1,
    Down = 1,
}

impl VDirection {
    #[inline]
    pub fn from_down(down: bool) -> Self {
        if down { VDirection::Down } else { VDirection::Up }
    }

    #[inline]
    pub fn is_down(self) -> bool {
        self == VDirection::Down
    }

    /// Walking down visits content in document order.
    #[inline]
    pub fn to_horizontal(self) -> HDirection {
        match self {
            VDirection::Up => HDirection::Backwards,
            VDirection::Down => HDirection::Forwards,
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        self as i32
    }
}
