// Axis-aligned rectangles in integer world coordinates.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Collider handed out by entities that can no longer be hit.
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Half-open overlap test: rectangles that only share an edge do not collide.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.bottom() > b.top() && a.top() < b.bottom() && a.right() > b.left() && a.left() < b.right()
}
