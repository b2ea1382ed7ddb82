use serde::{Deserialize, Serialize};

/// A point in screen space (x grows right, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Move the point to new coordinates
    pub fn set_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Shift the point by (dx, dy)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle in radians from this point towards `other`
    pub fn angle_to(&self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance_to(b)
}

/// Angle in radians from `from` towards `to`
pub fn angle(from: Point, to: Point) -> f32 {
    from.angle_to(to)
}

/// Line segment between (x1, y1) and (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        LineSegment { x1, y1, x2, y2 }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Move the far endpoint, keeping the start in place
    pub fn set_end(&mut self, end: Point) {
        self.x2 = end.x;
        self.y2 = end.y;
    }

    pub fn length(&self) -> f32 {
        self.start().distance_to(self.end())
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The four edges in order: top, right, bottom, left
    pub fn edges(&self) -> [LineSegment; 4] {
        let (left, top, right, bottom) = (self.x, self.y, self.right(), self.bottom());
        [
            LineSegment::new(left, top, right, top),
            LineSegment::new(right, top, right, bottom),
            LineSegment::new(right, bottom, left, bottom),
            LineSegment::new(left, bottom, left, top),
        ]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Circle given by its centre and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Circle { x, y, radius }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
