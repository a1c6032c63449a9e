use std::ops::{Add, Mul, Sub};

/// 2D vector over screen space. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Vec2 {
    pub fn rotated(self, degrees: f32) -> Vec2 {
        let r = degrees.to_radians();
        let (sin, cos) = (r.sin(), r.cos());
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// Oriented rectangle: a center point, half extents and a rotation in
/// degrees about the center.
#[derive(Debug, Clone, Copy)]
pub struct Rect2 {
    pub center: Vec2,
    pub half_w: f32,
    pub half_h: f32,
    pub rotation: f32,
}

impl Rect2 {
    pub fn new(center: Vec2, width: f32, height: f32, rotation: f32) -> Rect2 {
        Rect2 {
            center,
            half_w: width / 2.0,
            half_h: height / 2.0,
            rotation,
        }
    }

    /// Corner points in world space, clockwise from top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let local = [
            Vec2 {
                x: -self.half_w,
                y: -self.half_h,
            },
            Vec2 {
                x: self.half_w,
                y: -self.half_h,
            },
            Vec2 {
                x: self.half_w,
                y: self.half_h,
            },
            Vec2 {
                x: -self.half_w,
                y: self.half_h,
            },
        ];
        let mut out = [Vec2::default(); 4];
        for (i, p) in local.iter().enumerate() {
            out[i] = p.rotated(self.rotation) + self.center;
        }
        out
    }

    /// Maps a world-space point into the rectangle's unrotated local frame.
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        (p - self.center).rotated(-self.rotation)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let l = self.to_local(p);
        l.x.abs() <= self.half_w && l.y.abs() <= self.half_h
    }
}

/// Corner-containment overlap test: two boxes touch when either holds a
/// corner or the center of the other. Misses the rare cross overlap where
/// boxes intersect without containing any of each other's corners, which
/// is fine at the movement step sizes objects use.
pub fn rects_overlap(a: &Rect2, b: &Rect2) -> bool {
    if a.contains(b.center) || b.contains(a.center) {
        return true;
    }
    b.corners().iter().any(|p| a.contains(*p)) || a.corners().iter().any(|p| b.contains(*p))
}
