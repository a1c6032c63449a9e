//! Raster primitives over the screen buffer. Shapes are sampled per pixel
//! inside their rotated bounding box; lines use Bresenham.

use super::physics::{Rect2, Vec2};
use super::screen::Screen;
use super::{Color, Shape, Sprite};

pub fn draw_sprite(screen: &mut Screen, sprite: &Sprite) {
    let rect = sprite.bounds();
    match sprite.shape {
        Shape::Rect => fill(screen, &rect, sprite.color, |_| true),
        Shape::Ellipse => fill(screen, &rect, sprite.color, |l| {
            let nx = l.x / rect.half_w.max(f32::EPSILON);
            let ny = l.y / rect.half_h.max(f32::EPSILON);
            nx * nx + ny * ny <= 1.0
        }),
        Shape::Triangle => fill(screen, &rect, sprite.color, |l| {
            // isoceles: apex at top center, base along the bottom edge
            if rect.half_h <= f32::EPSILON {
                return false;
            }
            let t = (l.y + rect.half_h) / (2.0 * rect.half_h);
            l.x.abs() <= rect.half_w * t
        }),
    }
}

/// Scans the axis-aligned bounds of `rect` and paints every pixel whose
/// local-frame coordinate passes `inside`.
fn fill<F: Fn(Vec2) -> bool>(screen: &mut Screen, rect: &Rect2, color: Color, inside: F) {
    let radius = (rect.half_w * rect.half_w + rect.half_h * rect.half_h).sqrt();
    let min_x = (rect.center.x - radius).floor() as i32;
    let max_x = (rect.center.x + radius).ceil() as i32;
    let min_y = (rect.center.y - radius).floor() as i32;
    let max_y = (rect.center.y + radius).ceil() as i32;
    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let p = Vec2 {
                x: px as f32 + 0.5,
                y: py as f32 + 0.5,
            };
            let l = rect.to_local(p);
            if l.x.abs() <= rect.half_w && l.y.abs() <= rect.half_h && inside(l) {
                screen.set_pixel(px, py, color);
            }
        }
    }
}

pub fn draw_line(screen: &mut Screen, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);
    loop {
        screen.set_pixel(x, y, color);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
