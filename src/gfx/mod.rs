/*!
## Squiggly Graphics Module

Display-side collaborators of the interpreter: a fixed-size RGB pixel
buffer, raster primitives, and the 2D box-collision helpers used by
built-in objects.

*/

mod draw;
pub mod physics;
mod screen;

pub use physics::Rect2;
pub use physics::Vec2;
pub use screen::Screen;
pub use screen::SCREEN_HEIGHT;
pub use screen::SCREEN_WIDTH;

pub type Color = [u8; 3];

/// Renderable shapes of a built-in object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect,
    Ellipse,
    Triangle,
}

/// Everything the rasterizer needs to know about one object. Angles are in
/// degrees, rotation is about the sprite center.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub color: Color,
    pub shape: Shape,
}

impl Sprite {
    pub fn bounds(&self) -> Rect2 {
        Rect2::new(
            Vec2 {
                x: self.x + self.width / 2.0,
                y: self.y + self.height / 2.0,
            },
            self.width,
            self.height,
            self.rotation,
        )
    }
}
