use super::draw;
use super::{Color, Sprite};

pub const SCREEN_WIDTH: usize = 100;
pub const SCREEN_HEIGHT: usize = 100;

/// Fixed-size RGB frame buffer the runner draws into once per frame. The
/// frontend decides how to present it.
pub struct Screen {
    buff: Vec<Color>,
}

impl Screen {
    pub fn new() -> Screen {
        Screen {
            buff: vec![[0, 0, 0]; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        for px in self.buff.iter_mut() {
            *px = [0, 0, 0];
        }
    }

    /// Writes one pixel; coordinates outside the buffer are clipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
            return;
        }
        self.buff[y as usize * SCREEN_WIDTH + x as usize] = color;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.buff[y * SCREEN_WIDTH + x]
    }

    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        draw::draw_sprite(self, sprite);
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        draw::draw_line(self, x1, y1, x2, y2, color);
    }
}

impl Default for Screen {
    fn default() -> Screen {
        Screen::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Shape;

    #[test]
    fn sprite_paints_and_clear_erases() {
        let mut screen = Screen::new();
        screen.draw_sprite(&Sprite {
            x: 10.0,
            y: 10.0,
            width: 4.0,
            height: 4.0,
            rotation: 0.0,
            color: [255, 0, 255],
            shape: Shape::Rect,
        });
        assert_eq!(screen.pixel(11, 11), [255, 0, 255]);
        assert_eq!(screen.pixel(50, 50), [0, 0, 0]);
        screen.clear();
        assert_eq!(screen.pixel(11, 11), [0, 0, 0]);
    }

    #[test]
    fn line_endpoints_are_painted_and_clipped() {
        let mut screen = Screen::new();
        screen.draw_line(-5, 0, 5, 0, [1, 2, 3]);
        assert_eq!(screen.pixel(0, 0), [1, 2, 3]);
        assert_eq!(screen.pixel(5, 0), [1, 2, 3]);
    }
}
