use crate::gfx::Screen;
use std::io;

/// ## Frontend
///
/// Everything the runner needs from the outside world: input readings once
/// per frame, a place to present the finished frame, and a sink for
/// `^PRINT` output. The terminal binary implements this over a raw
/// terminal; tests run against [`NullFrontend`].
pub trait Frontend {
    fn init(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn clean_up(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Samples the input devices. Called once at the top of every frame;
    /// the axis and button getters below report these samples.
    fn update_readings(&mut self);

    /// Horizontal stick reading in -1.0..=1.0.
    fn hor_axis(&self) -> f32;

    /// Vertical stick reading in -1.0..=1.0. Positive is down, matching
    /// screen space.
    fn vert_axis(&self) -> f32;

    fn a_btn(&self) -> bool;

    fn b_btn(&self) -> bool;

    fn exit_btn(&self) -> bool;

    fn present(&mut self, screen: &Screen) -> io::Result<()>;

    fn print(&mut self, text: &str);
}

/// Headless frontend: no input, frames go nowhere, printed lines are kept
/// for inspection.
#[derive(Default)]
pub struct NullFrontend {
    pub hor: f32,
    pub vert: f32,
    pub a: bool,
    pub b: bool,
    pub printed: Vec<String>,
}

impl NullFrontend {
    pub fn new() -> NullFrontend {
        NullFrontend::default()
    }
}

impl Frontend for NullFrontend {
    fn update_readings(&mut self) {}

    fn hor_axis(&self) -> f32 {
        self.hor
    }

    fn vert_axis(&self) -> f32 {
        self.vert
    }

    fn a_btn(&self) -> bool {
        self.a
    }

    fn b_btn(&self) -> bool {
        self.b
    }

    fn exit_btn(&self) -> bool {
        true
    }

    fn present(&mut self, _screen: &Screen) -> io::Result<()> {
        Ok(())
    }

    fn print(&mut self, text: &str) {
        self.printed.push(text.to_string());
    }
}
