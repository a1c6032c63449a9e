//! Terminal frontend. Renders the pixel buffer with half-block characters
//! (two pixel rows per text row), reads WASD/arrow keys as the joystick and
//! runs the frame loop at the fixed refresh delay.

extern crate ansi_term;
extern crate ctrlc;
extern crate mortal;

use ansi_term::{Colour, Style};
use mortal::{Event, Key, PrepareConfig, PrepareState, Terminal};
use squiggly::gfx::{Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
use squiggly::mach::{Frontend, Runtime};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Minimum time between presented frames.
const SCREEN_REFRESH_DELAY: Duration = Duration::from_millis(20);

/// Printed lines kept visible under the frame.
const OUTPUT_LINES: usize = 5;

const USAGE: &str = "\
Squiggly
Usage:
  squiggly <file>      run a script
  squiggly template    print a starter script to stdout";

const TEMPLATE: &str = "\
:VARS: {
    OBJECT player
}

:START: {
    player.width = 10
    player.height = 10
    player.x = 45
    player.y = 45
    player.setColor(0, 200, 255)
}

:UPDATE: {
    player.move($JOY_X * 50 * $DTIME, $JOY_Y * 50 * $DTIME, false)
    player.draw()
}";

pub fn main() {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(|s| s.as_str()) {
        None => println!("{}", USAGE),
        Some("template") => println!("{}", TEMPLATE),
        Some(path) => {
            let interrupted = Arc::new(AtomicBool::new(false));
            let int_moved = interrupted.clone();
            ctrlc::set_handler(move || {
                int_moved.store(true, Ordering::SeqCst);
            })
            .expect("Error setting Ctrl-C handler");
            if let Err(error) = run(path, interrupted) {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                std::process::exit(1);
            }
        }
    }
}

fn run(path: &str, interrupted: Arc<AtomicBool>) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let mut runtime = Runtime::from_source(&source)?;
    let mut frontend = TerminalFrontend::new(interrupted)?;
    runtime.execute(&mut frontend)?;
    Ok(())
}

struct TerminalFrontend {
    term: Terminal,
    state: Option<PrepareState>,
    interrupted: Arc<AtomicBool>,
    hor: f32,
    vert: f32,
    a: bool,
    b: bool,
    quit: bool,
    printed: Vec<String>,
    last_present: Instant,
}

impl TerminalFrontend {
    fn new(interrupted: Arc<AtomicBool>) -> io::Result<TerminalFrontend> {
        Ok(TerminalFrontend {
            term: Terminal::new()?,
            state: None,
            interrupted,
            hor: 0.0,
            vert: 0.0,
            a: false,
            b: false,
            quit: false,
            printed: Vec::new(),
            last_present: Instant::now(),
        })
    }

    fn read_key(&mut self, key: Key) {
        match key {
            Key::Left | Key::Char('a') => self.hor = -1.0,
            Key::Right | Key::Char('d') => self.hor = 1.0,
            Key::Up | Key::Char('w') => self.vert = -1.0,
            Key::Down | Key::Char('s') => self.vert = 1.0,
            Key::Char('j') | Key::Char('z') => self.a = true,
            Key::Char('k') | Key::Char('x') => self.b = true,
            Key::Escape | Key::Char('q') => self.quit = true,
            _ => {}
        }
    }
}

impl Frontend for TerminalFrontend {
    fn init(&mut self) -> io::Result<()> {
        self.state = Some(self.term.prepare(PrepareConfig {
            block_signals: false,
            ..PrepareConfig::default()
        })?);
        self.term.clear_screen()
    }

    fn clean_up(&mut self) -> io::Result<()> {
        if let Some(state) = self.state.take() {
            self.term.restore(state)?;
        }
        Ok(())
    }

    fn update_readings(&mut self) {
        self.hor = 0.0;
        self.vert = 0.0;
        self.a = false;
        self.b = false;
        while let Ok(Some(event)) = self.term.read_event(Some(Duration::from_millis(0))) {
            match event {
                Event::Key(key) => self.read_key(key),
                Event::Signal(_) => self.quit = true,
                _ => {}
            }
        }
    }

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
        self.quit || self.interrupted.load(Ordering::SeqCst)
    }

    fn present(&mut self, screen: &Screen) -> io::Result<()> {
        let elapsed = self.last_present.elapsed();
        if elapsed < SCREEN_REFRESH_DELAY {
            std::thread::sleep(SCREEN_REFRESH_DELAY - elapsed);
        }
        self.last_present = Instant::now();

        let mut frame = String::with_capacity(SCREEN_WIDTH * SCREEN_HEIGHT * 8);
        let mut y = 0;
        while y + 1 < SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let top = screen.pixel(x, y);
                let bottom = screen.pixel(x, y + 1);
                let style = Colour::RGB(top[0], top[1], top[2])
                    .on(Colour::RGB(bottom[0], bottom[1], bottom[2]));
                frame.push_str(&style.paint("\u{2580}").to_string());
            }
            frame.push_str("\r\n");
            y += 2;
        }
        for line in &self.printed {
            frame.push_str(line);
            frame.push_str("\r\n");
        }
        self.term.clear_screen()?;
        self.term.write_str(&frame)
    }

    fn print(&mut self, text: &str) {
        self.printed.push(text.to_string());
        if self.printed.len() > OUTPUT_LINES {
            self.printed.remove(0);
        }
    }
}
