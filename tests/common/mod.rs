#![allow(dead_code)]

use squiggly::lang::Error;
use squiggly::mach::{NullFrontend, Runtime};

/// Runs the whole pipeline headlessly: vars and start blocks once, then
/// `frames` update frames.
pub fn try_run(source: &str, frames: usize) -> Result<Runtime, Error> {
    let mut runtime = Runtime::from_source(source)?;
    runtime.prepare()?;
    let mut frontend = NullFrontend::new();
    for _ in 0..frames {
        runtime.run_frame(&mut frontend)?;
    }
    Ok(runtime)
}

pub fn run(source: &str, frames: usize) -> Runtime {
    match try_run(source, frames) {
        Ok(runtime) => runtime,
        Err(error) => panic!("{}", error),
    }
}

/// Runs like [`run`] and collects every line the program printed.
pub fn run_printing(source: &str, frames: usize) -> (Runtime, Vec<String>) {
    let mut runtime = match Runtime::from_source(source) {
        Ok(runtime) => runtime,
        Err(error) => panic!("{}", error),
    };
    runtime.prepare().unwrap();
    let mut printed = runtime.take_output();
    let mut frontend = NullFrontend::new();
    for _ in 0..frames {
        runtime.run_frame(&mut frontend).unwrap();
    }
    printed.extend(frontend.printed);
    (runtime, printed)
}

pub fn int(runtime: &Runtime, name: &str) -> i32 {
    fetch(runtime, name).as_int().unwrap()
}

pub fn float(runtime: &Runtime, name: &str) -> f32 {
    fetch(runtime, name).as_float().unwrap()
}

pub fn double(runtime: &Runtime, name: &str) -> f64 {
    fetch(runtime, name).as_double().unwrap()
}

pub fn boolean(runtime: &Runtime, name: &str) -> bool {
    fetch(runtime, name).as_bool().unwrap()
}

pub fn string(runtime: &Runtime, name: &str) -> String {
    fetch(runtime, name).as_string().unwrap()
}

fn fetch(runtime: &Runtime, name: &str) -> squiggly::mach::Variable {
    runtime
        .fetch_variable(name, false)
        .unwrap()
        .unwrap_or_else(|| panic!("variable '{}' not found", name))
}
