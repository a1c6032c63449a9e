//! # Squiggly
//!
//! A scripting language for tiny real-time 2D games.
//!
//! Squiggly programs are plain text files with three required blocks and
//! optional user functions:
//! ```text
//! :VARS: {
//!     # global variables go here
//! }
//!
//! :START: {
//!     # initialization code goes here
//! }
//!
//! :UPDATE: {
//!     # game loop logic goes here
//! }
//! ```
//!
//! The pipeline is `lang` (lint, preprocess, tokenize into an IR) followed
//! by `mach` (a program-counter machine executing the IR once per frame
//! against a frontend that supplies joystick input and presents a fixed-size
//! pixel buffer).

pub mod gfx;
pub mod lang;
pub mod mach;
