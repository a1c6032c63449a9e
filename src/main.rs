//! # Squiggly
//!
//! Terminal interpreter for the Squiggly game scripting language.

mod term;

fn main() {
    term::main()
}
