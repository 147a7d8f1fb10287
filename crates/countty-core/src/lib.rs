//! Rendering and timing engine for the countty big-digit terminal clock.
//!
//! - `font`: 7x8 bitmap glyphs for digits and unit markers
//! - `glyph`: rasterizes one glyph row into terminal cells
//! - `duration`: picks the text shown for a number of seconds
//! - `layout`: centers text in the terminal and paints full frames
//! - `clock`: count-up / count-down / blink state machine
//! - `scheduler`: phase-locked sleep between ticks
//! - `time`: wall clock access
//! - `runner`: the tick loop
//! - `interrupt`: signal handling and interruptible sleep
//! - `config`: run parameters and their defaults

pub mod clock;
pub mod config;
pub mod duration;
pub mod font;
pub mod glyph;
pub mod interrupt;
pub mod layout;
pub mod runner;
pub mod scheduler;
pub mod time;
