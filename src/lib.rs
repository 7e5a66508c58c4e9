//! Simplified Brazilian company tax simulation.
//!
//! [`core`] holds the calculator (one pure function per regime), report
//! rendering and the company registry; [`cmd`] holds the command line
//! front end that plays the part of the tax form.

pub mod cmd;
pub mod core;
