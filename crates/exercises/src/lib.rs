//! The exercises themselves: concrete functions that exercise the abstractions of the
//! [`algebra`] and [`ctfp_memo`] crates.

pub mod coproduct;
pub mod functions;
pub mod partial;
pub mod readers;
pub mod shape;
pub mod words;
