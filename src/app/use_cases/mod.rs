//! Use-Cases: fachliche Abläufe auf dem AppState.
//!
//! Handler delegieren hierher; I/O und Backend-Zugriffe sind hier gebündelt.

pub mod analysis;
pub mod canvas;
pub mod file_io;
