//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app`, `render` und `ui`
//! gleichermaßen gelesen werden.

pub mod options;

pub use options::AppOptions;
pub use options::{GRID_SIZE_RANGE, STROKE_WIDTH_RANGE};
