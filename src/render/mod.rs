//! Render-Layer: Aufbereitung des Analyse-Ergebnisses als Plot-Szene.

pub mod plot;

pub use plot::{build as build_plot_scene, nice_ticks, PlotBounds, PlotScene, ZeroAxes};
