//! egui panels and the UI-side state projection.

pub mod panels;
pub mod state;
pub mod theme;
