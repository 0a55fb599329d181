pub mod controls;
pub mod hud;
pub mod pacing;
pub mod simulation;
pub mod trails;
pub mod visualization;
