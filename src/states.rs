use bevy::prelude::*;

/// Whether the engine is stepped each frame
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Running,
    Paused,
}

impl AppState {
    pub fn toggled(self) -> Self {
        match self {
            AppState::Running => AppState::Paused,
            AppState::Paused => AppState::Running,
        }
    }
}
