use std::time::Instant;

/// Application state shared across handlers
///
/// Nothing here is mutated after startup; handlers only read the start
/// instant to report uptime.
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
