/// Presentation utilities
///
/// Small pure helpers the rendering layer calls: theme switching and status badges.

pub mod theme;
pub mod status;

pub use status::{status_config, StatusLabel};
pub use theme::{is_theme, next_theme, next_theme_from, THEMES};
