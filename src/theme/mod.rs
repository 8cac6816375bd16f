// Theme module - light/dark preference and the matching token sets

mod manager;
mod palette;

pub use manager::{ThemeError, ThemeManager};
pub use palette::{CardShadow, Theme, ThemeColors, DARK_THEME, LIGHT_THEME};
