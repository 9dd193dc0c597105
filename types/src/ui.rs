//! UI configuration options derived from config/environment.

/// Rendering options resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and indicators.
    pub ascii_only: bool,
    /// High-contrast palette override.
    pub high_contrast: bool,
    /// Disable the particle field, smooth-scroll easing, and spinner cycling.
    pub reduced_motion: bool,
}
