//! Color theme and glyphs for the Terra TUI.
//!
//! A dark charcoal-and-gold palette with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use terra_types::UiOptions;

/// Brand palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(15, 15, 15);
    pub const BG_PANEL: Color = Color::Rgb(26, 26, 26);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 38, 38);
    pub const BG_POPUP: Color = Color::Rgb(22, 22, 22);
    pub const BG_BORDER: Color = Color::Rgb(64, 60, 52);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(232, 228, 218);
    pub const TEXT_SECONDARY: Color = Color::Rgb(168, 162, 150);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 106, 98);

    // === Brand ===
    pub const GOLD: Color = Color::Rgb(201, 169, 110);
    pub const GOLD_DIM: Color = Color::Rgb(150, 128, 88);

    // === Semantic ===
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);
    pub const WARNING: Color = Color::Rgb(230, 195, 132);
    pub const ERROR: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub gold: Color,
    pub gold_dim: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            gold: colors::GOLD,
            gold_dim: colors::GOLD_DIM,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            gold: Color::Yellow,
            gold_dim: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons, frames, and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub bullet: &'static str,
    pub arrow_down: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub menu: &'static str,
    pub hline: &'static str,
    pub vline: &'static str,
    pub corner_tl: &'static str,
    pub corner_tr: &'static str,
    pub corner_bl: &'static str,
    pub corner_br: &'static str,
    pub ellipsis: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            bullet: "*",
            arrow_down: "v",
            arrow_left: "<",
            arrow_right: ">",
            dot_active: "*",
            dot_inactive: "o",
            menu: "=",
            hline: "-",
            vline: "|",
            corner_tl: "+",
            corner_tr: "+",
            corner_bl: "+",
            corner_br: "+",
            ellipsis: "...",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            selected: "▸",
            bullet: "•",
            arrow_down: "↓",
            arrow_left: "‹",
            arrow_right: "›",
            dot_active: "●",
            dot_inactive: "○",
            menu: "☰",
            hline: "─",
            vline: "│",
            corner_tl: "┌",
            corner_tr: "┐",
            corner_bl: "└",
            corner_br: "┘",
            ellipsis: "…",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Blend `fg` toward `bg` by `alpha` in [0, 1]; 1 keeps `fg` fully.
///
/// Non-RGB colors (the high-contrast palette) are passed through unchanged:
/// indexed colors cannot be mixed, and high contrast should not fade anyway.
#[must_use]
pub fn fade(fg: Color, bg: Color, alpha: f64) -> Color {
    let (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) = (fg, bg) else {
        return fg;
    };
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| -> u8 {
        (f64::from(b) + (f64::from(f) - f64::from(b)) * a).round() as u8
    };
    Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn nav_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use terra_types::UiOptions;

    use super::{fade, spinner_frame};

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        let frame0 = spinner_frame(0, options);
        let frame1 = spinner_frame(1, options);
        assert_ne!(frame0, frame1, "spinner should cycle through frames");
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let frame0 = spinner_frame(0, options);
        let frame100 = spinner_frame(100, options);
        assert_eq!(frame0, frame100, "spinner should remain static at any tick");
    }

    #[test]
    fn fade_interpolates_and_passes_indexed_colors_through() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 100, 200);
        assert_eq!(fade(fg, bg, 1.0), fg);
        assert_eq!(fade(fg, bg, 0.0), bg);
        assert_eq!(fade(fg, bg, 0.5), Color::Rgb(100, 100, 100));
        assert_eq!(fade(Color::Yellow, bg, 0.5), Color::Yellow);
    }
}
