//! TUI rendering for Terra using ratatui.

mod format;
mod input;
mod sections;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, fade, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use terra_engine::{App, COMPACT_WIDTH, InputMode, PageId};

use self::sections::build_document;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Fixed nav bar
            Constraint::Min(1),    // Document
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let content = chunks[1];
    let document = build_document(app, content.width, content.height, &palette, &glyphs);
    app.set_layout(document.layout.clone(), (content.width, content.height));

    draw_particles(frame, app, content, document.hero_rows, &palette);
    draw_content(frame, app, content, &document);
    draw_nav_bar(frame, app, chunks[0], &palette, &glyphs);
    draw_key_hints(frame, app, chunks[2], &palette);

    if app.menu().is_open() {
        draw_menu_overlay(frame, app, &palette, &glyphs);
    }
}

/// Paint the visible row window of the document.
fn draw_content(frame: &mut Frame, app: &App, area: Rect, document: &sections::Document) {
    let offset = usize::from(app.scroll_offset());
    let end = (offset + usize::from(area.height)).min(document.lines.len());
    if offset >= end {
        return;
    }
    let visible: Vec<Line> = document.lines[offset..end].to_vec();
    frame.render_widget(Paragraph::new(visible), area);
}

/// Render the ambient particle field under the hero's visible rows.
///
/// The field lives in braille-dot coordinates with y growing downward; the
/// canvas y axis grows upward, so the y bounds are flipped around the field
/// height. Scrolling moves the bounds window rather than the particles.
fn draw_particles(frame: &mut Frame, app: &App, area: Rect, hero_rows: u16, palette: &Palette) {
    let Some(field) = app.particles() else {
        return;
    };
    let offset = app.scroll_offset();
    if offset >= hero_rows {
        return;
    }

    let visible_rows = (hero_rows - offset).min(area.height);
    let rect = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: visible_rows,
    };

    let top_dots = f64::from(offset) * 4.0;
    let bottom_dots = top_dots + f64::from(visible_rows) * 4.0;
    let particle_color = fade(palette.gold_dim, palette.bg_dark, 0.6);

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, field.width()])
        .y_bounds([field.height() - bottom_dots, field.height() - top_dots])
        .paint(|ctx| {
            for link in field.links() {
                // Opacity peaks at 0.1, so links stay barely visible threads.
                let color = fade(palette.text_muted, palette.bg_dark, link.opacity * 4.0);
                ctx.draw(&CanvasLine {
                    x1: link.x1,
                    y1: field.height() - link.y1,
                    x2: link.x2,
                    y2: field.height() - link.y2,
                    color,
                });
            }
            ctx.layer();
            let coords: Vec<(f64, f64)> = field
                .particles()
                .iter()
                .map(|p| (p.x, field.height() - p.y))
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color: particle_color,
            });
        });
    frame.render_widget(canvas, rect);
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    // Transparent over the hero at the top, panel treatment once scrolled.
    let bg = if app.is_scrolled() {
        palette.bg_panel
    } else {
        palette.bg_dark
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(bg)),
        area,
    );

    let brand = Span::styled(
        " ADVENT TERRA",
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![brand, Span::raw("   ")];
    if area.width < COMPACT_WIDTH {
        spans.push(Span::styled(
            format!("{} menu [m]", glyphs.menu),
            styles::key_hint(palette),
        ));
    } else {
        let active = app.active_section();
        for (i, page) in PageId::ALL.iter().enumerate() {
            let style = if page.section() == active {
                styles::nav_active(palette)
            } else {
                styles::nav_inactive(palette)
            };
            spans.push(Span::styled(format!("{} {}", i + 1, page.label()), style));
            spans.push(Span::raw("  "));
        }
    }

    let bar = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Line::from(spans)), bar);
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hint = hint_text(app);
    let line = Line::from(Span::styled(hint, styles::key_hint(palette)))
        .alignment(Alignment::Center);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

fn hint_text(app: &App) -> &'static str {
    if app.menu().is_open() {
        "up/down select   enter go   esc close"
    } else {
        match app.input_mode() {
            InputMode::Browse => {
                "q quit   m menu   up/down scroll   left/right gallery   1-4 sections   i contact"
            }
            InputMode::Form => "tab next field   enter send   esc done",
        }
    }
}

fn draw_menu_overlay(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let width = 26u16.min(area.width.saturating_sub(2));
    let height = (PageId::ALL.len() as u16 + 2).min(area.height);
    let rect = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, rect);

    let selected = app.menu().selected();
    let lines: Vec<Line> = PageId::ALL
        .iter()
        .map(|&page| {
            if selected == Some(page) {
                Line::from(Span::styled(
                    format!("{} {}", glyphs.selected, page.label()),
                    styles::nav_active(palette),
                ))
                .centered()
            } else {
                Line::from(Span::styled(
                    page.label(),
                    styles::nav_inactive(palette),
                ))
                .centered()
            }
        })
        .collect();

    let menu = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg_popup))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .title(Span::styled(" Navigate ", Style::default().fg(palette.gold))),
        );
    frame.render_widget(menu, rect);
}
