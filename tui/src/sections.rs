//! Builds the brochure document as styled text lines.
//!
//! The whole page is materialized as one `Vec<Line>` so the renderer can
//! slice an arbitrary row window out of it, which is what makes partial
//! section visibility and smooth scrolling work. Section row extents are
//! recorded while building and handed back to the engine as the layout.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use terra_engine::{
    App, ContactField, DocumentLayout, InputMode, SectionExtent, SectionId, SubmissionStatus,
    content,
};

use crate::format::{truncate, wrap};
use crate::theme::{Glyphs, Palette, spinner_frame, styles};

/// Widest text column used for body copy.
const MAX_COLUMN: u16 = 72;
/// Widest carousel card frame.
const MAX_CARD: u16 = 56;

pub(crate) struct Document {
    pub lines: Vec<Line<'static>>,
    pub layout: DocumentLayout,
    /// Rows of the full-viewport hero at the top of the document.
    pub hero_rows: u16,
}

struct Builder<'a> {
    lines: Vec<Line<'static>>,
    extents: Vec<SectionExtent>,
    width: u16,
    column: u16,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl Builder<'_> {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn centered(&mut self, text: impl Into<String>, style: Style) {
        self.lines
            .push(Line::from(Span::styled(text.into(), style)).centered());
    }

    fn body(&mut self, text: impl Into<String>, style: Style) {
        let indent = usize::from((self.width.saturating_sub(self.column)) / 2);
        self.lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(text.into(), style),
        ]));
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for line in wrap(text, self.column) {
            self.body(line, style);
        }
    }

    /// Small gold marker above each section headline.
    fn eyebrow(&mut self, text: &str) {
        self.centered(
            format!("{} {text} {}", self.glyphs.hline, self.glyphs.hline),
            Style::default().fg(self.palette.gold_dim),
        );
    }

    fn headline(&mut self, parts: [&str; 2]) {
        for part in parts {
            self.centered(part, styles::heading(self.palette));
        }
    }

    fn end_section(&mut self, id: SectionId, top: u16) {
        let height = (self.lines.len() as u16).saturating_sub(top);
        self.extents.push(SectionExtent { id, top, height });
    }
}

pub(crate) fn build_document(
    app: &App,
    width: u16,
    height: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Document {
    if width == 0 || height == 0 {
        return Document {
            lines: Vec::new(),
            layout: DocumentLayout::default(),
            hero_rows: 0,
        };
    }

    let mut b = Builder {
        lines: Vec::new(),
        extents: Vec::new(),
        width,
        column: width.saturating_sub(8).clamp(20, MAX_COLUMN),
        palette,
        glyphs,
    };

    let hero_rows = build_home(&mut b, app, height);
    build_about(&mut b);
    build_services(&mut b);
    build_contact(&mut b, app);

    Document {
        layout: DocumentLayout::new(std::mem::take(&mut b.extents)),
        lines: b.lines,
        hero_rows,
    }
}

/// Hero fills the whole content viewport, then the featured carousel follows.
fn build_home(b: &mut Builder<'_>, app: &App, viewport_rows: u16) -> u16 {
    let top = 0;
    let hero_rows = viewport_rows.max(10);

    // Wordmark block sits just above the vertical center.
    let lead = usize::from(hero_rows) * 2 / 5;
    for _ in 0..lead.saturating_sub(1) {
        b.blank();
    }

    b.centered(
        content::BRAND_WORDMARK,
        Style::default()
            .fg(b.palette.gold)
            .add_modifier(Modifier::BOLD),
    );
    b.blank();
    b.centered(content::TAGLINE, Style::default().fg(b.palette.text_secondary));
    b.blank();
    b.centered(content::PHILOSOPHY, Style::default().fg(b.palette.text_muted));
    b.blank();
    b.centered(
        format!("[ {} ]", content::HERO_CTA),
        styles::key_highlight(b.palette),
    );

    while (b.lines.len() as u16) < hero_rows.saturating_sub(1) {
        b.blank();
    }
    // Scroll indicator on the hero's last row, gone once the user has moved.
    if app.is_scrolled() {
        b.blank();
    } else {
        b.centered(
            format!("{} scroll", b.glyphs.arrow_down),
            styles::key_hint(b.palette),
        );
    }

    b.blank();
    b.centered("FEATURED OPPORTUNITIES", Style::default().fg(b.palette.gold_dim));
    b.blank();
    build_carousel_card(b, app);
    b.blank();

    b.end_section(SectionId::Home, top);
    hero_rows
}

/// One featured card plus pager dots. The framed interior stands in for the
/// remote photograph and doubles as the unreachable-image fallback.
fn build_carousel_card(b: &mut Builder<'_>, app: &App) {
    let carousel = app.carousel();
    let Some(card) = content::FEATURED.get(carousel.index()) else {
        return;
    };

    let card_w = b.width.saturating_sub(4).clamp(20, MAX_CARD);
    let inner = usize::from(card_w) - 2;
    let g = b.glyphs;

    let frame = |left: &str, fill: &str, right: &str| -> String {
        format!("{left}{}{right}", fill.repeat(inner))
    };
    let framed_row = |text: &str| -> String {
        let text = truncate(text, card_w - 4, g.ellipsis);
        let pad = inner - text.width();
        let left = pad / 2;
        format!(
            "{}{}{text}{}{}",
            g.vline,
            " ".repeat(left),
            " ".repeat(pad - left),
            g.vline
        )
    };

    let frame_style = Style::default().fg(b.palette.bg_border);
    let muted = Style::default().fg(b.palette.text_muted);

    b.centered(frame(g.corner_tl, g.hline, g.corner_tr), frame_style);
    b.centered(framed_row(""), frame_style);
    b.centered(
        framed_row(&format!("{} {} {}", g.bullet, card.location, g.bullet)),
        muted,
    );
    b.centered(framed_row(""), frame_style);
    b.centered(framed_row(card.title), styles::heading(b.palette));
    b.centered(framed_row(card.location), Style::default().fg(b.palette.gold));
    b.centered(frame(g.corner_bl, g.hline, g.corner_br), frame_style);

    let dots: Vec<String> = (0..carousel.len())
        .map(|i| {
            if carousel.is_active(i) {
                g.dot_active.to_string()
            } else {
                g.dot_inactive.to_string()
            }
        })
        .collect();
    b.centered(
        format!("{} {} {}", g.arrow_left, dots.join(" "), g.arrow_right),
        Style::default().fg(b.palette.gold_dim),
    );
}

fn build_about(b: &mut Builder<'_>) {
    let top = b.lines.len() as u16;
    b.blank();
    b.eyebrow("ABOUT");
    b.headline(content::ABOUT_HEADLINE);
    b.blank();

    let body = Style::default().fg(b.palette.text_secondary);
    for story in content::ABOUT_STORY {
        b.paragraph(story, body);
        b.blank();
    }

    for principle in content::PRINCIPLES {
        b.body(
            format!("{} {}", b.glyphs.bullet, principle.title),
            styles::key_highlight(b.palette),
        );
        b.paragraph(principle.description, Style::default().fg(b.palette.text_muted));
        b.blank();
    }

    b.end_section(SectionId::About, top);
}

fn build_services(b: &mut Builder<'_>) {
    let top = b.lines.len() as u16;
    b.blank();
    b.eyebrow("SERVICES");
    b.headline(content::SERVICES_HEADLINE);
    b.blank();

    for service in content::SERVICES {
        b.body(
            format!("{} {}", b.glyphs.bullet, service.title),
            styles::key_highlight(b.palette),
        );
        b.paragraph(
            service.description,
            Style::default().fg(b.palette.text_secondary),
        );
        b.blank();
    }

    b.end_section(SectionId::Services, top);
}

fn build_contact(b: &mut Builder<'_>, app: &App) {
    let top = b.lines.len() as u16;
    b.blank();
    b.eyebrow("CONTACT");
    b.headline(content::CONTACT_HEADLINE);
    b.blank();

    let secondary = Style::default().fg(b.palette.text_secondary);
    let muted = Style::default().fg(b.palette.text_muted);

    b.body(content::HQ_CITY, styles::heading(b.palette));
    for line in content::HQ_ADDRESS {
        b.body(line, secondary);
    }
    b.body(content::PHONE, secondary);
    b.body(content::EMAIL, Style::default().fg(b.palette.gold));
    b.body(content::APPOINTMENT_NOTE, muted);
    b.body(content::GLOBAL_REACH, muted);
    b.blank();

    build_form(b, app);

    b.blank();
    b.paragraph(content::CONFIDENTIALITY_NOTE, muted);
    b.blank();
    b.centered(
        b.glyphs.hline.repeat(usize::from(b.column.min(b.width))),
        Style::default().fg(b.palette.bg_border),
    );
    b.centered(content::FOOTER_COPYRIGHT, muted);
    b.centered(content::FOOTER_PRIVACY, muted);
    b.centered(content::FOOTER_SOCIAL, muted);

    b.end_section(SectionId::Contact, top);
}

fn build_form(b: &mut Builder<'_>, app: &App) {
    let contact = app.contact();
    let editing = app.input_mode() == InputMode::Form;
    let field_w = usize::from(b.column.min(48));

    for field in ContactField::ALL {
        let focused = editing && contact.focus() == field;
        let marker = if focused { b.glyphs.selected } else { " " };
        let required = if field.required() { " *" } else { "" };
        let label_style = if focused {
            styles::key_highlight(b.palette)
        } else {
            Style::default().fg(b.palette.text_secondary)
        };
        b.body(format!("{marker} {}{required}", field.label()), label_style);

        let value = contact.form().field(field);
        let shown = if focused {
            format!("{value}_")
        } else {
            value.to_string()
        };
        let padded = format!("  {:<field_w$}", truncate(&shown, b.column, b.glyphs.ellipsis));
        b.body(
            padded,
            Style::default()
                .fg(b.palette.text_primary)
                .bg(b.palette.bg_panel),
        );
    }

    b.blank();

    let submit_style = if contact.status().submit_enabled() {
        styles::key_highlight(b.palette)
    } else {
        Style::default().fg(b.palette.text_muted)
    };
    b.body("[ Send Message ]", submit_style);

    let status_line = status_spans(app, b.palette);
    if status_line.is_empty() {
        b.blank();
    } else {
        let indent = usize::from((b.width.saturating_sub(b.column)) / 2);
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        spans.extend(status_line);
        b.lines.push(Line::from(spans));
    }
}

fn status_spans(app: &App, palette: &Palette) -> Vec<Span<'static>> {
    let contact = app.contact();
    if contact.status_line().is_empty() {
        return Vec::new();
    }
    let style = match contact.status() {
        SubmissionStatus::Sent => Style::default().fg(palette.success),
        SubmissionStatus::Failed => Style::default().fg(palette.error),
        SubmissionStatus::Sending | SubmissionStatus::Idle => {
            Style::default().fg(palette.warning)
        }
    };
    let mut spans = Vec::new();
    if contact.status() == SubmissionStatus::Sending {
        let frame = spinner_frame(app.frame_count() as usize, app.ui_options());
        spans.push(Span::styled(format!("{frame} "), style));
    }
    spans.push(Span::styled(contact.status_line().to_string(), style));
    spans
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures_util::future::BoxFuture;
    use terra_engine::{App, MailDispatch, MailError, SectionId};
    use terra_types::{MailPayload, UiOptions};

    use crate::theme::{Palette, glyphs};

    use super::build_document;

    struct NullDispatch;

    impl MailDispatch for NullDispatch {
        fn send(&self, _payload: MailPayload) -> BoxFuture<'static, Result<(), MailError>> {
            Box::pin(async { Ok(()) })
        }
    }

    fn test_app() -> App {
        App::with_dispatch(UiOptions::default(), Arc::new(NullDispatch))
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let app = test_app();
        let palette = Palette::standard();
        let glyphs = glyphs(app.ui_options());
        let doc = build_document(&app, 100, 30, &palette, &glyphs);

        let sections = doc.layout.sections();
        let ids: Vec<SectionId> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL);

        assert_eq!(sections[0].top, 0);
        for pair in sections.windows(2) {
            assert_eq!(
                pair[1].top,
                pair[0].top + pair[0].height,
                "sections must tile the document with no gaps"
            );
        }
        assert_eq!(
            usize::from(doc.layout.total_height()),
            doc.lines.len(),
            "every document row belongs to a section"
        );
    }

    #[test]
    fn hero_fills_the_viewport() {
        let app = test_app();
        let palette = Palette::standard();
        let glyphs = glyphs(app.ui_options());
        let doc = build_document(&app, 100, 42, &palette, &glyphs);
        assert_eq!(doc.hero_rows, 42);
    }

    #[test]
    fn carousel_page_changes_the_rendered_card() {
        let mut app = test_app();
        let palette = Palette::standard();
        let glyphs = glyphs(app.ui_options());

        let render = |app: &App| {
            let doc = build_document(app, 100, 30, &palette, &glyphs);
            doc.lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        };

        let first = render(&app);
        assert!(first.contains("Singapore"));
        app.carousel_next();
        let second = render(&app);
        assert!(second.contains("UAE"));
        assert_ne!(first, second);
    }

    #[test]
    fn zero_viewport_builds_an_empty_document() {
        let app = test_app();
        let palette = Palette::standard();
        let glyphs = glyphs(app.ui_options());
        let doc = build_document(&app, 0, 0, &palette, &glyphs);
        assert!(doc.lines.is_empty());
        assert_eq!(doc.layout.total_height(), 0);
    }

    #[test]
    fn narrow_viewport_still_renders_every_section() {
        let app = test_app();
        let palette = Palette::standard();
        let glyphs = glyphs(app.ui_options());
        let doc = build_document(&app, 30, 20, &palette, &glyphs);
        assert_eq!(doc.layout.sections().len(), SectionId::ALL.len());
    }
}
