use unicode_width::UnicodeWidthStr;

/// Greedy word wrap to `width` columns, measured in display cells.
///
/// Words wider than the target width get a line of their own rather than
/// being split mid-word; terminal wrapping handles the overflow.
pub(crate) fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate to `width` display cells, appending `ellipsis` when cut.
///
/// The ellipsis comes from the active glyph set so ascii_only output stays
/// pure ASCII.
pub(crate) fn truncate(text: &str, width: u16, ellipsis: &str) -> String {
    let width = usize::from(width);
    if text.width() <= width {
        return text.to_string();
    }
    let reserve = ellipsis.width().min(width);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + reserve > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ellipsis);
    out
}
