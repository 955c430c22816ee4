use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Fit `s` into `max_width` terminal columns, ending with an ellipsis when cut
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut result = String::with_capacity(s.len());
    let mut width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        result.push(c);
    }
    result.push(ELLIPSIS);
    result
}

/// Left padding that centers `s` within `width` columns
pub fn center_offset(s: &str, width: usize) -> usize {
    width.saturating_sub(s.width()) / 2
}
