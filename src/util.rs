/// Shorten `text` to at most `max_width` chars, breaking on word boundaries
/// and ending with `...`.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }
    let limit = max_width - 3; // room for "..."
    let mut result = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if result.is_empty() {
            if word_len > limit {
                return "...".to_string();
            }
            result = word.to_string();
        } else if result.chars().count() + 1 + word_len <= limit {
            result.push(' ');
            result.push_str(word);
        } else {
            break;
        }
    }
    format!("{result}...")
}

pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Rows of a rendered buffer as plain strings
#[cfg(test)]
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}
