//! Cursor arithmetic for the text fields. All offsets count chars, not
//! bytes, so multibyte input cannot split a code point.

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    cursor.min(char_len(text))
}

pub fn insert_char(text: &str, cursor: usize, ch: char) -> (String, usize) {
    let cursor = clamp_cursor(text, cursor);
    let at = byte_offset(text, cursor);
    let mut out = String::with_capacity(text.len() + ch.len_utf8());
    out.push_str(&text[..at]);
    out.push(ch);
    out.push_str(&text[at..]);
    (out, cursor + 1)
}

/// Backspace. Returns `None` with the cursor at the start.
pub fn delete_before(text: &str, cursor: usize) -> Option<(String, usize)> {
    let cursor = clamp_cursor(text, cursor);
    if cursor == 0 {
        return None;
    }
    let start = byte_offset(text, cursor - 1);
    let end = byte_offset(text, cursor);
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    Some((out, cursor - 1))
}

/// Forward delete. Returns `None` with the cursor at the end.
pub fn delete_at(text: &str, cursor: usize) -> Option<String> {
    let cursor = clamp_cursor(text, cursor);
    if cursor >= char_len(text) {
        return None;
    }
    let start = byte_offset(text, cursor);
    let end = byte_offset(text, cursor + 1);
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    Some(out)
}

/// Row and column of `cursor` in a newline-separated buffer.
pub fn cursor_position(text: &str, cursor: usize) -> (usize, usize) {
    let cursor = clamp_cursor(text, cursor);
    let mut row = 0;
    let mut col = 0;
    for ch in text.chars().take(cursor) {
        if ch == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row, col)
}

/// Char offset of `(row, col)`, clamping both to the buffer.
pub fn cursor_at(text: &str, row: usize, col: usize) -> usize {
    let mut offset = 0;
    for (idx, line) in text.split('\n').enumerate() {
        let line_len = char_len(line);
        if idx == row {
            return offset + col.min(line_len);
        }
        offset += line_len + 1;
    }
    // Row past the last line: clamp to the end of the buffer.
    char_len(text)
}

pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn line_start(text: &str, cursor: usize) -> usize {
    let (row, _) = cursor_position(text, cursor);
    cursor_at(text, row, 0)
}

pub fn line_end(text: &str, cursor: usize) -> usize {
    let (row, _) = cursor_position(text, cursor);
    cursor_at(text, row, usize::MAX)
}
