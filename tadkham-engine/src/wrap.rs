//! Line wrapping on segment boundaries
//!
//! Segments are never split. A segment longer than the limit gets a line of
//! its own.

/// Pack `segments` into lines of at most `max_chars` characters
///
/// `max_chars == 0` disables wrapping and yields the whole text as one line.
/// No segments yield no lines.
pub fn wrap_tokens<S: AsRef<str>>(segments: &[S], max_chars: usize) -> Vec<String> {
    if segments.is_empty() {
        return Vec::new();
    }
    if max_chars == 0 {
        return vec![segments.iter().map(AsRef::as_ref).collect()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for segment in segments {
        let segment = segment.as_ref();
        let len = segment.chars().count();

        if current_len > 0 && current_len + len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(segment);
        current_len += len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
