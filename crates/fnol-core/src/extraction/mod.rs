//! Field extraction from raw document text.
//!
//! A single generic routine interprets the pattern table. A miss is the
//! expected outcome for many documents and is reported as `None`, never as
//! an error.

mod patterns;

pub use patterns::{
    pattern, FieldPattern, PatternId, PostProcess, DESCRIPTION_STOP_SECTIONS, FIELD_PATTERNS,
};

/// Extract one field value from `text`.
///
/// Uses the first match in document order and its first capture group.
/// Returns `None` when nothing matches or the value normalizes to empty.
pub fn extract(text: &str, pattern: &FieldPattern) -> Option<String> {
    let captures = pattern.regex.captures(text)?;
    let raw = captures.get(1)?.as_str();

    let value = match pattern.post {
        PostProcess::Plain => normalize_whitespace(raw),
        PostProcess::StopAtSection(headers) => normalize_whitespace(&stop_at_section(raw, headers)),
        PostProcess::Meridiem => format_meridiem(&normalize_whitespace(raw)),
    };

    if value.is_empty() {
        tracing::trace!(field = ?pattern.id, "Pattern matched an empty value");
        None
    } else {
        Some(value)
    }
}

/// Extract a field by its table identifier.
pub fn extract_field(text: &str, id: PatternId) -> Option<String> {
    let value = extract(text, pattern(id));
    if value.is_none() {
        tracing::trace!(field = ?id, "Field not found");
    }
    value
}

/// Collapse whitespace runs (newlines included) to single spaces and trim.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep lines up to the first one that opens a new form section.
fn stop_at_section(raw: &str, headers: &[&str]) -> String {
    let mut lines = raw.split('\n');
    let mut kept: Vec<&str> = lines.next().into_iter().collect();

    for line in lines {
        let upper = line.to_uppercase();
        if headers.iter().any(|h| upper.starts_with(h)) {
            break;
        }
        kept.push(line);
    }

    kept.join("\n")
}

/// Render `10:30AM` or `10:30 AM` as `10:30 AM`.
fn format_meridiem(value: &str) -> String {
    let split = match value.len().checked_sub(2) {
        Some(index) if value.is_char_boundary(index) => index,
        _ => return value.to_string(),
    };

    let (clock, meridiem) = value.split_at(split);
    format!("{} {}", clock.trim_end(), meridiem)
}
