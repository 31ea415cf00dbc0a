//! Raw article text cleanup: markup stripping, URL removal, whitespace collapse.

/// Clean raw article text down to plain scoring input.
///
/// Strips markup tags, drops URL-looking tokens (whitespace-delimited tokens
/// beginning with `http` or `www`, matched case-sensitively per line), and
/// collapses all whitespace runs into single spaces with leading/trailing
/// whitespace trimmed. Empty input yields an empty string.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = strip_markup(raw);

    let mut kept: Vec<&str> = Vec::new();
    for line in text.lines() {
        for token in line.split_whitespace() {
            if token.starts_with("http") || token.starts_with("www") {
                continue;
            }
            kept.push(token);
        }
    }
    kept.join(" ")
}

/// Strip markup tags from a string with a `<`/`>` state machine.
///
/// Malformed markup (unclosed tags) degrades to dropping the trailing
/// fragment rather than erroring.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
