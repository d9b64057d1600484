use std::sync::LazyLock;

use regex::Regex;

/// Reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Remove every `<...>` tag from remote markup.
///
/// This is a plain tag-removal transform for contexts that need text (titles
/// in the head, descriptions, snippets). It is not a sanitizer.
pub fn strip_markup(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Stripped, trimmed text cut to `max_chars` characters, with `...` appended
/// when something was cut.
pub fn snippet(html: &str, max_chars: usize) -> String {
    let text = strip_markup(html);
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", text[..end].trim_end()),
        None => text.to_string(),
    }
}

/// Estimated minutes to read the rendered content.
///
/// Words are whitespace-separated tokens of the stripped markup. The
/// estimate never drops below one minute, so empty content reads as 1.
pub fn reading_time(html: &str) -> u32 {
    let words = strip_markup(html).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
