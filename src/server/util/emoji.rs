//! Emoji extraction and stripping for message content and event names.

use std::sync::LazyLock;

use regex::Regex;

/// Custom guild emoji in message markup, e.g. `<:wave:123>` or `<a:dance:456>`.
static CUSTOM_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a?:(\w{2,32}):(\d{15,21})>").expect("custom emoji pattern is valid")
});

/// A unicode emoji cluster: pictograph or regional indicator pair plus modifiers and ZWJ joins.
static UNICODE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:[\x{1F1E6}-\x{1F1FF}]{2}|\p{Extended_Pictographic}[\x{FE0F}\x{1F3FB}-\x{1F3FF}]*(?:\x{200D}\p{Extended_Pictographic}[\x{FE0F}\x{1F3FB}-\x{1F3FF}]*)*)",
    )
    .expect("unicode emoji pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Returns the usage key of every emoji in `content`, in order of appearance.
///
/// Custom emoji are keyed as `name:id`; unicode emoji by their character sequence.
pub fn extract_emoji(content: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = CUSTOM_EMOJI
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), format!("{}:{}", &caps[1], &caps[2])))
        })
        .collect();

    let without_custom = CUSTOM_EMOJI.replace_all(content, |caps: &regex::Captures| {
        " ".repeat(caps[0].len())
    });

    found.extend(
        UNICODE_EMOJI
            .find_iter(&without_custom)
            .map(|m| (m.start(), m.as_str().to_string())),
    );

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, key)| key).collect()
}

/// Removes custom and unicode emoji from `text` and collapses leftover whitespace.
///
/// Emoji inside the label of a markdown link stop Discord from rendering the link.
pub fn strip_emoji(text: &str) -> String {
    let without_custom = CUSTOM_EMOJI.replace_all(text, "");
    let without_unicode = UNICODE_EMOJI.replace_all(&without_custom, "");

    WHITESPACE_RUN
        .replace_all(&without_unicode, " ")
        .trim()
        .to_string()
}
