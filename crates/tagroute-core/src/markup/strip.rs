use regex::Regex;

// A bare `#tag` match only counts when the next character cannot extend the
// tag name (word chars, `/`, `-`); this keeps `#Bob` from matching inside
// `#Bob-2`. The `regex` crate has no lookahead, so the delimiter is captured
// and restored on replace.

fn escaped(tag: &str) -> String {
    regex::escape(tag)
}

/// Remove every occurrence of a tag's markup from a text
///
/// Strips both markup forms (`#tag` and `#[[tag]]`), case-sensitively and
/// word-boundary-safely, then collapses whitespace runs to single spaces and
/// trims the ends. Pure and idempotent: stripping twice equals stripping
/// once.
pub fn strip_tag(text: &str, tag: &str) -> String {
    let e = escaped(tag);
    let pattern = Regex::new(&format!(r"#\[\[{e}\]\]|#{e}($|[^\w/-])"))
        .expect("escaped tag always yields a valid pattern");
    // Remove tag markup, restoring the captured delimiter for bare matches.
    // A bare match consumes its delimiter, which can hide an immediately
    // adjacent occurrence (`#Bob#Bob`), so the pass repeats until nothing
    // matches. Each pass strictly shrinks the text, so the loop terminates.
    let mut without_tag = text.to_string();
    loop {
        let replaced = pattern.replace_all(&without_tag, "$1");
        if replaced == without_tag {
            break;
        }
        without_tag = replaced.into_owned();
    }
    let ws = Regex::new(r"\s+").expect("static pattern");
    ws.replace_all(without_tag.trim(), " ").into_owned()
}

/// True when the text references the tag in any markup form
///
/// Recognizes `#tag`, `#[[tag]]`, and the plain page link `[[tag]]`. Uses
/// the same boundary discipline as [`strip_tag`], so a tag never matches as
/// a prefix of a longer tag.
pub fn mentions_tag(text: &str, tag: &str) -> bool {
    let e = escaped(tag);
    let pattern = Regex::new(&format!(
        r"#?\[\[{e}\]\]|#{e}($|[^\w/-])"
    ))
    .expect("escaped tag always yields a valid pattern");
    pattern.is_match(text)
}
