use anyhow::Result;
use regex::Regex;

/// Collapse redundant whitespace in raw license text.
///
/// Runs of two spaces collapse to one (single left-to-right pass), then soft
/// line wraps are joined: a line break with a non-whitespace character on
/// both sides, allowing horizontal whitespace in between, becomes a single
/// space. A blank line has no non-whitespace character adjacent to either
/// break, so paragraph separation is preserved.
pub fn normalize(raw: &str) -> Result<String> {
    let soft_wrap = Regex::new(r"(\S)[ \t]*\r?\n[ \t]*(\S)")?;

    let mut text = raw.replace("  ", " ");
    // One pass cannot join a run of three or more wrapped lines: the
    // trailing capture of one match is the leading capture of the next.
    // Every pass removes at least one line break, so this terminates.
    loop {
        let joined = soft_wrap.replace_all(&text, "$1 $2").into_owned();
        if joined == text {
            break;
        }
        text = joined;
    }
    Ok(text)
}
