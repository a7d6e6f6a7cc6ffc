/// Characters that separate words the same way a space does.
const PUNCTUATION: &[char] = &['.', ',', '?', '!', ';', '(', ')', '"', '\'', '-'];

/// Splits a sentence into word tokens.
///
/// Punctuation becomes a space, the text is trimmed, runs of spaces collapse
/// to one, and the result is split on single spaces. Only the space character
/// separates tokens: tabs and line breaks stay inside the token they touch.
///
/// Empty or blank input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let spaced: String = text
        .chars()
        .map(|ch| if PUNCTUATION.contains(&ch) { ' ' } else { ch })
        .collect();

    let trimmed = spaced.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    collapse_spaces(trimmed)
        .replace("\n ", "\n")
        .replace("\r ", "")
        .split(' ')
        .map(str::to_owned)
        .collect()
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !previous_space {
                out.push(ch);
            }
            previous_space = true;
        } else {
            out.push(ch);
            previous_space = false;
        }
    }
    out
}

/// Splits text into lines on `\n`, dropping a trailing `\r` from each.
///
/// The remainder after the last line break is always yielded, so `""`
/// produces one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
