//! Plain-text cleanup and wrapping for recipe instruction text.
//!
//! Instructions arrive either as prose or as an HTML fragment
//! (`<ol><li>..</li></ol>`, `<p>`, `<br>`). Markup is reduced to lines of
//! text so cards can be laid out line by line.

const LIST_BULLET: &str = "• ";

/// Strip markup from instruction text
///
/// Tags are removed, block-level tags become line breaks, list items get a
/// bullet, and the common character entities are decoded. Blank lines are
/// dropped and every line is trimmed.
pub fn to_plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
        text.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('<') {
            match tail.find('>') {
                Some(end) => {
                    apply_tag(&tail[1..end], &mut text);
                    rest = &tail[end + 1..];
                }
                None => {
                    // Unterminated tag: keep the rest as text
                    text.push_str(tail);
                    rest = "";
                }
            }
        } else {
            match decode_entity(tail) {
                Some((decoded, consumed)) => {
                    text.push(decoded);
                    rest = &tail[consumed..];
                }
                None => {
                    text.push('&');
                    rest = &tail[1..];
                }
            }
        }
    }
    text.push_str(rest);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply_tag(tag: &str, text: &mut String) {
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    match (name.as_str(), closing) {
        ("li", false) => {
            text.push('\n');
            text.push_str(LIST_BULLET);
        }
        ("br" | "p" | "div" | "ol" | "ul" | "li" | "h1" | "h2" | "h3" | "h4", _) => {
            text.push('\n')
        }
        _ => {}
    }
}

/// Decode the entity at the start of `s`, returning the char and bytes consumed
///
/// Numeric entities naming a control character other than a newline are not
/// decoded.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let end = s.find(';')?;
    if end > 10 {
        return None;
    }

    let decoded = match &s[1..end] {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        name => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code).filter(|c| *c == '\n' || !c.is_control())?
        }
    };
    Some((decoded, end + 1))
}

/// Greedy word wrap to `width` columns
///
/// Words longer than the width are split. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
