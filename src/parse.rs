//! CNXML markup stripping
//!
//! Module documents arrive as CNXML. For prompt context the structural
//! markup is noise, so this pass reduces a document to plain text: tags
//! removed, common entities decoded, whitespace collapsed. It is a lossy
//! text extraction, not an XML parser; malformed input degrades to "strip
//! everything between angle brackets" rather than erroring.

/// Strip structural markup from a CNXML (or any XML-ish) document,
/// returning plain text with normalized whitespace.
pub fn strip_markup(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len() / 2);
    let mut chars = raw.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                // Skip comments and CDATA openers wholesale
                in_tag = true;
                // Tag boundaries act as word separators
                if !text.ends_with(' ') && !text.is_empty() {
                    text.push(' ');
                }
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '&' => {
                let mut entity = String::new();
                while let Some(&next) = chars.peek() {
                    if next == ';' {
                        chars.next();
                        break;
                    }
                    if entity.len() > 8 || next == '&' || next == '<' {
                        break;
                    }
                    entity.push(next);
                    chars.next();
                }
                text.push_str(decode_entity(&entity));
            }
            _ => text.push(c),
        }
    }

    collapse_whitespace(&text)
}

fn decode_entity(entity: &str) -> &'static str {
    match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "#8217" => "'",
        "#8220" | "#8221" => "\"",
        _ => " ",
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_lines = 0;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            blank_lines += 1;
            continue;
        }

        if !out.is_empty() {
            // At most one blank line between paragraphs
            out.push('\n');
            if blank_lines > 0 {
                out.push('\n');
            }
        }
        blank_lines = 0;

        let mut last_was_space = false;
        for c in line.chars() {
            if c.is_whitespace() {
                if !last_was_space {
                    out.push(' ');
                }
                last_was_space = true;
            } else {
                out.push(c);
                last_was_space = false;
            }
        }
    }

    out
}
