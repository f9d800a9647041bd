//! Escaping to markup, and reading markup back as styled text.

/// `text` with the characters markup treats as special replaced by entities.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

fn unescape_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "#39" | "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => None,
    }
}

/// A run of text with a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Splits markup into styled segments.
///
/// `<br>` becomes a newline, `<b>` and `<i>` set styles, and any other tag is dropped.
/// Unknown entities are kept as written.
pub fn segments(markup: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::default();
    let mut bold = 0_usize;
    let mut italic = 0_usize;
    let mut text = String::default();

    let flush = |text: &mut String, segments: &mut Vec<Segment>, bold: usize, italic: usize| {
        if !text.is_empty() {
            segments.push(Segment {
                text: std::mem::take(text),
                bold: bold > 0,
                italic: italic > 0,
            });
        }
    };

    let mut rest = markup;
    while let Some(character) = rest.chars().next() {
        match character {
            '<' => {
                let Some(end) = rest.find('>') else {
                    text.push_str(rest);
                    break;
                };
                let tag = rest[1..end].trim().to_ascii_lowercase();
                rest = &rest[end + 1..];

                match tag.trim_end_matches('/').trim() {
                    "br" => text.push('\n'),
                    "b" => {
                        flush(&mut text, &mut segments, bold, italic);
                        bold += 1;
                    }
                    "/b" => {
                        flush(&mut text, &mut segments, bold, italic);
                        bold = bold.saturating_sub(1);
                    }
                    "i" => {
                        flush(&mut text, &mut segments, bold, italic);
                        italic += 1;
                    }
                    "/i" => {
                        flush(&mut text, &mut segments, bold, italic);
                        italic = italic.saturating_sub(1);
                    }
                    _ => {}
                }
            }

            '&' => {
                let entity = rest[1..]
                    .find(';')
                    .and_then(|end| unescape_entity(&rest[1..end + 1]).map(|c| (c, end + 2)));
                match entity {
                    Some((unescaped, length)) => {
                        text.push(unescaped);
                        rest = &rest[length..];
                    }
                    None => {
                        text.push('&');
                        rest = &rest[1..];
                    }
                }
            }

            _ => {
                text.push(character);
                rest = &rest[character.len_utf8()..];
            }
        }
    }

    flush(&mut text, &mut segments, bold, italic);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping() {
        assert_eq!(escape("p & <q> \"r\" 's'"), "p &amp; &lt;q&gt; &quot;r&quot; &#39;s&#39;");
        assert_eq!(escape("p -> q"), "p -&gt; q");
    }

    #[test]
    fn styled_segments() {
        let segments = segments("Clause set is <b>false</b> here.<br>");
        assert_eq!(
            segments,
            vec![
                Segment {
                    text: "Clause set is ".to_string(),
                    bold: false,
                    italic: false
                },
                Segment {
                    text: "false".to_string(),
                    bold: true,
                    italic: false
                },
                Segment {
                    text: " here.\n".to_string(),
                    bold: false,
                    italic: false
                },
            ]
        );
    }

    #[test]
    fn entities_and_other_tags() {
        let text = segments("<tt>p -&gt; q &amp; r &unknown;</tt>")
            .into_iter()
            .map(|segment| segment.text)
            .collect::<String>();
        assert_eq!(text, "p -> q & r &unknown;");

        assert_eq!(segments("a < b")[0].text, "a < b");
    }

    #[test]
    fn escape_then_read() {
        let original = "x <-> -y & 'z'";
        let text = segments(&escape(original))
            .into_iter()
            .map(|segment| segment.text)
            .collect::<String>();
        assert_eq!(text, original);
    }
}
