//! Plain-text transformations behind the lab's text utility.
//!
//! Every operation is a pure `&str -> String` function. Decoding operations can
//! fail; [`TextOp::apply`] turns those failures into a fixed sentinel string so
//! the caller always has something to display.

use std::collections::HashSet;

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
        DecodePaddingMode,
    },
    Engine as _,
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

pub const DOWNLOAD_NAME: &str = "processed-text.txt";
pub const UPLOAD_ACCEPT: &str = ".txt,.md,.json,.csv";

// Mirrors the browser's forgiving base64: optional padding, stray low bits ignored.
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextOpError {
    #[error("Invalid Base64 input")]
    InvalidBase64,
    #[error("Invalid URL encoding")]
    InvalidUrlEncoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOp {
    Uppercase,
    Lowercase,
    Capitalize,
    Reverse,
    RemoveSpaces,
    RemoveLineBreaks,
    SortLines,
    RemoveDuplicateLines,
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,
}

impl TextOp {
    pub const ALL: [TextOp; 12] = [
        TextOp::Uppercase,
        TextOp::Lowercase,
        TextOp::Capitalize,
        TextOp::Reverse,
        TextOp::RemoveSpaces,
        TextOp::RemoveLineBreaks,
        TextOp::SortLines,
        TextOp::RemoveDuplicateLines,
        TextOp::Base64Encode,
        TextOp::Base64Decode,
        TextOp::UrlEncode,
        TextOp::UrlDecode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextOp::Uppercase => "UPPERCASE",
            TextOp::Lowercase => "lowercase",
            TextOp::Capitalize => "Capitalize",
            TextOp::Reverse => "Reverse",
            TextOp::RemoveSpaces => "No Spaces",
            TextOp::RemoveLineBreaks => "Single Line",
            TextOp::SortLines => "Sort Lines",
            TextOp::RemoveDuplicateLines => "Remove Duplicates",
            TextOp::Base64Encode => "Base64 Encode",
            TextOp::Base64Decode => "Base64 Decode",
            TextOp::UrlEncode => "URL Encode",
            TextOp::UrlDecode => "URL Decode",
        }
    }

    pub fn try_apply(&self, input: &str) -> Result<String, TextOpError> {
        let out = match self {
            TextOp::Uppercase => input.to_uppercase(),
            TextOp::Lowercase => input.to_lowercase(),
            TextOp::Capitalize => capitalize(input),
            TextOp::Reverse => input.chars().rev().collect(),
            TextOp::RemoveSpaces => input
                .chars()
                .filter(|c| !is_js_whitespace(*c))
                .collect(),
            TextOp::RemoveLineBreaks => input.replace('\n', " "),
            TextOp::SortLines => sort_lines(input),
            TextOp::RemoveDuplicateLines => remove_duplicate_lines(input),
            TextOp::Base64Encode => STANDARD.encode(input.as_bytes()),
            TextOp::Base64Decode => base64_decode(input)?,
            TextOp::UrlEncode => utf8_percent_encode(input, URI_COMPONENT).to_string(),
            TextOp::UrlDecode => url_decode(input)?,
        };
        Ok(out)
    }

    /// Like [`TextOp::try_apply`], but a decode failure yields its sentinel message.
    pub fn apply(&self, input: &str) -> String {
        self.try_apply(input).unwrap_or_else(|e| e.to_string())
    }
}

/// Live counters shown under the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    /// Length in UTF-16 code units, which is what a browser reports.
    pub chars: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            chars: text.encode_utf16().count(),
        }
    }
}

// JS `\s`: Unicode White_Space minus NEL, plus the BOM.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// `\b\w` with ASCII word characters: only the first char of each run is touched.
fn capitalize(input: &str) -> String {
    let mut prev_word = false;
    input
        .chars()
        .map(|c| {
            let is_word = is_word_char(c);
            let out = if is_word && !prev_word {
                c.to_ascii_uppercase()
            } else {
                c
            };
            prev_word = is_word;
            out
        })
        .collect()
}

fn sort_lines(input: &str) -> String {
    let mut lines = input.split('\n').collect::<Vec<_>>();
    lines.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    lines.join("\n")
}

fn remove_duplicate_lines(input: &str) -> String {
    let mut seen = HashSet::new();
    input
        .split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn base64_decode(input: &str) -> Result<String, TextOpError> {
    let compact = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c'))
        .collect::<String>();
    let bytes = FORGIVING_BASE64
        .decode(compact)
        .map_err(|_| TextOpError::InvalidBase64)?;
    String::from_utf8(bytes).map_err(|_| TextOpError::InvalidBase64)
}

fn url_decode(input: &str) -> Result<String, TextOpError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(TextOpError::InvalidUrlEncoding);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| TextOpError::InvalidUrlEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "hello world",
        "Hello, World! 123",
        "line one\nline two\n\nline three",
        "ümlaut ß straße",
        "日本語のテキスト",
        "emoji 🦀 and 👍🏽",
        "a+b=c & d/e?f#g%h",
        "  leading and trailing  ",
    ];

    #[test]
    fn test_uppercase_is_idempotent() {
        for s in SAMPLES {
            let once = TextOp::Uppercase.apply(s);
            assert_eq!(TextOp::Uppercase.apply(&once), once);
        }
        assert_eq!(TextOp::Uppercase.apply("straße"), "STRASSE");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(TextOp::Lowercase.apply("MiXeD Case"), "mixed case");
    }

    #[test]
    fn test_reverse_round_trip() {
        for s in SAMPLES {
            let reversed = TextOp::Reverse.apply(s);
            assert_eq!(TextOp::Reverse.apply(&reversed), *s);
        }
        assert_eq!(TextOp::Reverse.apply("abc"), "cba");
    }

    #[test]
    fn test_capitalize_word_boundaries() {
        assert_eq!(TextOp::Capitalize.apply("hello world"), "Hello World");
        assert_eq!(TextOp::Capitalize.apply("don't stop"), "Don'T Stop");
        assert_eq!(TextOp::Capitalize.apply("snake_case word"), "Snake_case Word");
        assert_eq!(TextOp::Capitalize.apply("hELLO"), "HELLO");
        assert_eq!(TextOp::Capitalize.apply("élan vital"), "éLan Vital");
        assert_eq!(TextOp::Capitalize.apply("1st place"), "1st Place");
    }

    #[test]
    fn test_remove_spaces() {
        assert_eq!(TextOp::RemoveSpaces.apply(" a b\tc\n d "), "abcd");
        assert_eq!(TextOp::RemoveSpaces.apply("a\u{a0}b\u{feff}c\u{3000}d"), "abcd");
        // NEL is not whitespace to JS
        assert_eq!(TextOp::RemoveSpaces.apply("a\u{85}b"), "a\u{85}b");
    }

    #[test]
    fn test_remove_line_breaks() {
        assert_eq!(TextOp::RemoveLineBreaks.apply("a\nb\n\nc"), "a b  c");
        assert_eq!(TextOp::RemoveLineBreaks.apply("a\r\nb"), "a\r b");
    }

    #[test]
    fn test_sort_lines() {
        assert_eq!(TextOp::SortLines.apply("b\na\nc"), "a\nb\nc");
        // code-unit order: uppercase before lowercase
        assert_eq!(TextOp::SortLines.apply("b\nB\na"), "B\na\nb");
        // astral characters sort by their surrogates, ahead of U+FF5E
        assert_eq!(TextOp::SortLines.apply("\u{ff5e}\n🦀"), "🦀\n\u{ff5e}");
    }

    #[test]
    fn test_remove_duplicate_lines_keeps_first_seen_order() {
        assert_eq!(TextOp::RemoveDuplicateLines.apply("a\nb\na\nc"), "a\nb\nc");
        assert_eq!(TextOp::RemoveDuplicateLines.apply("x\n\nx\n"), "x\n");
    }

    #[test]
    fn test_base64_round_trip() {
        for s in SAMPLES {
            let encoded = TextOp::Base64Encode.apply(s);
            assert_eq!(TextOp::Base64Decode.apply(&encoded), *s);
        }
        assert_eq!(TextOp::Base64Encode.apply("hello"), "aGVsbG8=");
    }

    #[test]
    fn test_base64_decode_is_forgiving() {
        assert_eq!(TextOp::Base64Decode.apply("aGVsbG8"), "hello");
        assert_eq!(TextOp::Base64Decode.apply("aGVs\nbG8="), "hello");
    }

    #[test]
    fn test_base64_decode_sentinel() {
        assert_eq!(
            TextOp::Base64Decode.apply("!!!not-base64!!!"),
            "Invalid Base64 input"
        );
        assert_eq!(
            TextOp::Base64Decode.try_apply("!!!not-base64!!!"),
            Err(TextOpError::InvalidBase64)
        );
        // decodes, but not to UTF-8
        assert_eq!(TextOp::Base64Decode.apply("/w=="), "Invalid Base64 input");
    }

    #[test]
    fn test_url_round_trip() {
        for s in SAMPLES {
            let encoded = TextOp::UrlEncode.apply(s);
            assert_eq!(TextOp::UrlDecode.apply(&encoded), *s);
        }
        assert_eq!(TextOp::UrlEncode.apply("a b&c"), "a%20b%26c");
        assert_eq!(
            TextOp::UrlEncode.apply("Hello! (it's) *ok*"),
            "Hello!%20(it's)%20*ok*"
        );
        assert_eq!(TextOp::UrlEncode.apply("~a-b_c.d"), "~a-b_c.d");
        assert_eq!(TextOp::UrlEncode.apply("é/?#"), "%C3%A9%2F%3F%23");
    }

    #[test]
    fn test_url_decode_sentinel() {
        assert_eq!(TextOp::UrlDecode.apply("%"), "Invalid URL encoding");
        assert_eq!(TextOp::UrlDecode.apply("abc%2"), "Invalid URL encoding");
        assert_eq!(TextOp::UrlDecode.apply("%zz"), "Invalid URL encoding");
        assert_eq!(TextOp::UrlDecode.apply("%FF"), "Invalid URL encoding");
        assert_eq!(TextOp::UrlDecode.apply("a+b"), "a+b");
        assert_eq!(TextOp::UrlDecode.apply("caf%C3%A9"), "café");
    }

    #[test]
    fn test_labels_are_unique() {
        let labels = TextOp::ALL.iter().map(|op| op.label()).collect::<HashSet<_>>();
        assert_eq!(labels.len(), TextOp::ALL.len());
    }

    #[test]
    fn test_text_stats() {
        assert_eq!(TextStats::of(""), TextStats { words: 0, chars: 0 });
        assert_eq!(TextStats::of("   "), TextStats { words: 0, chars: 3 });
        assert_eq!(
            TextStats::of("two words\nand more"),
            TextStats {
                words: 4,
                chars: 18
            }
        );
        // one astral char is two UTF-16 units
        assert_eq!(TextStats::of("🦀"), TextStats { words: 1, chars: 2 });
    }
}
