// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use logos::Logos;

#[derive(Debug, PartialEq, Eq, Clone, Copy, logos::Logos)]
enum Token<'a> {
    /// Anything that is neither a delimiter nor an escape
    #[regex(r"[^,\\]+")]
    Text(&'a str),

    /// Escaped comma, unescaped on output
    #[token(r"\,")]
    EscapedComma,

    /// Any other escape, kept verbatim
    #[regex(r"\\[^,]")]
    Escape(&'a str),

    /// Dangling backslash at the end of input
    #[token(r"\")]
    Backslash,

    /// Value delimiter (,)
    #[token(",")]
    Comma,
}

/// Split a multi-valued property body on commas that are not escaped.
///
/// `\,` is unescaped to `,`; other escape sequences are left untouched. An
/// empty body has no values.
#[must_use]
pub fn split_list(body: &str) -> Vec<String> {
    if body.is_empty() {
        return Vec::new();
    }

    let mut values = Vec::new();
    let mut current = String::new();
    let mut lexer = Token::lexer(body);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Text(s) | Token::Escape(s)) => current.push_str(s),
            Ok(Token::EscapedComma) => current.push(','),
            Ok(Token::Backslash) => current.push('\\'),
            Ok(Token::Comma) => values.push(std::mem::take(&mut current)),
            Err(()) => current.push_str(lexer.slice()),
        }
    }
    values.push(current);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let mut lexer = Token::lexer(r"a\,b\nc,");

        assert_eq!(lexer.next().unwrap().unwrap(), Token::Text("a"));
        assert_eq!(lexer.next().unwrap().unwrap(), Token::EscapedComma);
        assert_eq!(lexer.next().unwrap().unwrap(), Token::Text("b"));
        assert_eq!(lexer.next().unwrap().unwrap(), Token::Escape(r"\n"));
        assert_eq!(lexer.next().unwrap().unwrap(), Token::Text("c"));
        assert_eq!(lexer.next().unwrap().unwrap(), Token::Comma);
        assert!(lexer.next().is_none());
    }

    #[test]
    fn splits_list() {
        #[rustfmt::skip]
        let cases: [(&str, &[&str]); 7] = [
            ("",                                  &[]),
            ("20200115",                          &["20200115"]),
            ("20200115T090000Z,20200116T090000Z", &["20200115T090000Z", "20200116T090000Z"]),
            (r"one\,two,three",                   &["one,two", "three"]),
            (r"keep\nescape",                     &[r"keep\nescape"]),
            ("a,,b",                              &["a", "", "b"]),
            (r"tail\",                            &[r"tail\"]),
        ];
        for (src, expected) in cases {
            assert_eq!(split_list(src), expected, "Failed to split: {src}");
        }
    }
}
