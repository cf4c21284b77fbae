use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// A single entry of the rule table. Rules without a kind are ignorable.
pub struct RegexPattern {
    regex: Regex,
    kind: Option<TokenKind>,
}

lazy_static! {
    /// Ordered rule table. The first rule matching a non-empty prefix wins, so
    /// keywords sit above identifiers and multi-character operators above
    /// their single-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(r"\s+"),
        MK_PATTERN!(r"//.*"),
        MK_PATTERN!(r"/\*[\s\S]*?\*/"),

        MK_PATTERN!(";", TokenKind::Semicolon),
        MK_PATTERN!(r"\{", TokenKind::OpenCurly),
        MK_PATTERN!(r"\}", TokenKind::CloseCurly),
        MK_PATTERN!(r"\(", TokenKind::OpenParen),
        MK_PATTERN!(r"\)", TokenKind::CloseParen),
        MK_PATTERN!(",", TokenKind::Comma),
        MK_PATTERN!(r"\.", TokenKind::Dot),
        MK_PATTERN!(r"\[", TokenKind::OpenBracket),
        MK_PATTERN!(r"\]", TokenKind::CloseBracket),

        MK_PATTERN!(r"let\b", TokenKind::Let),
        MK_PATTERN!(r"if\b", TokenKind::If),
        MK_PATTERN!(r"else\b", TokenKind::Else),
        MK_PATTERN!(r"true\b", TokenKind::True),
        MK_PATTERN!(r"false\b", TokenKind::False),
        MK_PATTERN!(r"null\b", TokenKind::Null),
        MK_PATTERN!(r"while\b", TokenKind::While),
        MK_PATTERN!(r"do\b", TokenKind::Do),
        MK_PATTERN!(r"for\b", TokenKind::For),
        MK_PATTERN!(r"def\b", TokenKind::Def),
        MK_PATTERN!(r"return\b", TokenKind::Return),
        MK_PATTERN!(r"class\b", TokenKind::Class),
        MK_PATTERN!(r"new\b", TokenKind::New),
        MK_PATTERN!(r"super\b", TokenKind::Super),
        MK_PATTERN!(r"extends\b", TokenKind::Extends),
        MK_PATTERN!(r"this\b", TokenKind::This),

        MK_PATTERN!("[0-9]+", TokenKind::Number),
        MK_PATTERN!("[A-Za-z0-9_]+", TokenKind::Identifier),

        MK_PATTERN!("=>", TokenKind::Arrow),
        MK_PATTERN!("[=!]=", TokenKind::EqualityOperator),
        MK_PATTERN!("=", TokenKind::SimpleAssign),
        MK_PATTERN!(r"[*/+\-]=", TokenKind::ComplexAssign),
        MK_PATTERN!("[<>]=?", TokenKind::RelationalOperator),
        MK_PATTERN!("&&", TokenKind::LogicalAnd),
        MK_PATTERN!(r"\|\|", TokenKind::LogicalOr),
        MK_PATTERN!("!", TokenKind::LogicalNot),
        MK_PATTERN!(r"[+\-]", TokenKind::AdditiveOperator),
        MK_PATTERN!("[*/]", TokenKind::MultiplicativeOperator),

        MK_PATTERN!(r#""[^"]*""#, TokenKind::String),
        MK_PATTERN!("'[^']*'", TokenKind::String),
    ];
}

/// Pull-based tokenizer. Each call to [`Tokenizer::next_token`] scans exactly
/// one significant token from the cursor onwards.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    source: String,
    cursor: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        let mut tokenizer = Tokenizer::default();
        tokenizer.init(source);
        tokenizer
    }

    /// Replaces the source text and rewinds the cursor to its start.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.cursor += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.cursor..]
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Returns the next significant token, `Ok(None)` once the input is
    /// exhausted, or a lexical error if no rule matches at the cursor.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        'scan: while self.has_more_tokens() {
            for pattern in PATTERNS.iter() {
                let value = match pattern.regex.find(self.remainder()) {
                    Some(matched) if !matched.is_empty() => matched.as_str().to_string(),
                    _ => continue,
                };

                self.advance_n(value.len());

                match pattern.kind {
                    Some(kind) => {
                        tracing::trace!(kind = %kind, value = %value, "scanned token");
                        return Ok(Some(MK_TOKEN!(kind, value)));
                    }
                    None => continue 'scan,
                }
            }

            let token = self.at().map(String::from).unwrap_or_default();
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token }));
        }

        Ok(None)
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next_token();
        if next.is_err() {
            // Scanning cannot resume past an unrecognised character.
            self.cursor = self.source.len();
        }
        next.transpose()
    }
}

/// Scans the whole source eagerly. The parser does not use this; it pulls
/// tokens one at a time instead.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::new(source).collect()
}
