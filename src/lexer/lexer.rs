use log::debug;

use crate::MK_TOKEN;

use super::{
    classify::{
        is_digit, is_grouping_symbol, is_letter_start, is_operator, is_reserved_word,
        is_whitespace, DIGIT_RUN, WORD_RUN,
    },
    tokens::{Token, TokenKind},
};

/// Tries to consume a token at the lexer's position. Returns false when the
/// current character does not start the kind of token it handles.
pub type Handler = fn(&mut Lexer) -> bool;

/// Tried in order; the first one that matches wins.
const HANDLERS: [Handler; 6] = [
    skip_handler,
    word_handler,
    number_handler,
    double_operator_handler,
    single_operator_handler,
    grouping_handler,
];

/// Scanning state for a single line of source text.
///
/// Positions are character indices, so columns count codepoints rather than
/// UTF-8 bytes.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    tokens: Vec<Token>,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, line: u32) -> Lexer<'a> {
        Lexer {
            source,
            chars: source.char_indices().collect(),
            tokens: vec![],
            pos: 0,
            line,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Pushes a token starting at the current position.
    pub fn push(&mut self, kind: TokenKind, lexeme: String) {
        let column = self.column();
        self.tokens.push(MK_TOKEN!(kind, lexeme, self.line, column));
    }

    pub fn at(&self) -> char {
        self.chars[self.pos].1
    }

    /// One character of lookahead past the current position.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).map(|(_, c)| *c)
    }

    pub fn remainder(&self) -> &'a str {
        match self.chars.get(self.pos) {
            Some((offset, _)) => &self.source[*offset..],
            None => "",
        }
    }

    pub fn column(&self) -> u32 {
        self.pos as u32 + 1
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

fn skip_handler(lexer: &mut Lexer) -> bool {
    if !is_whitespace(lexer.at()) {
        return false;
    }

    lexer.advance_n(1);
    true
}

// WORD_RUN and DIGIT_RUN only match ASCII, so byte length equals char count.
fn word_handler(lexer: &mut Lexer) -> bool {
    if !is_letter_start(lexer.at()) {
        return false;
    }
    let Some(found) = WORD_RUN.find(lexer.remainder()) else {
        return false;
    };

    let value = found.as_str();
    let kind = if is_reserved_word(value) {
        TokenKind::ReservedWord
    } else {
        TokenKind::Identifier
    };

    lexer.push(kind, String::from(value));
    lexer.advance_n(value.len());
    true
}

fn number_handler(lexer: &mut Lexer) -> bool {
    if !is_digit(lexer.at()) {
        return false;
    }
    let Some(found) = DIGIT_RUN.find(lexer.remainder()) else {
        return false;
    };

    let value = found.as_str();
    lexer.push(TokenKind::NumberLiteral, String::from(value));
    lexer.advance_n(value.len());
    true
}

fn double_operator_handler(lexer: &mut Lexer) -> bool {
    let Some(next) = lexer.peek() else {
        return false;
    };

    let pair: String = [lexer.at(), next].iter().collect();
    if !is_operator(&pair) {
        return false;
    }

    lexer.push(TokenKind::Operator, pair);
    lexer.advance_n(2);
    true
}

fn single_operator_handler(lexer: &mut Lexer) -> bool {
    let value = lexer.at().to_string();
    if !is_operator(&value) {
        return false;
    }

    lexer.push(TokenKind::Operator, value);
    lexer.advance_n(1);
    true
}

fn grouping_handler(lexer: &mut Lexer) -> bool {
    let c = lexer.at();
    if !is_grouping_symbol(c) {
        return false;
    }

    lexer.push(TokenKind::GroupingSymbol, c.to_string());
    lexer.advance_n(1);
    true
}

fn error_handler(lexer: &mut Lexer) {
    let c = lexer.at();
    debug!(
        "unrecognised character {:?} at line {}, column {}",
        c,
        lexer.line,
        lexer.column()
    );

    lexer.push(TokenKind::LexicalError, c.to_string());
    lexer.advance_n(1);
}

/// Splits one line into tokens, left to right.
///
/// Never fails: a character that starts no known token becomes a
/// `LexicalError` token holding just that character, and scanning resumes
/// right after it.
pub fn scan_line(source: &str, line: u32) -> Vec<Token> {
    let mut lex = Lexer::new(source, line);

    while !lex.at_eof() {
        let matched = HANDLERS.iter().any(|handler| handler(&mut lex));

        if !matched {
            error_handler(&mut lex);
        }
    }

    lex.into_tokens()
}
