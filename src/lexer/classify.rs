//! Fixed character and lexeme tables used by the line scanner.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("for");
        set.insert("while");
        set.insert("return");
        set.insert("func");
        set.insert("var");
        set.insert("package");
        set.insert("import");
        set
    };

    pub static ref OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("+");
        set.insert("-");
        set.insert("*");
        set.insert("/");
        set.insert("=");
        set.insert("<");
        set.insert(">");
        set.insert("==");
        set.insert("!=");
        set.insert("<=");
        set.insert(">=");
        set
    };

    pub static ref GROUPING_SYMBOLS: HashSet<char> = {
        let mut set = HashSet::new();
        set.insert('(');
        set.insert(')');
        set.insert('{');
        set.insert('}');
        set.insert('[');
        set.insert(']');
        set.insert(';');
        // no string literals: a quote is a lone grouping symbol
        set.insert('"');
        set
    };

    /// Maximal identifier run anchored at the start of the haystack.
    pub static ref WORD_RUN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    /// Maximal digit run anchored at the start of the haystack.
    pub static ref DIGIT_RUN: Regex = Regex::new("^[0-9]+").unwrap();
}

pub fn is_letter_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_identifier_continuation(c: char) -> bool {
    is_letter_start(c) || is_digit(c)
}

pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_reserved_word(lexeme: &str) -> bool {
    RESERVED_WORDS.contains(lexeme)
}

/// Matches both the one and two character forms.
pub fn is_operator(lexeme: &str) -> bool {
    OPERATORS.contains(lexeme)
}

pub fn is_grouping_symbol(c: char) -> bool {
    GROUPING_SYMBOLS.contains(&c)
}
