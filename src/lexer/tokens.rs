use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ReservedWord,
    Identifier,
    Operator,
    GroupingSymbol,
    NumberLiteral,
    LexicalError,
}

impl TokenKind {
    pub const ALL: [TokenKind; 6] = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::GroupingSymbol,
        TokenKind::NumberLiteral,
        TokenKind::LexicalError,
    ];

    /// Human readable category name, also the sort key of the count table.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "Reserved Word",
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator => "Operator",
            TokenKind::GroupingSymbol => "Grouping Symbol",
            TokenKind::NumberLiteral => "Number Literal",
            TokenKind::LexicalError => "Lexical Error",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}
