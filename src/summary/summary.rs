use std::collections::HashMap;

use crate::lexer::tokens::{Token, TokenKind};

/// Count of tokens per category over a whole run.
///
/// Only categories that occurred are stored, so no entry is ever zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    counts: HashMap<TokenKind, usize>,
}

impl Summary {
    pub fn from_tokens<'t, I>(tokens: I) -> Summary
    where
        I: IntoIterator<Item = &'t Token>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }

        Summary { counts }
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Occurring categories, ascending by label.
    pub fn entries(&self) -> Vec<(TokenKind, usize)> {
        let mut entries: Vec<(TokenKind, usize)> =
            self.counts.iter().map(|(kind, count)| (*kind, *count)).collect();
        entries.sort_by(|a, b| a.0.label().cmp(b.0.label()));
        entries
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

pub fn summarize(tokens: &[Token]) -> Summary {
    Summary::from_tokens(tokens)
}
