//! Modifier tokens and pipe-separated modifier lists.
//!
//! A modifier argument such as `"public|internal"` is split on `|` into
//! tokens; the list matches when any token does. How a raw piece of text
//! becomes a token is the caller's choice: `has-modifier` compares pieces
//! exactly, `type-has-modifier` trims and lowercases them first.

mod vocabulary;

use std::fmt;

pub use vocabulary::{ModifierRule, ModifierVocabulary};

/// A symbolic accessibility or behaviour keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModifierToken {
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
    Static,
    Virtual,
    Abstract,
    Sealed,
    Override,
}

impl ModifierToken {
    /// Every token, in vocabulary table order.
    pub const ALL: [ModifierToken; 11] = [
        ModifierToken::Public,
        ModifierToken::Private,
        ModifierToken::Protected,
        ModifierToken::Internal,
        ModifierToken::ProtectedInternal,
        ModifierToken::PrivateProtected,
        ModifierToken::Static,
        ModifierToken::Virtual,
        ModifierToken::Abstract,
        ModifierToken::Sealed,
        ModifierToken::Override,
    ];

    /// Canonical spelling in rule text.
    pub const fn as_str(self) -> &'static str {
        match self {
            ModifierToken::Public => "public",
            ModifierToken::Private => "private",
            ModifierToken::Protected => "protected",
            ModifierToken::Internal => "internal",
            ModifierToken::ProtectedInternal => "protected internal",
            ModifierToken::PrivateProtected => "private protected",
            ModifierToken::Static => "static",
            ModifierToken::Virtual => "virtual",
            ModifierToken::Abstract => "abstract",
            ModifierToken::Sealed => "sealed",
            ModifierToken::Override => "override",
        }
    }

    /// Resolve text that must equal a canonical spelling byte for byte.
    pub fn from_exact(text: &str) -> Option<Self> {
        let token = match text {
            "public" => ModifierToken::Public,
            "private" => ModifierToken::Private,
            "protected" => ModifierToken::Protected,
            "internal" => ModifierToken::Internal,
            "protected internal" => ModifierToken::ProtectedInternal,
            "private protected" => ModifierToken::PrivateProtected,
            "static" => ModifierToken::Static,
            "virtual" => ModifierToken::Virtual,
            "abstract" => ModifierToken::Abstract,
            "sealed" => ModifierToken::Sealed,
            "override" => ModifierToken::Override,
            _ => return None,
        };
        Some(token)
    }

    /// Resolve text after trimming surrounding whitespace and lowercasing.
    ///
    /// Inner whitespace is kept: `"protected  internal"` does not resolve.
    pub fn from_normalized(text: &str) -> Option<Self> {
        Self::from_exact(&text.trim().to_lowercase())
    }

    /// Whether the token describes types as well as members.
    ///
    /// `virtual` and `override` only exist on members.
    pub const fn is_type_level(self) -> bool {
        !matches!(self, ModifierToken::Virtual | ModifierToken::Override)
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ModifierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of modifier tokens, matched with OR semantics.
///
/// Pieces that do not resolve to a token are dropped, since an unknown
/// modifier can never match. The list may therefore be empty even though
/// splitting always yields at least one piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifierExpression {
    tokens: Vec<ModifierToken>,
}

impl ModifierExpression {
    pub const SEPARATOR: char = '|';

    /// Split on `|` and resolve each piece with [`ModifierToken::from_exact`].
    pub fn parse_exact(text: &str) -> Self {
        Self::parse_with(text, ModifierToken::from_exact)
    }

    /// Split on `|` and resolve each piece with [`ModifierToken::from_normalized`].
    pub fn parse_normalized(text: &str) -> Self {
        Self::parse_with(text, ModifierToken::from_normalized)
    }

    fn parse_with(text: &str, resolve: fn(&str) -> Option<ModifierToken>) -> Self {
        let tokens = text
            .split(Self::SEPARATOR)
            .filter_map(|piece| {
                let token = resolve(piece);
                if token.is_none() {
                    tracing::trace!(modifier = piece, "ignoring unknown modifier");
                }
                token
            })
            .collect();
        ModifierExpression { tokens }
    }

    pub fn tokens(&self) -> &[ModifierToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Test tokens in order, stopping at the first one that holds.
    pub fn matches_any(&self, test: impl FnMut(ModifierToken) -> bool) -> bool {
        self.tokens.iter().copied().any(test)
    }
}
