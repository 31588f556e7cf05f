//! Locality grammar parser.
//!
//! Reference text may start with a compact qualifier grammar narrowing the
//! citation to a part of its target: `clause 3.1, table 2, see elsewhere`
//! yields two localities and the remainder `see elsewhere`. Each step is
//! a keyword from a fixed vocabulary followed by a reference token and an
//! optional `,`/`:` separator; the loop stops at the first word that is
//! not a keyword. Matching is greedy from the front of the string and
//! every match strictly consumes input, so termination is structural.

/// Locality keyword vocabulary.
///
/// Keywords are matched case-insensitively and rendered lowercase.
/// `Whole` and `Title` qualify the entire target and take no reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalityKind {
    Section,
    Clause,
    Part,
    Paragraph,
    Chapter,
    Page,
    Table,
    Annex,
    Figure,
    Example,
    Note,
    Formula,
    Whole,
    Title,
}

impl LocalityKind {
    /// Match a keyword, case-insensitively.
    pub fn from_keyword(word: &str) -> Option<Self> {
        let kind = match word.to_ascii_lowercase().as_str() {
            "section" => Self::Section,
            "clause" => Self::Clause,
            "part" => Self::Part,
            "paragraph" => Self::Paragraph,
            "chapter" => Self::Chapter,
            "page" => Self::Page,
            "table" => Self::Table,
            "annex" => Self::Annex,
            "figure" => Self::Figure,
            "example" => Self::Example,
            "note" => Self::Note,
            "formula" => Self::Formula,
            "whole" => Self::Whole,
            "title" => Self::Title,
            _ => return None,
        };
        Some(kind)
    }

    /// Lowercase keyword, as written into the `Type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Clause => "clause",
            Self::Part => "part",
            Self::Paragraph => "paragraph",
            Self::Chapter => "chapter",
            Self::Page => "page",
            Self::Table => "table",
            Self::Annex => "annex",
            Self::Figure => "figure",
            Self::Example => "example",
            Self::Note => "note",
            Self::Formula => "formula",
            Self::Whole => "whole",
            Self::Title => "title",
        }
    }

    /// Whether this keyword must be followed by a reference token.
    pub fn takes_reference(&self) -> bool {
        !matches!(self, Self::Whole | Self::Title)
    }
}

/// One parsed locality qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality {
    pub kind: LocalityKind,
    /// Literal reference text (`3`, `3.1`, a quoted string), absent for
    /// whole-target kinds.
    pub reference: Option<String>,
}

/// Parse all leading locality qualifiers off the front of `text`.
///
/// Returns the qualifiers in order plus the unconsumed remainder. Text
/// that matches nothing comes back whole as the remainder.
pub fn parse_localities(text: &str) -> (Vec<Locality>, &str) {
    let mut localities = Vec::new();
    let mut rest = text;
    while let Some((locality, tail)) = parse_locality(rest) {
        localities.push(locality);
        rest = tail;
    }
    (localities, rest)
}

/// Parse a single locality from the front of the input, returning it and
/// the unconsumed tail, or `None` if the input does not start with one.
fn parse_locality(input: &str) -> Option<(Locality, &str)> {
    let s = input.trim_start();
    let word_end = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let kind = LocalityKind::from_keyword(&s[..word_end])?;
    let mut rest = &s[word_end..];

    let reference = if kind.takes_reference() {
        // Keyword and reference must be whitespace-separated.
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            return None;
        }
        let (token, tail) = parse_reference_token(trimmed)?;
        rest = tail;
        Some(token)
    } else {
        None
    };

    let rest = rest.strip_prefix([',', ':']).unwrap_or(rest);
    Some((Locality { kind, reference }, rest.trim_start()))
}

/// A reference token is either a quoted string or a run of characters up
/// to whitespace, `,`, `:`, or `-`.
fn parse_reference_token(s: &str) -> Option<(String, &str)> {
    if let Some(inner) = s.strip_prefix('"') {
        let end = inner.find('"')?;
        if end == 0 {
            return None;
        }
        return Some((inner[..end].to_string(), &inner[end + 1..]));
    }
    let end = s
        .find(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | '-'))
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((s[..end].to_string(), &s[end..]))
}
