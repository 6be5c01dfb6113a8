//! Matcher strategies for the prefix cascade.
//!
//! Each tier of the cascade is a [`Matcher`]: a predicate over subdirectory
//! names built from the user's prefix. [`cascade`] returns them in the
//! order they must be tried.

use std::fmt;

use regex::Regex;

use crate::error::Result;

/// Which tier of the cascade produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Case-sensitive prefix match.
    Plain,
    /// Case-insensitive prefix match.
    Caseless,
    /// `.` as a wildcard, anchored at the start of the name.
    Wildcard,
    /// `.` as a wildcard, matched anywhere in the name.
    NonPrefixWildcard,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Caseless => write!(f, "caseless"),
            Self::Wildcard => write!(f, "wildcard"),
            Self::NonPrefixWildcard => write!(f, "non-prefix-wildcard"),
        }
    }
}

/// A single matching strategy.
pub trait Matcher {
    /// The tier this matcher implements.
    fn tier(&self) -> MatchTier;

    /// Whether `name` matches.
    fn matches(&self, name: &str) -> bool;
}

/// Tier 1.
#[derive(Debug)]
pub struct PlainPrefix {
    prefix: String,
}

impl Matcher for PlainPrefix {
    fn tier(&self) -> MatchTier {
        MatchTier::Plain
    }

    fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }
}

/// Tier 2.
#[derive(Debug)]
pub struct CaselessPrefix {
    lowered: String,
}

impl Matcher for CaselessPrefix {
    fn tier(&self) -> MatchTier {
        MatchTier::Caseless
    }

    fn matches(&self, name: &str) -> bool {
        name.to_lowercase().starts_with(&self.lowered)
    }
}

/// Tiers 3 and 4: every `.` in the prefix matches zero or more characters.
#[derive(Debug)]
pub struct DotWildcard {
    tier: MatchTier,
    pattern: Regex,
}

impl DotWildcard {
    fn new(prefix: &str, anchored: bool) -> Result<Self> {
        let body = prefix
            .split('.')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let (tier, source) = if anchored {
            (MatchTier::Wildcard, format!("^{body}"))
        } else {
            (MatchTier::NonPrefixWildcard, body)
        };
        Ok(Self {
            tier,
            pattern: Regex::new(&source)?,
        })
    }
}

impl Matcher for DotWildcard {
    fn tier(&self) -> MatchTier {
        self.tier
    }

    fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

/// Builds the ordered list of matchers for `prefix`.
///
/// * plain, always
/// * caseless, when `allow_caseless`
/// * wildcard, when the prefix contains a `.`
/// * non-prefix-wildcard, when the wildcard pattern does not already begin
///   with a wildcard (the prefix does not start with `.`)
///
/// # Errors
///
/// Returns [`crate::Error::Pattern`] if a wildcard pattern fails to compile.
pub fn cascade(prefix: &str, allow_caseless: bool) -> Result<Vec<Box<dyn Matcher>>> {
    let mut tiers: Vec<Box<dyn Matcher>> = vec![Box::new(PlainPrefix {
        prefix: prefix.to_string(),
    })];

    if allow_caseless {
        tiers.push(Box::new(CaselessPrefix {
            lowered: prefix.to_lowercase(),
        }));
    }

    if prefix.contains('.') {
        tiers.push(Box::new(DotWildcard::new(prefix, true)?));
        if !prefix.starts_with('.') {
            tiers.push(Box::new(DotWildcard::new(prefix, false)?));
        }
    }

    Ok(tiers)
}
