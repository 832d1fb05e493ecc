//! Regex-based transaction search with fail-open compilation.
//!
//! User search strings are expected to be invalid mid-keystroke (an
//! unterminated `[` while typing a class, for example), so compilation
//! never surfaces an error: anything that does not compile becomes an
//! inert matcher that filters nothing.

use crate::entities::TransactionModel;
use regex::{Regex, RegexBuilder};

/// A compiled representation of a user search string.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A usable pattern
    Compiled(Regex),
    /// No filtering: the input was empty or failed to compile
    Inert,
}

impl Matcher {
    /// Returns true when this matcher applies no filtering.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(self, Self::Inert)
    }
}

/// Compiles a raw, user-supplied search string into a [`Matcher`].
///
/// Empty input and syntactically invalid patterns both yield
/// [`Matcher::Inert`] rather than an error; an in-progress pattern must
/// never break the search path.
#[must_use]
pub fn compile_matcher(input: &str, case_sensitive: bool) -> Matcher {
    if input.is_empty() {
        return Matcher::Inert;
    }
    RegexBuilder::new(input)
        .case_insensitive(!case_sensitive)
        .build()
        .map_or(Matcher::Inert, Matcher::Compiled)
}

/// Filters a transaction snapshot against a matcher.
///
/// An inert matcher is the identity filter (input order preserved).
/// Otherwise a transaction is retained when the pattern matches its
/// description, its category, or its amount rendered as the canonical
/// decimal string.
#[must_use]
pub fn search_transactions(
    transactions: &[TransactionModel],
    matcher: &Matcher,
) -> Vec<TransactionModel> {
    match matcher {
        Matcher::Inert => transactions.to_vec(),
        Matcher::Compiled(regex) => transactions
            .iter()
            .filter(|t| {
                regex.is_match(&t.description)
                    || regex.is_match(&t.category)
                    || regex.is_match(&t.amount.to_string())
            })
            .cloned()
            .collect(),
    }
}

/// Wraps every matched span of `text` in `<mark>` tags for display.
/// Identity under an inert matcher; pure, no shared state.
#[must_use]
pub fn highlight(text: &str, matcher: &Matcher) -> String {
    match matcher {
        Matcher::Inert => text.to_string(),
        Matcher::Compiled(regex) => regex
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("<mark>{}</mark>", &caps[0])
            })
            .into_owned(),
    }
}
