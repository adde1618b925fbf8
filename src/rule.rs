//! Rule model for the Public Suffix List.
//!
//! A rule is one declaration line of the list: a plain suffix
//! (`com`), a wildcard (`*.ck`), or an exception (`!www.ck`). All three
//! share storage; the kind tag selects the matching and decomposition
//! behavior.

use serde::{Deserialize, Serialize};

use crate::error::{PslError, Result};

/// Rule kind, derived from the first character of the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Plain suffix: `com` matches `com` and anything under it.
    Normal,
    /// Wildcard: `*.ck` additionally absorbs one unnamed label.
    Wildcard,
    /// Exception: `!www.ck` carves a registrable domain out of a wildcard.
    Exception,
}

/// A single Public Suffix List rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    kind: RuleKind,
    /// Canonical lowercase dotted suffix, without any `*.` or `!` markers.
    /// An Exception keeps its full original chain including the excluded
    /// leftmost label.
    value: String,
    /// Number of labels this rule consumes from a matching name. A
    /// wildcard's implicit starred label counts too.
    length: usize,
    /// Declared under the list's private-domains section.
    private: bool,
}

/// Count dot-separated labels; the empty string has none.
fn label_count(s: &str) -> usize {
    if s.is_empty() {
        0
    } else {
        s.split('.').count()
    }
}

impl Rule {
    /// Build a rule from one declaration line of the list.
    ///
    /// The first character selects the kind: `*` for wildcard, `!` for
    /// exception, anything else for a plain suffix. Empty text is
    /// rejected.
    pub fn build(text: &str, private: bool) -> Result<Self> {
        let Some(first) = text.chars().next() else {
            return Err(PslError::EmptyRule);
        };
        Ok(match first {
            '*' => {
                // `*` alone leaves an empty value; `*.foo.com` keeps `foo.com`.
                let value = text.strip_prefix("*.").unwrap_or("").to_string();
                let length = label_count(&value) + 1;
                Self {
                    kind: RuleKind::Wildcard,
                    value,
                    length,
                    private,
                }
            }
            '!' => {
                let value = text[1..].to_string();
                let length = label_count(&value);
                Self {
                    kind: RuleKind::Exception,
                    value,
                    length,
                    private,
                }
            }
            _ => Self {
                kind: RuleKind::Normal,
                value: text.to_string(),
                length: label_count(text),
                private,
            },
        })
    }

    /// The unwritten "if nothing matches, the rule is `*`" fallback:
    /// a wildcard with an empty value that consumes two labels. It is
    /// supplied by callers of `find`, never stored in a list.
    pub fn fallback() -> Self {
        Self {
            kind: RuleKind::Wildcard,
            value: String::new(),
            length: 2,
            private: false,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Canonical suffix string; the key under which a list stores this rule.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Labels this rule consumes from a matching name.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// An exception's effective matched suffix: its value with the
    /// excluded leftmost label dropped.
    pub(crate) fn tail(&self) -> &str {
        self.value.split_once('.').map_or("", |(_, tail)| tail)
    }

    /// True iff `name` equals the rule value or ends with `".{value}"`.
    pub fn matches(&self, name: &str) -> bool {
        match name.strip_suffix(self.value.as_str()) {
            Some(rest) => rest.is_empty() || rest.ends_with('.'),
            None => false,
        }
    }

    /// Split `name` into `(remainder, suffix)` according to this rule,
    /// or `None` when the rule leaves no registrable remainder.
    ///
    /// Each kind has its own boundary handling; the three are materially
    /// different and deliberately not funneled through one routine.
    pub fn decompose<'a>(&self, name: &'a str) -> Option<(&'a str, &'a str)> {
        match self.kind {
            RuleKind::Normal => {
                // The exact matched suffix is the value itself; a name
                // equal to the value has nothing registrable left of it.
                let rest = name.strip_suffix(self.value.as_str())?;
                let remainder = rest.strip_suffix('.')?;
                if remainder.is_empty() {
                    return None;
                }
                Some((remainder, &name[remainder.len() + 1..]))
            }
            RuleKind::Exception => {
                // The excluded leftmost label of the value rejoins the
                // registrable side: only the tail is the matched suffix.
                let rest = name.strip_suffix(self.tail())?;
                let remainder = rest.strip_suffix('.')?;
                if remainder.is_empty() {
                    return None;
                }
                Some((remainder, &name[remainder.len() + 1..]))
            }
            RuleKind::Wildcard => {
                // One implicit starred label sits left of the literal
                // suffix labels and belongs to the suffix. It needs a
                // separator further left to bound it; a bare
                // one-label-plus-suffix name does not match.
                let head = if self.value.is_empty() {
                    name
                } else {
                    let rest = name.strip_suffix(self.value.as_str())?;
                    rest.strip_suffix('.')?
                };
                let (remainder, _absorbed) = head.rsplit_once('.')?;
                if remainder.is_empty() {
                    return None;
                }
                Some((remainder, &name[remainder.len() + 1..]))
            }
        }
    }
}
