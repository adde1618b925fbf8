//! Normalization and the parse facade.
//!
//! Three entry points over the same resolution pipeline, differing only
//! in how failures propagate: `parse` raises through, `is_valid`
//! collapses to a bool, `domain` collapses to an `Option`.

use crate::domain::Domain;
use crate::error::{PslError, Result};
use crate::list::{self, List};
use crate::rule::Rule;

/// Resolution options threaded through the `*_with` entry points.
#[derive(Debug, Clone)]
pub struct Options {
    /// Rule applied when nothing in the list matches. `None` makes
    /// unlisted names fail instead of falling back to `*`.
    pub default_rule: Option<Rule>,
    /// Skip rules from the list's private-domains section.
    pub ignore_private: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_rule: Some(Rule::fallback()),
            ignore_private: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip private-section rules during matching.
    pub fn with_ignore_private(mut self, ignore_private: bool) -> Self {
        self.ignore_private = ignore_private;
        self
    }

    /// Fail on unlisted names instead of applying the `*` fallback.
    pub fn without_default_rule(mut self) -> Self {
        self.default_rule = None;
        self
    }
}

/// Normalize a raw name into canonical form: surrounding whitespace
/// trimmed, exactly one FQDN trailing dot stripped, ASCII-lowercased.
///
/// No IDN handling; input is expected to be ASCII already. Fails with
/// `InvalidInput` when the result is blank, starts with a separator, or
/// embeds a URL scheme marker.
pub fn normalize(name: &str) -> Result<String> {
    let name = name.trim();
    let name = name.strip_suffix('.').unwrap_or(name);
    let name = name.to_ascii_lowercase();

    let reason = if name.is_empty() {
        Some("name is blank")
    } else if name.starts_with('.') {
        Some("name starts with a dot")
    } else if name.contains("://") {
        Some("name contains a scheme")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(PslError::InvalidInput { name, reason }),
        None => Ok(name),
    }
}

/// Parse `name` against the process-wide default list.
pub fn parse(name: &str) -> Result<Domain> {
    parse_with(name, &list::default_list(), &Options::default())
}

/// Parse `name` against an explicit list and options.
pub fn parse_with(name: &str, list: &List, options: &Options) -> Result<Domain> {
    let name = normalize(name)?;

    let rule = list
        .find(&name, options.default_rule.as_ref(), options.ignore_private)
        .ok_or_else(|| PslError::InvalidInput {
            name: name.clone(),
            reason: "no rule matches and no default rule is set",
        })?;

    let (remainder, suffix) = rule
        .decompose(&name)
        .ok_or_else(|| PslError::NotAllowed(name.clone()))?;

    // rightmost remainder label is the registrable one, the rest (if
    // any) stays joined as the subdomain part
    let (trd, sld) = match remainder.rsplit_once('.') {
        Some((trd, sld)) => (Some(trd.to_string()), sld.to_string()),
        None => (None, remainder.to_string()),
    };

    Ok(Domain::new(suffix, Some(sld), trd))
}

/// True when `name` parses to a domain with a registrable label.
pub fn is_valid(name: &str) -> bool {
    is_valid_with(name, &list::default_list(), &Options::default())
}

/// As `is_valid`, against an explicit list and options.
pub fn is_valid_with(name: &str, list: &List, options: &Options) -> bool {
    parse_with(name, list, options).is_ok()
}

/// The registrable domain of `name`, or `None` when it has none.
pub fn domain(name: &str) -> Option<String> {
    domain_with(name, &list::default_list(), &Options::default())
}

/// As `domain`, against an explicit list and options.
pub fn domain_with(name: &str, list: &List, options: &Options) -> Option<String> {
    match parse_with(name, list, options) {
        Ok(parsed) => parsed.domain(),
        Err(err) if err.is_name_error() => None,
        Err(err) => {
            // nothing else can surface from the resolution pipeline
            log::warn!("unexpected error resolving `{name}`: {err}");
            None
        }
    }
}
