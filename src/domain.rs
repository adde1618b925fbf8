//! Immutable parse result: the three-way split of a name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A domain name split into public suffix (`tld`), registrable label
/// (`sld`) and remaining subdomain labels (`trd`).
///
/// `trd` is meaningful only when `sld` is present; `trd` itself may span
/// multiple labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    tld: String,
    sld: Option<String>,
    trd: Option<String>,
}

impl Domain {
    /// Build a domain from resolved components.
    pub fn new(tld: impl Into<String>, sld: Option<String>, trd: Option<String>) -> Self {
        Self {
            tld: tld.into(),
            sld,
            trd,
        }
    }

    /// The public suffix, always present once resolved.
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// The registrable label directly beneath the public suffix.
    pub fn sld(&self) -> Option<&str> {
        self.sld.as_deref()
    }

    /// Subdomain labels left of the registrable label.
    pub fn trd(&self) -> Option<&str> {
        self.trd.as_deref()
    }

    /// The `(trd, sld, tld)` component tuple.
    pub fn parts(&self) -> (Option<&str>, Option<&str>, &str) {
        (self.trd(), self.sld(), self.tld())
    }

    /// The registrable domain `"{sld}.{tld}"`, when a registrable label
    /// is present.
    pub fn domain(&self) -> Option<String> {
        self.sld().map(|sld| format!("{sld}.{}", self.tld))
    }

    /// The full subdomain name `"{trd}.{sld}.{tld}"`, when both parts
    /// left of the suffix are present.
    pub fn subdomain(&self) -> Option<String> {
        match (self.trd(), self.sld()) {
            (Some(trd), Some(sld)) => Some(format!("{trd}.{sld}.{}", self.tld)),
            _ => None,
        }
    }

    /// True when the name carries a registrable label.
    pub fn is_domain(&self) -> bool {
        self.sld.is_some()
    }

    /// True when the name carries subdomain labels as well.
    pub fn is_subdomain(&self) -> bool {
        self.sld.is_some() && self.trd.is_some()
    }
}

impl fmt::Display for Domain {
    /// Present components dot-joined, suffix last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(trd) = self.trd() {
            write!(f, "{trd}.")?;
        }
        if let Some(sld) = self.sld() {
            write!(f, "{sld}.")?;
        }
        write!(f, "{}", self.tld)
    }
}
