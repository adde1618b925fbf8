//! PSL Engine - A high-performance Public Suffix List engine for Rust
//!
//! This library classifies an already-ASCII domain name into its public
//! suffix, registrable label, and subdomain labels using an offline rule
//! list, with support for:
//! - Normal, wildcard (`*.ck`) and exception (`!www.ck`) rules
//! - Longest-match-wins resolution with exception override
//! - Private-domains section toggling
//! - O(labels) lookups per name, independent of list size
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{domain, is_valid, parse};
//!
//! let name = parse("www.example.co.uk").unwrap();
//! assert_eq!(name.tld(), "co.uk");
//! assert_eq!(name.sld(), Some("example"));
//! assert_eq!(name.trd(), Some("www"));
//! assert_eq!(name.domain(), Some("example.co.uk".to_string()));
//!
//! assert_eq!(domain("www.example.co.uk"), Some("example.co.uk".to_string()));
//! assert!(is_valid("example.com"));
//! assert!(!is_valid("http://example.com"));
//! ```
//!
//! # Rule Syntax
//!
//! The list is line-oriented; `//` starts a comment and the literal
//! marker `===BEGIN PRIVATE DOMAINS===` opens the private scope.
//!
//! | Declaration | Kind | Behavior |
//! |-------------|-----------|----------|
//! | `com` | Normal | `com` is a public suffix |
//! | `*.ck` | Wildcard | every label under `ck` is a public suffix |
//! | `!www.ck` | Exception | `www.ck` is registrable despite `*.ck` |
//!
//! # Custom lists
//!
//! ```rust
//! use psl_engine_r::{parse_list, parse_with, Options};
//!
//! let list = parse_list("test", true).unwrap();
//! let name = parse_with("www.example.test", &list, &Options::default()).unwrap();
//! assert_eq!(name.parts(), (Some("www"), Some("example"), "test"));
//! ```

pub mod domain;
pub mod error;
pub mod list;
pub mod parser;
pub mod psl;
pub mod rule;

// Re-export commonly used items
pub use domain::Domain;
pub use error::{PslError, Result};
pub use list::{default_list, replace_default_list, List};
pub use parser::{parse_list, parse_list_file};
pub use psl::{domain, domain_with, is_valid, is_valid_with, normalize, parse, parse_with, Options};
pub use rule::{Rule, RuleKind};
