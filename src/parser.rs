//! Line-oriented parser for Public Suffix List text.
//!
//! The published format: blank lines are skipped, `//` starts a comment,
//! and the literal marker `===BEGIN PRIVATE DOMAINS===` inside a comment
//! switches subsequent declarations into the private scope. Every other
//! non-blank line is a rule declaration.

use std::fs;
use std::path::Path;

use crate::error::{PslError, Result};
use crate::list::List;
use crate::rule::Rule;

/// Marker comment that opens the private-domains section of the list.
const PRIVATE_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";

/// Parse list text into a `List`.
///
/// With `private_domains` set to false, parsing stops at the private
/// section marker and the resulting list carries ICANN rules only.
pub fn parse_list(text: &str, private_domains: bool) -> Result<List> {
    let mut list = List::new();
    let mut private = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("//") {
            if line.contains(PRIVATE_MARKER) {
                if !private_domains {
                    break;
                }
                private = true;
            }
            continue;
        }
        list.add(Rule::build(line, private)?);
    }

    log::debug!(
        "parsed public suffix list: {} rules (private domains {})",
        list.len(),
        if private_domains { "enabled" } else { "disabled" }
    );
    Ok(list)
}

/// Parse a list from a file on disk.
pub fn parse_list_file(path: impl AsRef<Path>, private_domains: bool) -> Result<List> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PslError::ListFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_list(&text, private_domains)
}
