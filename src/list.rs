//! Rule list and matching engine.
//!
//! A `List` indexes rules by their canonical suffix string, so resolving
//! a name costs one hash lookup per label instead of a scan over the
//! whole list.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::parser::parse_list;
use crate::rule::{Rule, RuleKind};

/// Bundled dataset used to build the process-wide default list.
const BUNDLED_LIST: &str = include_str!("../data/public_suffix_list.dat");

/// A set of Public Suffix List rules keyed by suffix string.
#[derive(Debug, Clone, Default)]
pub struct List {
    rules: HashMap<String, Rule>,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, overwriting any rule with the same value
    /// regardless of privacy scope.
    pub fn add(&mut self, rule: Rule) {
        self.rules.insert(rule.value().to_string(), rule);
    }

    /// Remove all rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules whose suffix string is a label-aligned suffix of `name`,
    /// ordered narrowest (fewest labels) to broadest.
    ///
    /// Candidate suffixes are built rightmost-label-first and looked up
    /// exactly, so the cost is O(labels in `name`) hash lookups,
    /// independent of list size.
    pub fn filter(&self, name: &str, ignore_private: bool) -> Vec<&Rule> {
        let mut found = Vec::new();
        if name.is_empty() {
            return found;
        }
        // Walk the dots from the right; each dot bounds one candidate
        // suffix slice, the full name is the final candidate.
        let mut pos = name.len();
        while let Some(dot) = name[..pos].rfind('.') {
            self.lookup(&name[dot + 1..], ignore_private, &mut found);
            pos = dot;
        }
        self.lookup(name, ignore_private, &mut found);
        found
    }

    fn lookup<'a>(&'a self, candidate: &str, ignore_private: bool, found: &mut Vec<&'a Rule>) {
        if let Some(rule) = self.rules.get(candidate) {
            if !(ignore_private && rule.is_private()) {
                found.push(rule);
            }
        }
    }

    /// Resolve `name` to its winning rule.
    ///
    /// An exception rule anywhere among the candidates wins immediately;
    /// otherwise the rule consuming the most labels wins, later
    /// candidates taking ties. With no candidate at all, `default` is
    /// returned as supplied.
    pub fn find<'a>(
        &'a self,
        name: &str,
        default: Option<&'a Rule>,
        ignore_private: bool,
    ) -> Option<&'a Rule> {
        let mut best: Option<&Rule> = None;
        for rule in self.filter(name, ignore_private) {
            if rule.kind() == RuleKind::Exception {
                log::trace!("find({name}): exception rule `{}` wins", rule.value());
                return Some(rule);
            }
            match best {
                Some(prev) if prev.length() > rule.length() => {}
                _ => best = Some(rule),
            }
        }
        best.or(default)
    }

    /// Iterate over the stored rules in arbitrary order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }
}

static DEFAULT_LIST: Lazy<RwLock<Arc<List>>> = Lazy::new(|| {
    let list = parse_list(BUNDLED_LIST, true)
        .expect("BUNDLED_LIST: bundled dataset is invalid");
    log::debug!("built default public suffix list: {} rules", list.len());
    RwLock::new(Arc::new(list))
});

/// The process-wide default list, lazily built once from the bundled
/// dataset.
pub fn default_list() -> Arc<List> {
    DEFAULT_LIST.read().clone()
}

/// Replace the process-wide default list, returning the previous one so
/// setup code and tests can save and restore it.
///
/// This is a setup-time operation; replacement racing concurrent readers
/// is out of contract.
pub fn replace_default_list(list: List) -> Arc<List> {
    let mut guard = DEFAULT_LIST.write();
    std::mem::replace(&mut *guard, Arc::new(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn list_of(lines: &[(&str, bool)]) -> List {
        let mut list = List::new();
        for (text, private) in lines {
            list.add(Rule::build(text, *private).unwrap());
        }
        list
    }

    #[test]
    fn test_add_and_len() {
        let mut list = List::new();
        assert!(list.is_empty());
        list.add(Rule::build("com", false).unwrap());
        list.add(Rule::build("co.uk", false).unwrap());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_overwrites_by_value_across_scopes() {
        let mut list = List::new();
        list.add(Rule::build("example.com", false).unwrap());
        list.add(Rule::build("example.com", true).unwrap());
        assert_eq!(list.len(), 1);
        let rule = list.filter("example.com", false)[0];
        assert!(rule.is_private());
    }

    #[test]
    fn test_clear() {
        let mut list = list_of(&[("com", false), ("uk", false)]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_filter_orders_narrowest_to_broadest() {
        let list = list_of(&[("uk", false), ("co.uk", false), ("example.co.uk", false)]);
        let found = list.filter("www.example.co.uk", false);
        let values: Vec<&str> = found.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec!["uk", "co.uk", "example.co.uk"]);
    }

    #[test]
    fn test_filter_requires_label_alignment() {
        let list = list_of(&[("ck", false)]);
        // "rock" ends with "ck" but is a single label, no candidate matches
        assert!(list.filter("rock", false).is_empty());
        assert_eq!(list.filter("www.ck", false).len(), 1);
    }

    #[test]
    fn test_filter_skips_private_when_ignored() {
        let list = list_of(&[("com", false), ("blogspot.com", true)]);
        let all = list.filter("foo.blogspot.com", false);
        assert_eq!(all.len(), 2);
        let public_only = list.filter("foo.blogspot.com", true);
        let values: Vec<&str> = public_only.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec!["com"]);
    }

    #[test]
    fn test_find_longest_wins() {
        let list = list_of(&[("uk", false), ("co.uk", false)]);
        let rule = list.find("example.co.uk", None, false).unwrap();
        assert_eq!(rule.value(), "co.uk");
    }

    #[test]
    fn test_find_exception_beats_longer_match() {
        // the wildcard consumes two labels, the exception only matches one,
        // yet the exception must win
        let list = list_of(&[("*.ck", false), ("!www.ck", false)]);
        let rule = list.find("www.ck", None, false).unwrap();
        assert_eq!(rule.kind(), RuleKind::Exception);
        assert_eq!(rule.value(), "www.ck");
    }

    #[test]
    fn test_find_wildcard_length_beats_shorter_normal() {
        // "*.co.uk" consumes 3 labels and outranks the 1-label "uk" rule
        let list = list_of(&[("uk", false), ("*.co.uk", false)]);
        let rule = list.find("example.foo.co.uk", None, false).unwrap();
        assert_eq!(rule.kind(), RuleKind::Wildcard);
        assert_eq!(rule.value(), "co.uk");
    }

    #[test]
    fn test_add_wildcard_keyed_by_stripped_value() {
        // a wildcard is stored under its stripped value, so "*.uk"
        // overwrites a plain "uk" rule
        let list = list_of(&[("uk", false), ("*.uk", false)]);
        assert_eq!(list.len(), 1);
        let rule = list.find("co.uk", None, false).unwrap();
        assert_eq!(rule.kind(), RuleKind::Wildcard);
    }

    #[test]
    fn test_find_tie_keeps_broader_candidate() {
        // A 2-label wildcard (length 3) ties a 3-label normal rule; the
        // broader candidate, seen later, wins the tie.
        let list = list_of(&[("*.b.c", false), ("a.b.c", false)]);
        let rule = list.find("x.a.b.c", None, false).unwrap();
        assert_eq!(rule.value(), "a.b.c");
        assert_eq!(rule.kind(), RuleKind::Normal);
    }

    #[test]
    fn test_find_empty_filter_returns_default() {
        let list = list_of(&[("com", false)]);
        let fallback = Rule::fallback();
        let rule = list.find("example.test", Some(&fallback), false).unwrap();
        assert_eq!(rule.value(), "");
        assert!(list.find("example.test", None, false).is_none());
    }

    #[test]
    fn test_default_list_is_populated() {
        let list = default_list();
        assert!(!list.is_empty());
        assert!(list.find("example.co.uk", None, false).is_some());
        // every stored rule carries a non-empty key
        assert!(list.rules().all(|r| !r.value().is_empty()));
    }
}
