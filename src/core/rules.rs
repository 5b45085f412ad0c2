//! Substitution engine: ordered regex rewriting of whole-file text.
//!
//! Rules run one after another over the accumulated text: rule N sees the output
//! of rule N-1. Every non-overlapping match of a rule is replaced, scanning left to
//! right. Replacement templates are inserted literally, so `$1` in a template is
//! plain text rather than a capture reference.

use crate::error::{Error, Result};
use regex::{NoExpand, Regex};
use serde::Serialize;

/// A single pattern/replacement pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        Ok(Rule {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// A named, ordered list of rules applied to every file of one phase.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: String,
    rules: Vec<Rule>,
}

/// Text after a rule set ran over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Total matches replaced across all rules.
    pub replacements: usize,
}

/// Serializable view of a rule, for previews.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub pattern: String,
    pub replacement: String,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        RuleSet {
            name: name.into(),
            rules,
        }
    }

    /// Build a rule set from `(pattern, replacement)` literals.
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> Result<Self> {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| Rule::new(pattern, *replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet::new(name, rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn apply(&self, text: &str) -> String {
        apply_rules(text, &self.rules)
    }

    /// Apply the rules and count how many matches fired.
    pub fn rewrite(&self, text: &str) -> Rewrite {
        let mut content = text.to_string();
        let mut replacements = 0;

        for rule in &self.rules {
            let count = rule.pattern.find_iter(&content).count();
            if count == 0 {
                continue;
            }
            replacements += count;
            content = rule
                .pattern
                .replace_all(&content, NoExpand(&rule.replacement))
                .into_owned();
        }

        Rewrite {
            content,
            replacements,
        }
    }

    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.rules
            .iter()
            .map(|r| RuleSummary {
                pattern: r.pattern().to_string(),
                replacement: r.replacement.clone(),
            })
            .collect()
    }
}

/// Apply `rules` in order to `text`. Pure and deterministic.
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        rule.pattern
            .replace_all(&acc, NoExpand(&rule.replacement))
            .into_owned()
    })
}
