//! Property-group table.
//!
//! The table decides which utilities conflict with each other. It is keyed by
//! utility *stem*: a utility matches a stem when it equals the stem or starts
//! with `stem-`. The longest matching stem wins, so `border-b-2` is looked up
//! under `border-b` rather than `border`.
//!
//! Each stem holds an ordered list of [`GroupCase`]s. The remainder of the
//! utility after `stem-` (its *value*) is checked against each case in turn,
//! and the first case that accepts it names the property group. This is how
//! one stem can feed several groups:
//!
//! | Token | Stem | Value | Group |
//! |-------|------|-------|-------|
//! | `text-sm` | `text` | `sm` | `font-size` |
//! | `text-muted` | `text` | `muted` | `text-color` |
//! | `border` | `border` | `` | `border-width` |
//! | `border-main` | `border` | `main` | `border-color` |
//!
//! A stem whose cases all reject the value leaves the token property-less.
//! Tokens that match no stem at all are property-less too, so unknown or
//! custom utilities are never grouped by accident.
//!
//! # Configuration
//!
//! Tables are plain data. They can be built in code with [`GroupRule`] or
//! loaded from YAML:
//!
//! ```yaml
//! - stem: text
//!   cases:
//!     - group: font-size
//!       keywords: [xs, sm, base, lg]
//!     - group: font-size
//!       when: length
//!     - group: text-color
//! - stem: p
//!   cases:
//!     - group: padding
//!       conflicts: [padding-x, padding-y, padding-top, padding-bottom]
//! ```
//!
//! # Broader groups
//!
//! A case may list `conflicts`: narrower groups that a token of the case also
//! overrides. With `p` declared as above, a later `p-4` removes an earlier
//! `px-2`, while a later `px-2` still refines an earlier `p-4`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Errors from building or loading a [`GroupTable`].
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A rule was declared with an empty stem.
    #[error("group rule has an empty stem")]
    EmptyStem,

    /// A stem ends with `-`, which can never match a utility boundary.
    #[error("stem '{stem}' must not end with '-'")]
    TrailingDash { stem: String },

    /// A rule declares no cases, so it would shadow shorter stems for nothing.
    #[error("stem '{stem}' declares no cases")]
    NoCases { stem: String },

    /// A case names an empty group, or lists an empty conflicting group.
    #[error("stem '{stem}' has a case with an empty group name")]
    EmptyGroup { stem: String },

    /// The YAML document could not be parsed.
    #[error("invalid group table: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Shape of the value a [`GroupCase`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Any value, including none.
    #[default]
    Any,
    /// No value: the utility is exactly the stem (`border`, `flex`).
    Bare,
    /// A plain number on the scale (`2`, `1.5`).
    Numeric,
    /// An arbitrary length (`[12px]`, `[length:var(--w)]`, `[calc(..)]`).
    Length,
    /// Any arbitrary value in brackets.
    Arbitrary,
}

impl ValueKind {
    /// Returns true if `value` has this shape.
    pub fn matches(self, value: &str) -> bool {
        match self {
            ValueKind::Any => true,
            ValueKind::Bare => value.is_empty(),
            ValueKind::Numeric => is_numeric(value),
            ValueKind::Length => is_arbitrary_length(value),
            ValueKind::Arbitrary => is_arbitrary(value),
        }
    }
}

fn is_numeric(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit())
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn is_arbitrary(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('[') && value.ends_with(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    if let Some(rest) = inner.strip_prefix("length:") {
        return !rest.is_empty();
    }
    inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || ["calc(", "min(", "max(", "clamp("]
            .iter()
            .any(|f| inner.starts_with(f))
}

/// One candidate group for a stem.
///
/// A case accepts a value when the value has the case's [`ValueKind`] and,
/// if `keywords` is non-empty, is one of the keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCase {
    /// The property group this case assigns.
    pub group: String,
    /// Required value shape.
    #[serde(default)]
    pub when: ValueKind,
    /// Accepted values. Empty means any value of the right shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Narrower groups overridden along with `group`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
}

impl GroupCase {
    /// Creates a case accepting any value.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            when: ValueKind::Any,
            keywords: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Restricts the case to values of the given shape.
    pub fn when(mut self, kind: ValueKind) -> Self {
        self.when = kind;
        self
    }

    /// Restricts the case to the given values.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Adds groups that a token of this case also overrides.
    pub fn conflicts<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns true if this case accepts `value`.
    pub fn matches(&self, value: &str) -> bool {
        self.when.matches(value)
            && (self.keywords.is_empty() || self.keywords.iter().any(|k| k == value))
    }
}

/// All cases declared for one utility stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRule {
    /// The utility stem, without a trailing `-`.
    pub stem: String,
    /// Cases in priority order.
    pub cases: Vec<GroupCase>,
}

impl GroupRule {
    /// Creates a rule with no cases.
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            cases: Vec::new(),
        }
    }

    /// Shorthand for a stem whose every value belongs to one group.
    pub fn single(stem: impl Into<String>, group: impl Into<String>) -> Self {
        Self::new(stem).case(GroupCase::new(group))
    }

    /// Appends a case.
    pub fn case(mut self, case: GroupCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Appends a case accepting values of the given shape.
    pub fn when(self, kind: ValueKind, group: impl Into<String>) -> Self {
        self.case(GroupCase::new(group).when(kind))
    }

    /// Appends a case accepting only the given keywords.
    pub fn keywords(self, keywords: &[&str], group: impl Into<String>) -> Self {
        self.case(GroupCase::new(group).keywords(keywords.iter().copied()))
    }

    /// Appends a catch-all case.
    pub fn otherwise(self, group: impl Into<String>) -> Self {
        self.case(GroupCase::new(group))
    }

    /// Adds conflicting groups to the most recently appended case.
    ///
    /// ```rust
    /// use stylecraft_merge::GroupRule;
    ///
    /// let rule = GroupRule::single("p", "padding").conflicts(&["padding-x", "padding-y"]);
    /// assert_eq!(rule.cases[0].conflicts, ["padding-x", "padding-y"]);
    /// ```
    pub fn conflicts(mut self, groups: &[&str]) -> Self {
        if let Some(case) = self.cases.pop() {
            self.cases.push(case.conflicts(groups.iter().copied()));
        }
        self
    }

    fn validate(&self) -> Result<(), TableError> {
        if self.stem.is_empty() {
            return Err(TableError::EmptyStem);
        }
        if self.stem.ends_with('-') {
            return Err(TableError::TrailingDash {
                stem: self.stem.clone(),
            });
        }
        if self.cases.is_empty() {
            return Err(TableError::NoCases {
                stem: self.stem.clone(),
            });
        }
        if self
            .cases
            .iter()
            .any(|c| c.group.is_empty() || c.conflicts.iter().any(String::is_empty))
        {
            return Err(TableError::EmptyGroup {
                stem: self.stem.clone(),
            });
        }
        Ok(())
    }
}

/// Lookup table from utility stems to property groups.
///
/// # Example
///
/// ```rust
/// use stylecraft_merge::{GroupRule, GroupTable, ValueKind};
///
/// let table = GroupTable::new()
///     .rule(GroupRule::single("h", "height"))
///     .rule(
///         GroupRule::new("border")
///             .when(ValueKind::Bare, "border-width")
///             .when(ValueKind::Numeric, "border-width")
///             .otherwise("border-color"),
///     );
///
/// assert_eq!(table.classify("h-10"), Some("height"));
/// assert_eq!(table.classify("border"), Some("border-width"));
/// assert_eq!(table.classify("border-main"), Some("border-color"));
/// assert_eq!(table.classify("custom-thing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTable {
    rules: HashMap<String, Vec<GroupCase>>,
}

impl GroupTable {
    /// Creates an empty table. Every token is property-less against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in table covering the common utility families.
    pub fn builtin() -> Self {
        Self::from_rules(crate::defaults::builtin_rules())
    }

    /// Creates a table from rules. Later rules replace earlier ones with the same stem.
    pub fn from_rules<I: IntoIterator<Item = GroupRule>>(rules: I) -> Self {
        let mut table = Self::new();
        for rule in rules {
            table.insert(rule);
        }
        table
    }

    /// Parses a YAML list of rules into a validated table.
    pub fn from_yaml(source: &str) -> Result<Self, TableError> {
        let rules: Vec<GroupRule> = serde_yaml::from_str(source)?;
        let table = Self::from_rules(rules);
        table.validate()?;
        Ok(table)
    }

    /// Adds rules from a YAML list, replacing rules with the same stem.
    pub fn extend_from_yaml(&mut self, source: &str) -> Result<(), TableError> {
        let rules: Vec<GroupRule> = serde_yaml::from_str(source)?;
        for rule in &rules {
            rule.validate()?;
        }
        tracing::debug!(count = rules.len(), "extending group table from yaml");
        self.extend(rules);
        Ok(())
    }

    /// Adds a rule, returning the updated table for chaining.
    pub fn rule(mut self, rule: GroupRule) -> Self {
        self.insert(rule);
        self
    }

    /// Adds a rule, replacing any rule with the same stem.
    pub fn insert(&mut self, rule: GroupRule) {
        self.rules.insert(rule.stem, rule.cases);
    }

    /// Removes the rule for `stem`, returning true if it existed.
    pub fn remove(&mut self, stem: &str) -> bool {
        self.rules.remove(stem).is_some()
    }

    /// Number of stems in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the cases registered for `stem`.
    pub fn cases(&self, stem: &str) -> Option<&[GroupCase]> {
        self.rules.get(stem).map(Vec::as_slice)
    }

    /// Returns all rules, sorted by stem.
    pub fn rules(&self) -> Vec<GroupRule> {
        let mut rules: Vec<GroupRule> = self
            .rules
            .iter()
            .map(|(stem, cases)| GroupRule {
                stem: stem.clone(),
                cases: cases.clone(),
            })
            .collect();
        rules.sort_by(|a, b| a.stem.cmp(&b.stem));
        rules
    }

    /// Checks every rule for structural problems.
    pub fn validate(&self) -> Result<(), TableError> {
        for rule in self.rules() {
            rule.validate()?;
        }
        Ok(())
    }

    /// Returns the property group of a bare utility (no modifiers or sign).
    ///
    /// Candidate stems are tried longest first by cutting the utility at each
    /// `-`. The first stem present in the table decides; if none of its cases
    /// accept the value the utility is property-less.
    pub fn classify(&self, utility: &str) -> Option<&str> {
        self.case_for(utility).map(|case| case.group.as_str())
    }

    /// Returns the case that classifies a bare utility.
    ///
    /// Follows the same longest-stem lookup as [`classify`](Self::classify).
    pub fn case_for(&self, utility: &str) -> Option<&GroupCase> {
        let mut end = utility.len();
        loop {
            let stem = &utility[..end];
            if let Some(cases) = self.rules.get(stem) {
                let value = if end == utility.len() {
                    ""
                } else {
                    &utility[end + 1..]
                };
                return cases.iter().find(|case| case.matches(value));
            }
            match stem.rfind('-') {
                Some(i) if i > 0 => end = i,
                _ => return None,
            }
        }
    }

    /// Returns the conflict key of a full token, or `None` if it is property-less.
    ///
    /// Two tokens conflict exactly when their keys are equal.
    ///
    /// ```rust
    /// use stylecraft_merge::GroupTable;
    ///
    /// let table = GroupTable::builtin();
    /// assert_eq!(table.conflict_key("hover:bg-primary").as_deref(), Some("hover:background-color"));
    /// assert_eq!(table.conflict_key("select-none").as_deref(), Some("user-select"));
    /// assert_eq!(table.conflict_key("fade-in"), None);
    /// ```
    pub fn conflict_key(&self, token: &str) -> Option<String> {
        let token = Token::parse(token);
        if token.is_arbitrary_property() {
            return None;
        }
        self.classify(token.utility())
            .map(|group| token.conflict_key(group))
    }

    /// Returns the conflict key of a token together with the keys it overrides
    /// besides its own.
    ///
    /// Overridden keys carry the token's modifiers, so `hover:p-2` only clears
    /// `hover:` padding sides.
    ///
    /// ```rust
    /// use stylecraft_merge::GroupTable;
    ///
    /// let table = GroupTable::builtin();
    /// let (key, overrides) = table.override_keys("hover:size-4").unwrap();
    /// assert_eq!(key, "hover:height");
    /// assert_eq!(overrides, ["hover:width"]);
    /// ```
    pub fn override_keys(&self, token: &str) -> Option<(String, Vec<String>)> {
        let token = Token::parse(token);
        if token.is_arbitrary_property() {
            return None;
        }
        let case = self.case_for(token.utility())?;
        let overrides = case
            .conflicts
            .iter()
            .map(|group| token.conflict_key(group))
            .collect();
        Some((token.conflict_key(&case.group), overrides))
    }
}

impl Extend<GroupRule> for GroupTable {
    fn extend<T: IntoIterator<Item = GroupRule>>(&mut self, iter: T) {
        for rule in iter {
            self.insert(rule);
        }
    }
}
