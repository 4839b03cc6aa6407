//! Severity Resolver
//!
//! Maps a rule to its configured severity. The configuration is a nested
//! mapping: flat rules at the top level, categorized rules one level down
//! under their category name.
//!
//! ```json
//! {
//!   "blockNameIsRequired": "Error",
//!   "warning": { "invalidButtonPosition": "Warning" }
//! }
//! ```
//!
//! Anything missing resolves to "no diagnostic".

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::rules::{RuleCategory, RuleKey};
use crate::validation::diagnostics::DiagnosticSeverity;

/// Configured importance of a rule; `None` disables it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}'")]
pub struct UnknownSeverity(pub String);

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Information => "Information",
            Severity::Hint => "Hint",
            Severity::None => "None",
        }
    }

    /// The diagnostic level for an enabled severity
    pub fn to_diagnostic(self) -> Option<DiagnosticSeverity> {
        match self {
            Severity::Error => Some(DiagnosticSeverity::Error),
            Severity::Warning => Some(DiagnosticSeverity::Warning),
            Severity::Information => Some(DiagnosticSeverity::Information),
            Severity::Hint => Some(DiagnosticSeverity::Hint),
            Severity::None => None,
        }
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "information" | "info" => Ok(Severity::Information),
            "hint" => Ok(Severity::Hint),
            "none" | "off" => Ok(Severity::None),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    /// Unrecognised names and non-string values disable the rule instead
    /// of rejecting the surrounding configuration
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let severity = match value.as_str() {
            Some(name) => name.parse().unwrap_or_else(|e: UnknownSeverity| {
                log::warn!("{}, treating rule as disabled", e);
                Severity::None
            }),
            None => {
                log::warn!("severity must be a string, got {}, treating rule as disabled", value);
                Severity::None
            }
        };
        Ok(severity)
    }
}

/// One top-level configuration entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeverityEntry {
    /// A category and the severities of its rules
    Group(BTreeMap<String, Severity>),
    /// A flat rule, or a legacy dotted key; any non-table value lands here
    Level(Severity),
}

/// Nested category → key → severity mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityConfig {
    entries: BTreeMap<String, SeverityEntry>,
}

impl SeverityConfig {
    /// Configuration with every rule disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults shipped with the server: structural rules are errors,
    /// layout rules are warnings
    pub fn recommended() -> Self {
        let mut config = Self::new();
        for rule in RuleKey::ALL {
            let severity = match rule.category() {
                None => Severity::Error,
                Some(_) => Severity::Warning,
            };
            config.set(rule, severity);
        }
        config
    }

    /// Builder form of [`SeverityConfig::set`]
    pub fn with(mut self, rule: RuleKey, severity: Severity) -> Self {
        self.set(rule, severity);
        self
    }

    pub fn set(&mut self, rule: RuleKey, severity: Severity) {
        match rule.category() {
            None => {
                self.entries
                    .insert(rule.as_str().to_string(), SeverityEntry::Level(severity));
            }
            Some(category) => {
                let entry = self
                    .entries
                    .entry(category.as_str().to_string())
                    .or_insert_with(|| SeverityEntry::Group(BTreeMap::new()));
                if !matches!(entry, SeverityEntry::Group(_)) {
                    *entry = SeverityEntry::Group(BTreeMap::new());
                }
                if let SeverityEntry::Group(group) = entry {
                    group.insert(rule.as_str().to_string(), severity);
                }
            }
        }
    }

    /// Configured severity for `rule`, following its one canonical path
    pub fn get(&self, rule: RuleKey) -> Option<Severity> {
        match rule.category() {
            None => match self.entries.get(rule.as_str())? {
                SeverityEntry::Level(severity) => Some(*severity),
                _ => None,
            },
            Some(category) => match self.entries.get(category.as_str())? {
                SeverityEntry::Group(group) => group.get(rule.as_str()).copied(),
                _ => None,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `self` with every rule configured in `overrides` replaced
    pub fn merged(&self, overrides: &SeverityConfig) -> Self {
        let overrides = overrides.normalized();
        let mut merged = self.normalized();
        for rule in RuleKey::ALL {
            if let Some(severity) = overrides.get(rule) {
                merged.set(rule, severity);
            }
        }
        merged
    }

    /// Rewrite into the canonical shape
    ///
    /// Legacy flat dotted keys (`"warning.invalidButtonPosition"`,
    /// `"WARNING.INVALID_BUTTON_POSITION"`) move under their category and
    /// keys are re-spelled as in the catalog. Entries naming no known rule
    /// are dropped. Run once where configuration enters the system.
    pub fn normalized(&self) -> Self {
        let mut canonical = Self::new();

        for (name, entry) in &self.entries {
            match entry {
                SeverityEntry::Level(severity) => match RuleKey::from_code(name) {
                    Some(rule) => canonical.set(rule, *severity),
                    None => log::debug!("Ignoring severity for unknown rule '{}'", name),
                },
                SeverityEntry::Group(group) => {
                    let Some(category) = RuleCategory::from_name(name) else {
                        log::debug!("Ignoring unknown rule category '{}'", name);
                        continue;
                    };
                    for (key, severity) in group {
                        match RuleKey::find(Some(category), key) {
                            Some(rule) => canonical.set(rule, *severity),
                            None => {
                                log::debug!("Ignoring severity for unknown rule '{}.{}'", name, key)
                            }
                        }
                    }
                }
            }
        }

        canonical
    }
}

/// Resolve a rule to the level its diagnostics are reported at
///
/// Absent configuration and `None` both mean "no diagnostic".
pub fn resolve(rule: RuleKey, config: &SeverityConfig) -> Option<DiagnosticSeverity> {
    config.get(rule)?.to_diagnostic()
}

/// Resolve a textual rule code such as `"WARNING.INVALID_BUTTON_SIZE"`
///
/// Codes that do not name a catalog rule fail closed.
pub fn resolve_code(code: &str, config: &SeverityConfig) -> Option<(RuleKey, DiagnosticSeverity)> {
    let rule = RuleKey::from_code(code)?;
    Some((rule, resolve(rule, config)?))
}
