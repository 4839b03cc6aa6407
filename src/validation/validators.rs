//! Validators
//!
//! Pure per-node checks. A validator looks at one object or one property
//! and returns the problems it finds there; it never mutates the tree and
//! keeps no state between calls.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{Object, Property};
use crate::rules::RuleKey;
use crate::validation::problem::RawProblem;

/// A check run by the tree walker
pub trait Validator: Send + Sync {
    fn name(&self) -> &'static str;

    fn check_object(&self, _object: &Object) -> Vec<RawProblem> {
        Vec::new()
    }

    fn check_property(&self, _property: &Property) -> Vec<RawProblem> {
        Vec::new()
    }
}

/// Every object must carry a `block` field
pub struct BlockNameRequired;

impl Validator for BlockNameRequired {
    fn name(&self) -> &'static str {
        "block-name-required"
    }

    fn check_object(&self, object: &Object) -> Vec<RawProblem> {
        if object.has_key("block") {
            Vec::new()
        } else {
            vec![RawProblem::new(RuleKey::BlockNameIsRequired, object.location)]
        }
    }
}

static UPPERCASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+$").expect("valid uppercase pattern"));

/// Property keys made only of uppercase letters are rejected
pub struct UppercaseForbidden;

impl Validator for UppercaseForbidden {
    fn name(&self) -> &'static str {
        "uppercase-forbidden"
    }

    fn check_property(&self, property: &Property) -> Vec<RawProblem> {
        if UPPERCASE_NAME.is_match(&property.key.value) {
            vec![RawProblem::new(
                RuleKey::UppercaseNamesIsForbidden,
                property.key.location,
            )]
        } else {
            Vec::new()
        }
    }
}

/// Ordered set of validators applied during a walk
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Registry with the structural validators every document gets
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BlockNameRequired));
        registry.register(Box::new(UppercaseForbidden));
        registry
    }

    pub fn register(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    pub fn check_object(&self, object: &Object) -> Vec<RawProblem> {
        self.validators
            .iter()
            .flat_map(|v| v.check_object(object))
            .collect()
    }

    pub fn check_property(&self, property: &Property) -> Vec<RawProblem> {
        self.validators
            .iter()
            .flat_map(|v| v.check_property(property))
            .collect()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
