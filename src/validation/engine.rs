//! Validation Engine
//!
//! One call turns document text into the complete diagnostic list:
//!
//! 1. parse the text (failure means "no tree", never an error)
//! 2. walk the tree through the registered validators
//! 3. run the supplemental linter on the raw text
//! 4. resolve severities, drop disabled rules, map to diagnostics
//!
//! The engine holds no per-document state; configuration is passed in on
//! every call.

use std::collections::HashSet;

use crate::bem::BemLinter;
use crate::core::Document;
use crate::parser::{self, Object, Property};
use crate::rules::RuleKey;
use crate::validation::diagnostics::{Diagnostic, LineIndex, to_diagnostic};
use crate::validation::problem::RawProblem;
use crate::validation::severity::{SeverityConfig, resolve};
use crate::validation::supplemental::{LintProblem, SupplementalLinter};
use crate::validation::validators::ValidatorRegistry;
use crate::validation::walker::{Visitor, walk};

/// Source label used when no document name is known
pub const DEFAULT_SOURCE: &str = "bemjson";

pub struct Engine {
    registry: ValidatorRegistry,
    supplemental: Box<dyn SupplementalLinter>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Structural validators plus the built-in BEM linter
    pub fn new() -> Self {
        Self::with_registry(ValidatorRegistry::with_defaults(), Box::new(BemLinter::new()))
    }

    pub fn with_registry(
        registry: ValidatorRegistry,
        supplemental: Box<dyn SupplementalLinter>,
    ) -> Self {
        Self {
            registry,
            supplemental,
        }
    }

    /// Validate raw text, labelling diagnostics with [`DEFAULT_SOURCE`]
    pub fn validate(&self, text: &str, config: &SeverityConfig) -> Vec<Diagnostic> {
        self.run(text, config, DEFAULT_SOURCE)
    }

    /// Validate a document, labelling diagnostics with its file name
    pub fn validate_document(
        &self,
        document: &Document<'_>,
        config: &SeverityConfig,
    ) -> Vec<Diagnostic> {
        self.run(document.text(), config, document.file_name())
    }

    /// Every raw problem for `text`, before severity resolution:
    /// tree problems in walk order, then supplemental ones
    pub fn collect_problems(&self, text: &str) -> Vec<RawProblem> {
        let mut collector = ProblemCollector {
            registry: &self.registry,
            problems: Vec::new(),
        };

        match parser::parse(text) {
            Ok(root) => walk(&root, &mut collector),
            Err(e) => log::debug!("Skipping tree validators, document does not parse: {}", e),
        }

        let mut problems = collector.problems;
        problems.extend(
            self.supplemental
                .lint(text)
                .into_iter()
                .filter_map(ingest_lint_problem),
        );
        problems
    }

    fn run(&self, text: &str, config: &SeverityConfig, source: &str) -> Vec<Diagnostic> {
        let problems = self.collect_problems(text);
        let index = LineIndex::new(text);

        let mut seen = HashSet::new();
        let mut diagnostics = Vec::with_capacity(problems.len());

        for problem in &problems {
            let Some(severity) = resolve(problem.rule, config) else {
                log::trace!("Rule {} is disabled", problem.rule);
                continue;
            };

            let diagnostic = to_diagnostic(problem, severity, source, &index);
            if seen.insert(diagnostic.clone()) {
                diagnostics.push(diagnostic);
            }
        }

        log::debug!(
            "{}: {} problem(s), {} diagnostic(s)",
            source,
            problems.len(),
            diagnostics.len()
        );
        diagnostics
    }
}

/// Normalize a supplemental problem's code; unknown codes are dropped
fn ingest_lint_problem(problem: LintProblem) -> Option<RawProblem> {
    match RuleKey::from_code(&problem.code) {
        Some(rule) => Some(RawProblem::new(rule, problem.location).with_message(problem.message)),
        None => {
            log::debug!("Dropping problem with unknown rule code '{}'", problem.code);
            None
        }
    }
}

struct ProblemCollector<'r> {
    registry: &'r ValidatorRegistry,
    problems: Vec<RawProblem>,
}

impl<'a> Visitor<'a> for ProblemCollector<'_> {
    fn visit_object(&mut self, object: &'a Object) {
        self.problems.extend(self.registry.check_object(object));
    }

    fn visit_property(&mut self, property: &'a Property) {
        self.problems.extend(self.registry.check_property(property));
    }
}

/// Validate text with the default engine
pub fn validate_document(text: &str, config: &SeverityConfig) -> Vec<Diagnostic> {
    Engine::new().validate(text, config)
}
