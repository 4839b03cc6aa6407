//! BEM Linter
//!
//! Content rules for BEM-JSON pages. Runs as the engine's supplemental
//! linter and reports problems under `"CATEGORY.KEY"` codes.

pub mod entity;
mod grid;
mod text;
mod warning;

use crate::parser;
use crate::validation::supplemental::{LintProblem, SupplementalLinter};
use entity::Entity;

/// Codes reported by [`BemLinter`]
pub mod codes {
    pub const TEXT_SIZES_SHOULD_BE_EQUAL: &str = "WARNING.TEXT_SIZES_SHOULD_BE_EQUAL";
    pub const INVALID_BUTTON_SIZE: &str = "WARNING.INVALID_BUTTON_SIZE";
    pub const INVALID_BUTTON_POSITION: &str = "WARNING.INVALID_BUTTON_POSITION";
    pub const INVALID_PLACEHOLDER_SIZE: &str = "WARNING.INVALID_PLACEHOLDER_SIZE";
    pub const SEVERAL_H1: &str = "TEXT.SEVERAL_H1";
    pub const INVALID_H2_POSITION: &str = "TEXT.INVALID_H2_POSITION";
    pub const INVALID_H3_POSITION: &str = "TEXT.INVALID_H3_POSITION";
    pub const TOO_MUCH_MARKETING_BLOCKS: &str = "GRID.TOO_MUCH_MARKETING_BLOCKS";
}

/// Size modifiers from smallest to largest
pub const SIZE_SCALE: [&str; 11] = [
    "xxxs", "xxs", "xs", "s", "m", "l", "xl", "xxl", "xxxl", "xxxxl", "xxxxxl",
];

/// The size one step above `size` on [`SIZE_SCALE`]
pub fn next_size(size: &str) -> Option<&'static str> {
    let index = SIZE_SCALE.iter().position(|s| *s == size)?;
    SIZE_SCALE.get(index + 1).copied()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BemLinter;

impl BemLinter {
    pub fn new() -> Self {
        Self
    }

    fn check_entity(entity: &Entity<'_>, problems: &mut Vec<LintProblem>) {
        if entity.is_block("warning") {
            warning::check(entity, problems);
        }
        if entity.is_block("grid") {
            grid::check(entity, problems);
        }
        for child in entity.children() {
            Self::check_entity(&child, problems);
        }
    }
}

impl SupplementalLinter for BemLinter {
    fn lint(&self, text: &str) -> Vec<LintProblem> {
        let root = match parser::parse(text) {
            Ok(root) => root,
            Err(e) => {
                log::debug!("BEM rules skipped: {}", e);
                return Vec::new();
            }
        };

        let mut problems = Vec::new();
        for entity in Entity::roots(&root) {
            Self::check_entity(&entity, &mut problems);
        }
        text::check(&root, &mut problems);
        problems
    }
}
