//! Rules for the `warning` block
//!
//! Inside a warning, texts share one size, the button is one size above
//! that text, placeholders are s/m/l and no button comes before a
//! placeholder. Nested warnings are checked on their own.

use crate::bem::entity::Entity;
use crate::bem::{codes, next_size};
use crate::validation::supplemental::LintProblem;

const PLACEHOLDER_SIZES: [&str; 3] = ["s", "m", "l"];

pub fn check(warning: &Entity<'_>, problems: &mut Vec<LintProblem>) {
    let members: Vec<_> = warning
        .descendants_until(|e| e.is_block("warning"))
        .into_iter()
        .filter(|e| !e.is_block("warning"))
        .collect();

    let texts: Vec<_> = members.iter().filter(|e| e.is_block("text")).collect();
    let reference = texts.first().and_then(|t| t.modifier("size"));
    let sizes_equal = texts.iter().all(|t| t.modifier("size") == reference);

    if !sizes_equal {
        problems.push(LintProblem::new(
            codes::TEXT_SIZES_SHOULD_BE_EQUAL,
            "All texts in a 'warning' block must have the same size",
            warning.location(),
        ));
    }

    // Button size is only checkable against a consistent text size
    let expected_button = reference.filter(|_| sizes_equal).and_then(next_size);
    let last_placeholder = members.iter().rposition(|e| e.is_block("placeholder"));

    for (index, member) in members.iter().enumerate() {
        if member.is_block("button") {
            if let Some(expected) = expected_button {
                let size = member.modifier("size");
                if size != Some(expected) {
                    problems.push(LintProblem::new(
                        codes::INVALID_BUTTON_SIZE,
                        format!(
                            "Button size '{}' must be '{}' to match the text size '{}'",
                            size.unwrap_or("none"),
                            expected,
                            reference.unwrap_or_default()
                        ),
                        member.location(),
                    ));
                }
            }

            if last_placeholder.is_some_and(|last| last > index) {
                problems.push(LintProblem::new(
                    codes::INVALID_BUTTON_POSITION,
                    "Button in a 'warning' block must not precede the placeholder",
                    member.location(),
                ));
            }
        }

        if member.is_block("placeholder") {
            let size = member.modifier("size");
            if !size.is_some_and(|s| PLACEHOLDER_SIZES.contains(&s)) {
                problems.push(LintProblem::new(
                    codes::INVALID_PLACEHOLDER_SIZE,
                    format!(
                        "Placeholder size '{}' is not one of s, m, l",
                        size.unwrap_or("none")
                    ),
                    member.location(),
                ));
            }
        }
    }
}
