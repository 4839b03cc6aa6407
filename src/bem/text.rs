//! Heading rules
//!
//! `text` blocks with `mods.type` of h1, h2 or h3 form the page outline:
//! a single h1, no h2 ahead of the h1, no h3 ahead of an h2.

use crate::bem::codes;
use crate::bem::entity::Entity;
use crate::parser::{Location, Value};
use crate::validation::supplemental::LintProblem;
use crate::validation::walker::walk_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    H1,
    H2,
    H3,
}

/// Headings of the whole document in document order
fn headings(root: &Value) -> Vec<(Level, Location)> {
    let mut headings = Vec::new();
    walk_with(
        root,
        |_| {},
        |object| {
            let Some(entity) = Entity::from_object(object, None) else {
                return;
            };
            if !entity.is_block("text") {
                return;
            }
            let level = match entity.modifier("type") {
                Some("h1") => Level::H1,
                Some("h2") => Level::H2,
                Some("h3") => Level::H3,
                _ => return,
            };
            headings.push((level, entity.location()));
        },
    );
    headings
}

pub fn check(root: &Value, problems: &mut Vec<LintProblem>) {
    let headings = headings(root);
    let last_of = |level: Level| headings.iter().rposition(|(l, _)| *l == level);
    let last_h1 = last_of(Level::H1);
    let last_h2 = last_of(Level::H2);

    let mut h1_seen = false;
    for (index, (level, location)) in headings.iter().enumerate() {
        match level {
            Level::H1 if h1_seen => problems.push(LintProblem::new(
                codes::SEVERAL_H1,
                "First-level heading must be unique on the page",
                *location,
            )),
            Level::H1 => h1_seen = true,
            Level::H2 if last_h1.is_some_and(|last| last > index) => {
                problems.push(LintProblem::new(
                    codes::INVALID_H2_POSITION,
                    "Second-level heading must not precede the first-level heading",
                    *location,
                ))
            }
            Level::H3 if last_h2.is_some_and(|last| last > index) => {
                problems.push(LintProblem::new(
                    codes::INVALID_H3_POSITION,
                    "Third-level heading must not precede a second-level heading",
                    *location,
                ))
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn lint(text: &str) -> Vec<LintProblem> {
        let root = parse(text).unwrap();
        let mut problems = Vec::new();
        check(&root, &mut problems);
        problems
    }

    fn heading(level: &str) -> String {
        format!(r#"{{"block": "text", "mods": {{"type": "{level}"}}}}"#)
    }

    fn page(levels: &[&str]) -> String {
        let items: Vec<_> = levels.iter().map(|l| heading(l)).collect();
        format!(r#"{{"block": "page", "content": [{}]}}"#, items.join(", "))
    }

    #[test]
    fn test_proper_outline() {
        assert!(lint(&page(&["h1", "h2", "h3", "h2", "h3"])).is_empty());
    }

    #[test]
    fn test_several_h1() {
        let problems = lint(&page(&["h1", "h2", "h1", "h1"]));
        let found: Vec<_> = problems.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(
            found,
            vec![codes::INVALID_H2_POSITION, codes::SEVERAL_H1, codes::SEVERAL_H1]
        );
    }

    #[test]
    fn test_h2_before_h1() {
        let text = page(&["h2", "h1"]);
        let problems = lint(&text);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].code, codes::INVALID_H2_POSITION);
        assert_eq!(problems[0].location.start.offset, text.find(&heading("h2")).unwrap());
    }

    #[test]
    fn test_h3_before_h2() {
        let problems = lint(&page(&["h1", "h3", "h2"]));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].code, codes::INVALID_H3_POSITION);
    }

    #[test]
    fn test_headings_found_at_any_depth() {
        let text = format!(
            r#"[{{"block": "a", "content": {{"block": "b", "content": [{}]}}}}, {}]"#,
            heading("h3"),
            heading("h2")
        );
        assert_eq!(lint(&text).len(), 1);
    }
}
