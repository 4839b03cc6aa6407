//! BEM entities
//!
//! A view over JSON objects that describe BEM blocks and elements:
//!
//! ```json
//! { "block": "warning", "mods": { "size": "m" }, "content": [ ... ] }
//! { "elem": "fraction", "elemMods": { "m-col": "2" }, "content": { ... } }
//! ```
//!
//! Elements without an explicit `block` belong to the enclosing block.

use crate::parser::{Location, Object, Value};

#[derive(Debug, Clone, Copy)]
pub struct Entity<'a> {
    pub node: &'a Object,
    pub block: &'a str,
    pub elem: Option<&'a str>,
}

impl<'a> Entity<'a> {
    /// Interpret `node` as an entity nested inside `parent_block`
    pub fn from_object(node: &'a Object, parent_block: Option<&'a str>) -> Option<Self> {
        let elem = node.get("elem").and_then(Value::as_str);
        let block = match node.get("block").and_then(Value::as_str) {
            Some(block) => block,
            None if elem.is_some() => parent_block?,
            None => return None,
        };
        Some(Self { node, block, elem })
    }

    /// Top-level entities of a document
    pub fn roots(root: &'a Value) -> Vec<Entity<'a>> {
        let mut roots = Vec::new();
        collect_content(root, None, &mut roots);
        roots
    }

    pub fn location(&self) -> Location {
        self.node.location
    }

    /// A block (not an element of it) named `name`
    pub fn is_block(&self, name: &str) -> bool {
        self.elem.is_none() && self.block == name
    }

    pub fn is_elem(&self, block: &str, elem: &str) -> bool {
        self.block == block && self.elem == Some(elem)
    }

    /// `mods.<name>` as text
    pub fn modifier(&self, name: &str) -> Option<&'a str> {
        lookup(self.node, "mods", name)
    }

    /// `elemMods.<name>` as text
    pub fn elem_modifier(&self, name: &str) -> Option<&'a str> {
        lookup(self.node, "elemMods", name)
    }

    /// Direct children listed under `content`
    pub fn children(&self) -> Vec<Entity<'a>> {
        let mut children = Vec::new();
        if let Some(content) = self.node.get("content") {
            collect_content(content, Some(self.block), &mut children);
        }
        children
    }

    /// All descendants in document order, not descending into entities
    /// for which `stop` returns true (those are still included)
    pub fn descendants_until(&self, stop: impl Fn(&Entity<'a>) -> bool + Copy) -> Vec<Entity<'a>> {
        let mut out = Vec::new();
        self.push_descendants(stop, &mut out);
        out
    }

    /// All descendants in document order
    pub fn descendants(&self) -> Vec<Entity<'a>> {
        self.descendants_until(|_| false)
    }

    fn push_descendants(&self, stop: impl Fn(&Entity<'a>) -> bool + Copy, out: &mut Vec<Entity<'a>>) {
        for child in self.children() {
            out.push(child);
            if !stop(&child) {
                child.push_descendants(stop, out);
            }
        }
    }
}

fn lookup<'a>(node: &'a Object, group: &str, name: &str) -> Option<&'a str> {
    node.get(group)?.as_object()?.get(name)?.as_text()
}

/// `content` may be one entity, a list of them, or nested lists
fn collect_content<'a>(value: &'a Value, parent: Option<&'a str>, out: &mut Vec<Entity<'a>>) {
    match value {
        Value::Object(object) => out.extend(Entity::from_object(object, parent)),
        Value::Array(array) => {
            for item in &array.children {
                collect_content(item, parent, out);
            }
        }
        Value::Literal(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_entity_fields() {
        let root = parse(
            r#"{"block": "grid", "mods": {"m-columns": 10}, "content": [
                {"elem": "fraction", "elemMods": {"m-col": "3"}}
            ]}"#,
        )
        .unwrap();
        let grid = Entity::roots(&root)[0];

        assert!(grid.is_block("grid"));
        assert_eq!(grid.modifier("m-columns"), Some("10"));

        let fraction = grid.children()[0];
        assert!(fraction.is_elem("grid", "fraction"));
        assert!(!fraction.is_block("grid"));
        assert_eq!(fraction.elem_modifier("m-col"), Some("3"));
    }

    #[test]
    fn test_objects_without_block_or_elem_are_skipped() {
        let root = parse(r#"[{"block": "a"}, {"mix": "b"}, [{"block": "c"}], 1]"#).unwrap();
        let blocks: Vec<_> = Entity::roots(&root).iter().map(|e| e.block).collect();
        assert_eq!(blocks, vec!["a", "c"]);
    }

    #[test]
    fn test_orphan_elem_has_no_block() {
        let root = parse(r#"{"elem": "x"}"#).unwrap();
        assert!(Entity::roots(&root).is_empty());
    }

    #[test]
    fn test_descendants_in_document_order() {
        let root = parse(
            r#"{"block": "page", "content": [
                {"block": "a", "content": {"block": "b"}},
                {"block": "c"}
            ]}"#,
        )
        .unwrap();
        let page = Entity::roots(&root)[0];

        let all: Vec<_> = page.descendants().iter().map(|e| e.block).collect();
        assert_eq!(all, vec!["a", "b", "c"]);

        let shallow: Vec<_> = page
            .descendants_until(|e| e.is_block("a"))
            .iter()
            .map(|e| e.block)
            .collect();
        assert_eq!(shallow, vec!["a", "c"]);
    }
}
