//! Tree Walker
//!
//! Depth-first, pre-order traversal in document order. Objects are
//! reported before their properties so hooks can inspect the full child
//! list before descending; arrays and scalars produce no callbacks.

use crate::parser::{Object, Property, Value};

/// Hooks invoked by [`walk`]
pub trait Visitor<'a> {
    fn visit_object(&mut self, _object: &'a Object) {}
    fn visit_property(&mut self, _property: &'a Property) {}
}

/// Visit every object and property reachable from `node` exactly once
pub fn walk<'a, V: Visitor<'a> + ?Sized>(node: &'a Value, visitor: &mut V) {
    match node {
        Value::Array(array) => {
            for item in &array.children {
                walk(item, visitor);
            }
        }
        Value::Object(object) => {
            visitor.visit_object(object);
            for property in &object.children {
                visitor.visit_property(property);
                walk(&property.value, visitor);
            }
        }
        Value::Literal(_) => {}
    }
}

/// Closure form of [`walk`]
pub fn walk_with<'a, P, O>(node: &'a Value, on_property: P, on_object: O)
where
    P: FnMut(&'a Property),
    O: FnMut(&'a Object),
{
    let mut hooks = Hooks {
        on_property,
        on_object,
    };
    walk(node, &mut hooks);
}

struct Hooks<P, O> {
    on_property: P,
    on_object: O,
}

impl<'a, P, O> Visitor<'a> for Hooks<P, O>
where
    P: FnMut(&'a Property),
    O: FnMut(&'a Object),
{
    fn visit_object(&mut self, object: &'a Object) {
        (self.on_object)(object);
    }

    fn visit_property(&mut self, property: &'a Property) {
        (self.on_property)(property);
    }
}
