use std::fmt::Write;

use crate::{BoundingBox, BoxTree};

/// Dumps trees in the Graphviz format, for debugging.
///
/// Internal nodes are labelled with their bounds, leaves are drawn as boxes
/// listing the input boxes they hold.
pub struct BoxTreePrinter;

impl BoxTreePrinter {
    pub fn print(root: &BoxTree) -> String {
        let mut out = String::new();

        _ = writeln!(&mut out, "digraph {{");
        Self::process(&mut out, &mut 0, root);
        _ = writeln!(&mut out, "}}");

        out
    }

    fn process(out: &mut String, next_id: &mut usize, node: &BoxTree) -> usize {
        let id = *next_id;

        *next_id += 1;

        if let Some(children) = node.children() {
            _ = writeln!(out, "  n{id} [label=\"{}\"]", Bounds(node.bounds()));

            for child in children {
                let child_id = Self::process(out, next_id, child);

                _ = writeln!(out, "  n{id} -> n{child_id}");
            }
        } else {
            let ids: Vec<_> =
                node.indices().iter().map(|id| format!("#{id}")).collect();

            _ = writeln!(
                out,
                "  n{id} [shape=box, label=\"{}\\n{}\"]",
                ids.join(", "),
                Bounds(node.bounds())
            );
        }

        id
    }
}

struct Bounds(BoundingBox);

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_set() {
            write!(f, "{} : {}", self.0.min(), self.0.max())
        } else {
            write!(f, "empty")
        }
    }
}
