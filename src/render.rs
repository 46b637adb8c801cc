//! Text views of the level structure, for debugging.
//!
//! ```text
//! Level 2:                 key2
//! Level 1: key0 ---------> key2 ---------> key4
//! Level 0: key0 -> key1 -> key2 -> key3 -> key4
//! ```
//!
//! Every key sits in the column of its level 0 position, so towers line up
//! vertically and skipped nodes show up as longer arrows.

use std::fmt::{self, Display};

use ptree::TreeBuilder;
use rustc_hash::FxHashMap;

use crate::node::NodeId;
use crate::skiplist::SkipList;

const ARROW: &str = " -> ";
const EMPTY: &str = "skip list is empty";

impl<K: Display, V, C, M, G> SkipList<K, V, C, M, G> {
    /// Renders every active level, top level first.
    pub fn render(&self) -> String {
        let mut columns: FxHashMap<NodeId, usize> = FxHashMap::default();
        let mut labels = vec![];
        for id in self.chain(0) {
            columns.insert(id, labels.len());
            labels.push(self.arena[id].key.to_string());
        }

        if labels.is_empty() {
            return format!("{}\n", EMPTY);
        }

        let mut offsets = Vec::with_capacity(labels.len());
        let mut offset = 0;
        for label in &labels {
            offsets.push(offset);
            offset += width(label) + ARROW.len();
        }

        let mut out = String::new();
        for level in (0..self.level).rev() {
            out.push_str(&format!("Level{:2}: ", level));

            // column right after the last key written on this line
            let mut end = None;
            for id in self.chain(level) {
                let column = columns[&id];
                let start = offsets[column];
                match end {
                    None => out.push_str(&" ".repeat(start)),
                    Some(end) => {
                        // " " + dashes + "> " spans exactly up to the next key
                        out.push(' ');
                        out.push_str(&"-".repeat(start - end - 3));
                        out.push_str("> ");
                    }
                }
                out.push_str(&labels[column]);
                end = Some(start + width(&labels[column]));
            }
            out.push('\n');
        }

        out
    }

    /// The same levels as a `ptree` tree: one branch per level, one leaf per key.
    pub fn render_tree(&self) -> String {
        let mut tree = TreeBuilder::new(format!("skip list ({} entries)", self.len()));
        for level in (0..self.level).rev() {
            tree.begin_child(format!("level {}", level));
            for id in self.chain(level) {
                tree.add_empty_child(self.arena[id].key.to_string());
            }
            tree.end_child();
        }

        let mut buf = Vec::new();
        if let Err(err) = ptree::write_tree(&tree.build(), &mut buf) {
            log::warn!("failed to render skip list tree: {}", err);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn chain(&self, level: usize) -> Chain<'_, K, V, C, M, G> {
        Chain {
            list: self,
            level,
            next: self.head[level],
        }
    }
}

impl<K: Display, V, C, M, G> Display for SkipList<K, V, C, M, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn width(label: &str) -> usize {
    label.chars().count()
}

// node ids along one level, from the header onwards
struct Chain<'a, K, V, C, M, G> {
    list: &'a SkipList<K, V, C, M, G>,
    level: usize,
    next: Option<NodeId>,
}

impl<K, V, C, M, G> Iterator for Chain<'_, K, V, C, M, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.list.arena[id].next(self.level);
        Some(id)
    }
}
