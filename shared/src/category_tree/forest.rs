//! Forest construction and row traversal

use std::collections::HashSet;

use serde::Serialize;

use super::index::CategoryIndex;
use crate::models::Category;

/// A category with its resolved children attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn id(&self) -> i64 {
        self.category.id
    }

    pub fn name(&self) -> &str {
        &self.category.name
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Build the full nested structure from a flat snapshot
///
/// Every distinct category in the input appears exactly once. Genuine
/// top-level categories (and orphans) come first in sibling order;
/// members of parent cycles, reachable from no root, are appended
/// after them as demoted roots in the same `(position, id)` order. A
/// category never appears twice along any root-to-node path.
pub fn build_forest(categories: &[Category]) -> Vec<CategoryNode> {
    let index = CategoryIndex::new(categories);
    let mut visited: HashSet<i64> = HashSet::with_capacity(index.len());

    let mut forest: Vec<CategoryNode> = index
        .top_level()
        .iter()
        .filter_map(|c| attach(&index, c, &mut visited))
        .collect();

    // Anything still unvisited sits on a parent cycle. Demote those
    // categories to the top level so no row is lost.
    let mut leftovers: Vec<&Category> = index.iter().filter(|c| !visited.contains(&c.id)).collect();
    leftovers.sort_by_key(|c| (c.position, c.id));
    if !leftovers.is_empty() {
        tracing::debug!(count = leftovers.len(), "demoting cycle members to top level");
    }
    for category in leftovers {
        if let Some(node) = attach(&index, category, &mut visited) {
            forest.push(node);
        }
    }

    forest
}

fn attach(
    index: &CategoryIndex<'_>,
    category: &Category,
    visited: &mut HashSet<i64>,
) -> Option<CategoryNode> {
    // Re-occurrence guard: a category already placed in the forest is
    // excluded at this point instead of being duplicated.
    if !visited.insert(category.id) {
        return None;
    }
    let children = index
        .children_of(Some(category.id))
        .iter()
        .filter_map(|c| attach(index, c, visited))
        .collect();
    Some(CategoryNode {
        category: category.clone(),
        children,
    })
}

/// Depth-first, pre-order traversal of a forest as `(node, depth)` rows
///
/// Depth starts at 0 for roots. Each call to [`rows`] yields a fresh
/// iterator; no traversal state is kept between calls.
pub struct CategoryRows<'a> {
    stack: Vec<(&'a CategoryNode, usize)>,
}

/// Flatten a forest into the row sequence a table view renders
pub fn rows(forest: &[CategoryNode]) -> CategoryRows<'_> {
    CategoryRows {
        stack: forest.iter().rev().map(|node| (node, 0)).collect(),
    }
}

impl<'a> Iterator for CategoryRows<'a> {
    type Item = (&'a CategoryNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((node, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: i64, name: &str, parent_id: Option<i64>, position: i32) -> Category {
        Category::new(id, name, parent_id, position)
    }

    #[test]
    fn test_forest_nests_children() {
        let cats = vec![
            cat(1, "Science", None, 0),
            cat(2, "Physics", Some(1), 0),
            cat(3, "Math", None, 1),
        ];
        let forest = build_forest(&cats);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].name(), "Science");
        assert_eq!(forest[0].children[0].name(), "Physics");
        assert!(forest[1].is_leaf());
    }

    #[test]
    fn test_two_node_cycle_is_demoted() {
        let cats = vec![cat(1, "a", Some(2), 0), cat(2, "b", Some(1), 0)];
        let forest = build_forest(&cats);
        // "a" (lowest position/id) becomes the demoted root; "b" stays
        // attached as its child, the back-edge to "a" is dropped.
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].id(), 2);
        assert!(forest[0].children[0].is_leaf());
    }

    #[test]
    fn test_forest_keeps_every_category_once() {
        let cats = vec![
            cat(1, "a", None, 0),
            cat(2, "lost", Some(42), 0),
            cat(3, "x", Some(4), 0),
            cat(4, "y", Some(3), 0),
            cat(5, "child", Some(1), 0),
        ];
        let forest = build_forest(&cats);
        let mut seen: Vec<i64> = rows(&forest).map(|(node, _)| node.id()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rows_preorder_with_depth() {
        let cats = vec![
            cat(1, "Science", None, 0),
            cat(2, "Physics", Some(1), 0),
            cat(3, "Math", None, 1),
        ];
        let forest = build_forest(&cats);
        let flat: Vec<(&str, usize)> = rows(&forest)
            .map(|(node, depth)| (node.name(), depth))
            .collect();
        assert_eq!(flat, vec![("Science", 0), ("Physics", 1), ("Math", 0)]);
    }

    #[test]
    fn test_rows_restartable() {
        let cats = vec![cat(1, "a", None, 0), cat(2, "b", Some(1), 0)];
        let forest = build_forest(&cats);
        let first: Vec<i64> = rows(&forest).map(|(n, _)| n.id()).collect();
        let second: Vec<i64> = rows(&forest).map(|(n, _)| n.id()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_forest_idempotent() {
        let cats = vec![
            cat(3, "c", Some(1), 2),
            cat(1, "a", None, 0),
            cat(2, "b", Some(1), 1),
            cat(4, "d", Some(9), 0),
        ];
        assert_eq!(build_forest(&cats), build_forest(&cats));
    }
}
