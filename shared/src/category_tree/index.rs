//! Snapshot index over a flat category list

use std::collections::{HashMap, HashSet};

use crate::models::Category;

/// Delimiter between ancestor names in a breadcrumb path
pub const PATH_SEPARATOR: &str = " > ";

/// Upper bound on ancestor walks, in case the parent relation is
/// deeper than any sane hierarchy or not acyclic at all
pub const MAX_PATH_DEPTH: usize = 64;

/// Read-only index over one category snapshot
///
/// Built once per fetch, then queried for the lifetime of that
/// snapshot. Sibling lists are ordered by ascending `position`, ties
/// broken by ascending `id`.
pub struct CategoryIndex<'a> {
    by_id: HashMap<i64, &'a Category>,
    /// Deduplicated categories in input order (first occurrence wins)
    ordered: Vec<&'a Category>,
    children: HashMap<i64, Vec<&'a Category>>,
    /// Categories with no resolvable parent, orphans included
    top_level: Vec<&'a Category>,
}

impl<'a> CategoryIndex<'a> {
    /// Build the index from a flat snapshot
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        let mut ordered = Vec::with_capacity(categories.len());
        for category in categories {
            // Duplicate ids are undefined upstream data; keep the first.
            if !by_id.contains_key(&category.id) {
                by_id.insert(category.id, category);
                ordered.push(category);
            }
        }

        let mut children: HashMap<i64, Vec<&Category>> = HashMap::new();
        let mut top_level: Vec<&Category> = Vec::new();
        for &category in &ordered {
            match category.parent_id {
                Some(pid) if pid != category.id && by_id.contains_key(&pid) => {
                    children.entry(pid).or_default().push(category);
                }
                // Absent, self-referential, or unresolvable parent:
                // fold into the top level instead of dropping the row.
                _ => top_level.push(category),
            }
        }

        for siblings in children.values_mut() {
            sort_siblings(siblings);
        }
        sort_siblings(&mut top_level);

        Self {
            by_id,
            ordered,
            children,
            top_level,
        }
    }

    /// Number of distinct categories in the snapshot
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Look up a category by id
    pub fn get(&self, id: i64) -> Option<&'a Category> {
        self.by_id.get(&id).copied()
    }

    /// Deduplicated categories in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &'a Category> + '_ {
        self.ordered.iter().copied()
    }

    /// Ordered children of `parent_id`; `None` selects the top level
    /// (categories without a parent plus orphans)
    pub fn children_of(&self, parent_id: Option<i64>) -> &[&'a Category] {
        match parent_id {
            Some(id) => self
                .children
                .get(&id)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            None => &self.top_level,
        }
    }

    /// Ordered top-level roster
    pub fn top_level(&self) -> &[&'a Category] {
        &self.top_level
    }

    /// Number of direct children of `id`
    pub fn child_count(&self, id: i64) -> usize {
        self.children.get(&id).map_or(0, Vec::len)
    }

    /// Human-readable breadcrumb path for `category`
    ///
    /// Walks `parent_id` links upward and joins ancestor names with
    /// [`PATH_SEPARATOR`]. The walk stops at an unresolvable parent,
    /// at a category already seen in this walk, or at
    /// [`MAX_PATH_DEPTH`]. Always returns at least `category.name`.
    pub fn path_of(&self, category: &Category) -> String {
        let mut names = vec![category.name.as_str()];
        let mut seen: HashSet<i64> = HashSet::from([category.id]);
        let mut current = category.parent_id;

        while let Some(pid) = current {
            if names.len() >= MAX_PATH_DEPTH {
                break;
            }
            let Some(parent) = self.get(pid) else {
                break;
            };
            if !seen.insert(parent.id) {
                // Cycle: keep what we have rather than failing.
                break;
            }
            names.push(parent.name.as_str());
            current = parent.parent_id;
        }

        names.reverse();
        names.join(PATH_SEPARATOR)
    }
}

fn sort_siblings(siblings: &mut [&Category]) {
    siblings.sort_by_key(|c| (c.position, c.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: i64, name: &str, parent_id: Option<i64>, position: i32) -> Category {
        Category::new(id, name, parent_id, position)
    }

    #[test]
    fn test_children_ordered_by_position_then_id() {
        let cats = vec![
            cat(1, "root", None, 0),
            cat(4, "d", Some(1), 1),
            cat(2, "b", Some(1), 0),
            cat(3, "c", Some(1), 0),
        ];
        let index = CategoryIndex::new(&cats);
        let ids: Vec<i64> = index.children_of(Some(1)).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_orphan_folds_into_top_level() {
        let cats = vec![cat(1, "a", None, 0), cat(2, "lost", Some(99), 0)];
        let index = CategoryIndex::new(&cats);
        let ids: Vec<i64> = index.children_of(None).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_self_parent_is_top_level() {
        let cats = vec![cat(1, "selfish", Some(1), 0)];
        let index = CategoryIndex::new(&cats);
        assert_eq!(index.top_level().len(), 1);
        assert_eq!(index.child_count(1), 0);
    }

    #[test]
    fn test_duplicate_id_first_seen_wins() {
        let cats = vec![cat(1, "first", None, 0), cat(1, "second", None, 5)];
        let index = CategoryIndex::new(&cats);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(1).unwrap().name, "first");
    }

    #[test]
    fn test_path_of_chain() {
        let cats = vec![
            cat(1, "root", None, 0),
            cat(2, "mid", Some(1), 0),
            cat(3, "leaf", Some(2), 0),
        ];
        let index = CategoryIndex::new(&cats);
        assert_eq!(index.path_of(&cats[2]), "root > mid > leaf");
    }

    #[test]
    fn test_path_of_orphan_is_own_name() {
        let cats = vec![cat(2, "lost", Some(99), 0)];
        let index = CategoryIndex::new(&cats);
        assert_eq!(index.path_of(&cats[0]), "lost");
    }

    #[test]
    fn test_path_of_cycle_terminates() {
        let cats = vec![cat(1, "a", Some(2), 0), cat(2, "b", Some(1), 0)];
        let index = CategoryIndex::new(&cats);
        // Walk from "a" picks up "b", then hits "a" again and stops.
        assert_eq!(index.path_of(&cats[0]), "b > a");
    }

    #[test]
    fn test_path_of_depth_bound() {
        // Chain of MAX_PATH_DEPTH + 10 nodes; the path must cap out.
        let n = (MAX_PATH_DEPTH + 10) as i64;
        let mut cats = vec![cat(1, "n1", None, 0)];
        for id in 2..=n {
            cats.push(cat(id, &format!("n{id}"), Some(id - 1), 0));
        }
        let index = CategoryIndex::new(&cats);
        let path = index.path_of(cats.last().unwrap());
        assert_eq!(path.split(PATH_SEPARATOR).count(), MAX_PATH_DEPTH);
    }
}
