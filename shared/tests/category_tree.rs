// shared/tests/category_tree.rs
// End-to-end checks of hierarchy reconstruction over dirty snapshots.

use shared::category_tree::{CategoryIndex, build_forest, rows};
use shared::models::Category;

fn cat(id: i64, name: &str, parent_id: Option<i64>, position: i32) -> Category {
    Category::new(id, name, parent_id, position)
}

#[test]
fn forest_preserves_node_count_on_clean_input() {
    let cats = vec![
        cat(1, "a", None, 0),
        cat(2, "b", Some(1), 0),
        cat(3, "c", Some(1), 1),
        cat(4, "d", Some(3), 0),
        cat(5, "e", None, 1),
    ];
    let forest = build_forest(&cats);
    assert_eq!(rows(&forest).count(), cats.len());
}

#[test]
fn siblings_order_by_position_then_id() {
    let cats = vec![
        cat(10, "later", None, 2),
        cat(7, "tie-high-id", None, 1),
        cat(3, "tie-low-id", None, 1),
        cat(9, "first", None, 0),
    ];
    let index = CategoryIndex::new(&cats);
    let ids: Vec<i64> = index.children_of(None).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 3, 7, 10]);
}

#[test]
fn two_node_cycle_terminates_and_keeps_both() {
    let cats = vec![cat(1, "a", Some(2), 0), cat(2, "b", Some(1), 0)];
    let forest = build_forest(&cats);

    let mut ids: Vec<i64> = rows(&forest).map(|(n, _)| n.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
    // The lower-ordered member anchors the demoted subtree.
    assert_eq!(forest[0].id(), 1);
}

#[test]
fn orphan_appears_at_top_level() {
    let cats = vec![cat(1, "a", None, 0), cat(2, "lost", Some(999), 0)];
    let index = CategoryIndex::new(&cats);
    assert!(index.children_of(None).iter().any(|c| c.id == 2));
}

#[test]
fn path_of_three_level_chain() {
    let cats = vec![
        cat(1, "root", None, 0),
        cat(2, "mid", Some(1), 0),
        cat(3, "leaf", Some(2), 0),
    ];
    let index = CategoryIndex::new(&cats);
    assert_eq!(index.path_of(&cats[2]), "root > mid > leaf");
}

#[test]
fn example_snapshot_end_to_end() {
    // The shape a category list endpoint actually returns.
    let json = r#"[
        {"id": 1, "name": "Science", "parent_id": null, "position": 0},
        {"id": 2, "name": "Physics", "parent_id": 1, "position": 0},
        {"id": 3, "name": "Math", "parent_id": null, "position": 1}
    ]"#;
    let cats: Vec<Category> = serde_json::from_str(json).unwrap();

    let forest = build_forest(&cats);
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].name(), "Science");
    assert_eq!(forest[0].children[0].name(), "Physics");
    assert_eq!(forest[1].name(), "Math");
    assert!(forest[1].is_leaf());

    let flat: Vec<(String, usize)> = rows(&forest)
        .map(|(n, d)| (n.name().to_string(), d))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("Science".to_string(), 0),
            ("Physics".to_string(), 1),
            ("Math".to_string(), 0),
        ]
    );
}

#[test]
fn build_forest_is_idempotent() {
    let cats = vec![
        cat(5, "e", Some(4), 0),
        cat(4, "d", Some(5), 0),
        cat(1, "a", None, 3),
        cat(2, "b", Some(1), 1),
        cat(3, "orphan", Some(77), 0),
    ];
    let first = build_forest(&cats);
    let second = build_forest(&cats);
    assert_eq!(first, second);

    let first_rows: Vec<(i64, usize)> = rows(&first).map(|(n, d)| (n.id(), d)).collect();
    let second_rows: Vec<(i64, usize)> = rows(&second).map(|(n, d)| (n.id(), d)).collect();
    assert_eq!(first_rows, second_rows);
}

#[test]
fn snapshot_is_not_mutated() {
    let cats = vec![cat(2, "b", Some(1), 1), cat(1, "a", None, 0)];
    let before = cats.clone();
    let index = CategoryIndex::new(&cats);
    let _ = index.children_of(None);
    let _ = index.path_of(&cats[0]);
    let _ = build_forest(&cats);
    assert_eq!(cats, before);
}
