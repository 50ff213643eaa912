use avl_forest::AvlTree;

fn scenario_tree() -> AvlTree<i32> {
    [25, 11, 46, 7, 17, 30, 88, 9, 26, 37].into_iter().collect()
}

#[test]
fn cursor_begin_to_end_matrix() {
    let tree = scenario_tree();

    let mut out = Vec::new();
    let mut it = tree.begin();
    while it != tree.end() {
        out.push(*it.value());
        it.move_next();
    }
    assert_eq!(out, vec![7, 9, 11, 17, 25, 26, 30, 37, 46, 88]);

    let rendered: Vec<String> = tree.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered.join(" "), "7 9 11 17 25 26 30 37 46 88");
}

#[test]
fn cursor_end_to_begin_matrix() {
    let tree = scenario_tree();

    let mut out = Vec::new();
    let mut it = tree.maximum();
    while !it.is_end() {
        out.push(*it.value());
        it.move_prev();
    }
    assert_eq!(out, vec![88, 46, 37, 30, 26, 25, 17, 11, 9, 7]);
}

#[test]
fn cursor_structural_neighbours_matrix() {
    let tree = scenario_tree();

    let at = tree.find(&26);
    assert_eq!(tree.predecessor_at(at).value(), &25);
    assert_eq!(tree.successor_at(at).value(), &30);

    // 17 has no right child: its successor is found by climbing.
    let at = tree.find(&17);
    assert_eq!(at.successor().value(), &25);
    // 25 has a right subtree: its successor is that subtree's leftmost node.
    let at = tree.find(&25);
    assert_eq!(at.successor().value(), &26);
    assert_eq!(at.predecessor().value(), &17);
    // 9 has no left child: its predecessor is found by climbing.
    assert_eq!(tree.find(&9).predecessor().value(), &7);

    assert!(tree.minimum().predecessor().is_end());
    assert!(tree.maximum().successor().is_end());
}

#[test]
fn cursor_matches_value_search_matrix() {
    let tree = scenario_tree();
    for v in tree.iter() {
        let at = tree.find(v);
        assert_eq!(at.successor().get(), tree.successor(v).get());
        assert_eq!(at.predecessor().get(), tree.predecessor(v).get());
    }
}

#[test]
fn cursor_queries_matrix() {
    let tree = scenario_tree();

    let root = tree.root();
    assert_eq!(root.value(), &25);
    assert_eq!(root.depth(), 0);
    assert_eq!(root.height(), tree.height());

    let nine = tree.find(&9);
    assert_eq!(nine.depth(), 3);
    assert_eq!(nine.height(), 0);
    assert_eq!(tree.find(&46).height(), 2);
    assert_eq!(tree.find(&30).height(), 1);

    let end = tree.end();
    assert!(end.is_end());
    assert_eq!(end.get(), None);
    assert_eq!(end.index(), None);
    assert_eq!(end.height(), -1);
    assert_eq!(tree.find(&1000), end);
    assert_eq!(format!("{end:?}"), "Cursor(end)");
    assert_eq!(format!("{nine:?}"), "Cursor(9)");
}

#[test]
fn cursor_copies_are_independent_matrix() {
    let tree = scenario_tree();
    let a = tree.begin();
    let mut b = a;
    b.move_next();
    b.move_next();
    assert_eq!(a.value(), &7);
    assert_eq!(b.value(), &11);
    assert_ne!(a, b);

    let mut c = a;
    c.move_next();
    c.move_next();
    assert_eq!(b, c);
}

#[test]
fn cursor_on_empty_tree_matrix() {
    let tree = AvlTree::<i32>::new();
    assert_eq!(tree.begin(), tree.end());
    assert!(tree.minimum().is_end());
    assert!(tree.maximum().is_end());
    assert!(tree.predecessor(&1).is_end());
    assert!(tree.successor(&1).is_end());
}

#[test]
fn cursors_of_different_trees_differ_matrix() {
    let a = scenario_tree();
    let b = a.clone();
    assert_ne!(a.find(&25), b.find(&25));
    assert_ne!(a.end(), b.end());
}

#[test]
#[should_panic(expected = "cannot dereference the end cursor")]
fn cursor_dereference_end_panics() {
    let tree = scenario_tree();
    let _ = tree.end().value();
}

#[test]
#[should_panic(expected = "cannot advance the end cursor")]
fn cursor_advance_end_panics() {
    let tree = scenario_tree();
    let mut it = tree.maximum();
    it.move_next();
    it.move_next();
}

#[test]
#[should_panic(expected = "cannot rewind the end cursor")]
fn cursor_rewind_end_panics() {
    let tree = AvlTree::<i32>::new();
    tree.end().move_prev();
}

#[test]
#[should_panic(expected = "cannot measure the depth of the end cursor")]
fn cursor_depth_of_end_panics() {
    let tree = AvlTree::<i32>::new();
    let _ = tree.end().depth();
}

#[test]
#[should_panic(expected = "cursor belongs to another tree")]
fn cursor_from_other_tree_panics() {
    let a = scenario_tree();
    let b = scenario_tree();
    let _ = a.successor_at(b.find(&25));
}
