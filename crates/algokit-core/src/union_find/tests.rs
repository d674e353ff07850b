use super::*;
use crate::error::AlgoError;

fn singletons(n: u32) -> DisjointSet<u32> {
    (0..n).collect()
}

#[test]
fn test_initial_sets_are_singletons() {
    let mut uf = singletons(4);
    assert_eq!(uf.set_count(), 4);
    for x in 0..4 {
        assert_eq!(uf.find(&x).unwrap(), x);
    }
}

#[test]
fn test_make_set_is_idempotent() {
    let mut uf = singletons(2);
    uf.union(&0, &1).unwrap();
    assert!(!uf.make_set(1));
    assert_eq!(uf.len(), 2);
    assert_eq!(uf.set_count(), 1);
    // Re-registering must not split the merged set
    assert!(uf.same_set(&0, &1).unwrap());
}

#[test]
fn test_union_merges_and_reports() {
    let mut uf = singletons(3);
    assert!(uf.union(&0, &1).unwrap());
    assert_eq!(uf.find(&0).unwrap(), uf.find(&1).unwrap());
    assert!(!uf.union(&1, &0).unwrap());
    assert!(!uf.union(&2, &2).unwrap());
    assert_eq!(uf.set_count(), 2);
}

#[test]
fn test_transitive_unions_share_representative() {
    let mut uf = singletons(6);
    uf.union(&0, &1).unwrap();
    uf.union(&2, &3).unwrap();
    uf.union(&1, &3).unwrap();

    let root = uf.find(&0).unwrap();
    for x in [1, 2, 3] {
        assert_eq!(uf.find(&x).unwrap(), root);
    }
    assert_ne!(uf.find(&4).unwrap(), root);
    assert!(!uf.same_set(&4, &5).unwrap());
}

#[test]
fn test_find_is_idempotent() {
    let mut uf = singletons(8);
    for (a, b) in [(0, 1), (2, 3), (4, 5), (6, 7), (1, 3), (5, 7), (3, 7)] {
        uf.union(&a, &b).unwrap();
    }
    let first: Vec<u32> = (0..8).map(|x| uf.find(&x).unwrap()).collect();
    let second: Vec<u32> = (0..8).map(|x| uf.find(&x).unwrap()).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|r| *r == first[0]));
}

#[test]
fn test_union_by_rank_attaches_shorter_tree() {
    let mut uf = singletons(3);
    // {0,1} has rank 1; singleton 2 has rank 0 and must go underneath
    uf.union(&0, &1).unwrap();
    let big_root = uf.find(&0).unwrap();
    uf.union(&2, &0).unwrap();
    assert_eq!(uf.find(&2).unwrap(), big_root);

    let root_slot = uf.slots[&big_root];
    assert_eq!(uf.rank[root_slot], 1);
}

#[test]
fn test_equal_rank_union_increments_rank() {
    let mut uf = singletons(4);
    uf.union(&0, &1).unwrap();
    uf.union(&2, &3).unwrap();
    uf.union(&0, &2).unwrap();
    let root = uf.find(&3).unwrap();
    assert_eq!(uf.rank[uf.slots[&root]], 2);
}

#[test]
fn test_path_compression_flattens_chain() {
    let mut uf = singletons(5);
    // Build a chain by hand: 4 -> 3 -> 2 -> 1 -> 0
    for slot in 1..5 {
        uf.parent[slot] = slot - 1;
    }
    uf.sets = 1;

    assert_eq!(uf.find(&4).unwrap(), 0);
    for slot in 1..5 {
        assert_eq!(uf.parent[slot], 0, "slot {} not compressed", slot);
    }
}

#[test]
fn test_unknown_element_fails() {
    let mut uf = singletons(2);
    assert!(matches!(uf.find(&9), Err(AlgoError::UnknownNode { .. })));
    assert!(matches!(uf.union(&0, &9), Err(AlgoError::UnknownNode { .. })));
    // A failed union leaves the structure untouched
    assert_eq!(uf.set_count(), 2);
}

#[test]
fn test_sets_grouping_order() {
    let mut uf: DisjointSet<&str> = ["a", "b", "c", "d"].into_iter().collect();
    uf.union(&"d", &"b").unwrap();
    let groups = uf.sets();
    assert_eq!(groups, vec![vec!["a"], vec!["b", "d"], vec!["c"]]);
}

#[test]
fn test_string_elements() {
    let mut uf = DisjointSet::new();
    uf.make_set("x".to_string());
    uf.make_set("y".to_string());
    assert!(uf.union(&"x".to_string(), &"y".to_string()).unwrap());
    assert!(uf.contains(&"y".to_string()));
    assert!(!uf.is_empty());
}
