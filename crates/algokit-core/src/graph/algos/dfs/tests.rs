use super::*;

fn digraph(adjacency: Vec<(u32, Vec<u32>)>) -> Graph<u32> {
    Graph::from_adjacency(
        GraphKind::Directed,
        adjacency
            .into_iter()
            .map(|(node, targets)| (node, targets.into_iter().map(|t| (t, 1.0)))),
    )
    .unwrap()
}

fn undirected(edges: &[(u32, u32)]) -> Graph<u32> {
    let mut graph = Graph::undirected();
    for (a, b) in edges {
        graph.add_node(*a);
        graph.add_node(*b);
        graph.add_edge(a, b).unwrap();
    }
    graph
}

#[test]
fn test_dfs_preorder_follows_adjacency_order() {
    let graph = digraph(vec![(0, vec![1, 2]), (1, vec![3]), (2, vec![]), (3, vec![])]);
    let traversal = dfs(&graph, &0).unwrap();
    assert_eq!(traversal.order, vec![0, 1, 3, 2]);
    assert_eq!(traversal.parent(&3), Some(&1));
    assert_eq!(traversal.depth(&3), Some(2));
    assert_eq!(traversal.depth(&2), Some(1));
}

#[test]
fn test_dfs_tolerates_cycles_and_self_loops() {
    let graph = digraph(vec![(0, vec![1, 2]), (1, vec![2]), (2, vec![0, 3]), (3, vec![3])]);
    let traversal = dfs(&graph, &2).unwrap();
    assert_eq!(traversal.order, vec![2, 0, 1, 3]);
    assert_eq!(traversal.path_to(&1), Some(vec![2, 0, 1]));
}

#[test]
fn test_dfs_only_reachable_component() {
    let graph = undirected(&[(0, 1), (2, 3)]);
    let traversal = dfs(&graph, &3).unwrap();
    assert_eq!(traversal.order, vec![3, 2]);
    assert!(!traversal.contains(&0));
}

#[test]
fn test_dfs_deep_chain_does_not_overflow() {
    let mut graph = Graph::directed();
    let len = 200_000u32;
    for node in 0..len {
        graph.add_node(node);
    }
    for node in 1..len {
        graph.add_edge(&(node - 1), &node).unwrap();
    }
    let traversal = dfs(&graph, &0).unwrap();
    assert_eq!(traversal.order.len(), len as usize);
    assert_eq!(traversal.depth(&(len - 1)), Some(len as usize - 1));
}

#[test]
fn test_dfs_unknown_source() {
    let graph = undirected(&[(0, 1)]);
    assert!(matches!(dfs(&graph, &5), Err(AlgoError::UnknownNode { .. })));
}

#[test]
fn test_dfs_find_path() {
    let graph = digraph(vec![(0, vec![1, 2]), (1, vec![]), (2, vec![3]), (3, vec![])]);
    assert_eq!(dfs_find_path(&graph, &0, &3).unwrap(), Some(vec![0, 2, 3]));
    assert_eq!(dfs_find_path(&graph, &3, &0).unwrap(), None);
    assert!(dfs_path_exists(&graph, &0, &1).unwrap());
    assert!(!dfs_path_exists(&graph, &1, &2).unwrap());
    assert!(dfs_path_exists(&graph, &1, &1).unwrap());
}

#[test]
fn test_topological_sort_dag() {
    // 5 -> 2 -> 3 -> 1, 5 -> 0, 4 -> 0, 4 -> 1
    let graph = digraph(vec![
        (5, vec![2, 0]),
        (4, vec![0, 1]),
        (2, vec![3]),
        (3, vec![1]),
        (0, vec![]),
        (1, vec![]),
    ]);
    let order = topological_sort(&graph).unwrap();
    assert_eq!(order, vec![4, 5, 0, 2, 3, 1]);

    let position = |n: u32| order.iter().position(|x| *x == n).unwrap();
    for edge in graph.edges() {
        assert!(position(edge.from) < position(edge.to));
    }
}

#[test]
fn test_topological_sort_rejects_cycle() {
    let graph = digraph(vec![(0, vec![1]), (1, vec![2]), (2, vec![0])]);
    let err = topological_sort(&graph).unwrap_err();
    assert!(matches!(err, AlgoError::CycleDetected { ref node } if node == "0"));
}

#[test]
fn test_topological_sort_requires_directed() {
    let graph = undirected(&[(0, 1)]);
    assert!(matches!(
        topological_sort(&graph),
        Err(AlgoError::InvalidGraphMode { .. })
    ));
}

#[test]
fn test_has_cycle_directed() {
    assert!(!has_cycle(&digraph(vec![(0, vec![1, 2]), (1, vec![2])])).unwrap());
    assert!(has_cycle(&digraph(vec![(0, vec![1]), (1, vec![0])])).unwrap());
    assert!(has_cycle(&digraph(vec![(0, vec![0])])).unwrap());
}

#[test]
fn test_has_cycle_undirected() {
    // A tree: every arc back to the parent is skipped
    assert!(!has_cycle(&undirected(&[(0, 1), (1, 2), (1, 3)])).unwrap());
    assert!(has_cycle(&undirected(&[(0, 1), (1, 2), (2, 0)])).unwrap());
    // Cycle in the second component only
    assert!(has_cycle(&undirected(&[(0, 1), (2, 3), (3, 4), (4, 2)])).unwrap());
    // Parallel edges form a two-node cycle
    assert!(has_cycle(&undirected(&[(0, 1), (0, 1)])).unwrap());
    // Self-loop
    assert!(has_cycle(&undirected(&[(0, 0)])).unwrap());
}

#[test]
fn test_strongly_connected_components() {
    let graph = digraph(vec![
        (0, vec![1]),
        (1, vec![2]),
        (2, vec![0, 3]),
        (3, vec![4]),
        (4, vec![5]),
        (5, vec![3]),
        (6, vec![5]),
    ]);
    let mut components: Vec<Vec<u32>> = strongly_connected_components(&graph)
        .unwrap()
        .into_iter()
        .map(|mut c| {
            c.sort_unstable();
            c
        })
        .collect();
    assert_eq!(components.len(), 3);
    components.sort();
    assert_eq!(components, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
}

#[test]
fn test_scc_condensation_order() {
    let graph = digraph(vec![(0, vec![1]), (1, vec![0, 2]), (2, vec![])]);
    let components = strongly_connected_components(&graph).unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1], vec![2]);
}

#[test]
fn test_all_paths_in_discovery_order() {
    let graph = digraph(vec![(0, vec![1, 2]), (1, vec![2]), (2, vec![0, 3]), (3, vec![3])]);
    assert_eq!(
        dfs_all_paths(&graph, &0, &3).unwrap(),
        vec![vec![0, 1, 2, 3], vec![0, 2, 3]]
    );
    assert!(dfs_all_paths(&graph, &3, &0).unwrap().is_empty());
    assert_eq!(dfs_all_paths(&graph, &3, &3).unwrap(), vec![vec![3]]);
}

#[test]
fn test_all_paths_are_simple_on_undirected() {
    let graph = undirected(&[(0, 1), (1, 2), (0, 2), (2, 3)]);
    let paths = dfs_all_paths(&graph, &0, &3).unwrap();
    assert_eq!(paths, vec![vec![0, 1, 2, 3], vec![0, 2, 3]]);
    for path in &paths {
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
    }
}

#[test]
fn test_all_paths_counts_parallel_arcs() {
    let graph = digraph(vec![(0, vec![1, 1])]);
    assert_eq!(dfs_all_paths(&graph, &0, &1).unwrap().len(), 2);
    assert!(matches!(
        dfs_all_paths(&graph, &0, &9),
        Err(AlgoError::UnknownNode { .. })
    ));
}
