//! End-to-end tests for the branch-and-bound TSP solver.
//!
//! These exercise the full pipeline: instance construction, relaxation,
//! branching and all three traversal strategies.

use tsp_bnb::{solve, SearchSettings, SearchStatus, Traversal, TspInstance};

const ALL_TRAVERSALS: [Traversal; 3] = [
    Traversal::BestBound,
    Traversal::BreadthFirst,
    Traversal::DepthFirst,
];

fn assert_valid_tour(instance: &TspInstance, tour: &[usize]) {
    let n = instance.dimension();
    assert_eq!(tour.len(), n + 1, "tour must be a closed walk");
    assert_eq!(tour.first(), tour.last(), "tour must return to its start");

    let mut seen = vec![false; n];
    for &loc in &tour[..n] {
        assert!(loc >= 1 && loc <= n, "location {} out of range", loc);
        assert!(!seen[loc - 1], "location {} visited twice", loc);
        seen[loc - 1] = true;
    }
}

#[test]
fn test_four_locations_all_strategies_agree() {
    // d(1,2)=10, d(1,3)=15, d(1,4)=20, d(2,3)=35, d(2,4)=25, d(3,4)=30.
    // The optimal tour 1-2-4-3-1 costs 10 + 25 + 30 + 15 = 80.
    let instance = TspInstance::from_rows(&[
        vec![0.0, 10.0, 15.0, 20.0],
        vec![10.0, 0.0, 35.0, 25.0],
        vec![15.0, 35.0, 0.0, 30.0],
        vec![20.0, 25.0, 30.0, 0.0],
    ])
    .unwrap();

    for traversal in ALL_TRAVERSALS {
        let settings = SearchSettings::default().with_traversal(traversal);
        let solution = solve(&instance, &settings).unwrap();

        assert_eq!(solution.status, SearchStatus::Optimal, "{:?}", traversal);
        assert_eq!(solution.cost, 80.0, "{:?}", traversal);
        assert_valid_tour(&instance, &solution.tour);
        assert_eq!(instance.cycle_cost(&solution.tour), solution.cost);
        assert!(solution.incumbent_updates >= 1);
    }
}

#[test]
fn test_asymmetric_three_locations() {
    // Going clockwise costs 1 per arc, counter-clockwise 10: the optimal
    // directed tour costs 3.
    let instance = TspInstance::from_rows(&[
        vec![0.0, 1.0, 10.0],
        vec![10.0, 0.0, 1.0],
        vec![1.0, 10.0, 0.0],
    ])
    .unwrap();

    for traversal in ALL_TRAVERSALS {
        let settings = SearchSettings::default().with_traversal(traversal);
        let solution = solve(&instance, &settings).unwrap();

        assert_eq!(solution.status, SearchStatus::Optimal);
        assert_eq!(solution.cost, 3.0);
        assert_eq!(solution.tour, vec![1, 2, 3, 1]);
    }
}

#[test]
fn test_two_clusters_cross_twice() {
    // Two cliques of three with unit arcs inside and cost-100 arcs across.
    // Any tour crosses between the cliques exactly twice: optimum is
    // 4 * 1 + 2 * 100 = 204.
    let rows: Vec<Vec<f64>> = (0..6)
        .map(|i| {
            (0..6)
                .map(|j| if (i < 3) == (j < 3) { 1.0 } else { 100.0 })
                .collect()
        })
        .collect();
    let instance = TspInstance::from_rows(&rows).unwrap();

    for traversal in ALL_TRAVERSALS {
        let settings = SearchSettings::default().with_traversal(traversal);
        let solution = solve(&instance, &settings).unwrap();

        assert_eq!(solution.status, SearchStatus::Optimal, "{:?}", traversal);
        assert_eq!(solution.cost, 204.0, "{:?}", traversal);
        assert_valid_tour(&instance, &solution.tour);
    }
}

#[test]
fn test_degenerate_two_locations() {
    // The only tour is 1-2-1; the root relaxation is already that tour and
    // the search never branches.
    let instance = TspInstance::from_rows(&[vec![0.0, 7.0], vec![9.0, 0.0]]).unwrap();

    for traversal in ALL_TRAVERSALS {
        let settings = SearchSettings::default().with_traversal(traversal);
        let solution = solve(&instance, &settings).unwrap();

        assert_eq!(solution.status, SearchStatus::Optimal);
        assert_eq!(solution.cost, 16.0);
        assert_eq!(solution.tour, vec![1, 2, 1]);
        assert_eq!(solution.nodes_explored, 1);
        assert_eq!(solution.nodes_generated, 1);
    }
}

#[test]
fn test_degenerate_single_location() {
    let instance = TspInstance::from_rows(&[vec![0.0]]).unwrap();
    let solution = solve(&instance, &SearchSettings::default()).unwrap();

    assert_eq!(solution.status, SearchStatus::Optimal);
    assert_eq!(solution.cost, 0.0);
    assert_eq!(solution.tour, vec![1, 1]);
    assert_eq!(solution.nodes_explored, 1);
}

#[test]
fn test_five_locations_brute_force_cross_check() {
    // Deterministic pseudo-random symmetric instance, verified against
    // exhaustive enumeration of all tours from location 1.
    let mut state: u64 = 20240601;
    let mut lcg = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) % 50) as f64 + 1.0
    };

    let n = 5;
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = lcg();
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    let instance = TspInstance::from_rows(&rows).unwrap();

    let expected = brute_force_tour_cost(&instance);

    for traversal in ALL_TRAVERSALS {
        let settings = SearchSettings::default().with_traversal(traversal);
        let solution = solve(&instance, &settings).unwrap();
        assert_eq!(solution.cost, expected, "{:?}", traversal);
        assert_valid_tour(&instance, &solution.tour);
    }
}

fn brute_force_tour_cost(instance: &TspInstance) -> f64 {
    let n = instance.dimension();
    let mut rest: Vec<usize> = (2..=n).collect();
    let mut best = f64::INFINITY;
    permute(&mut rest, 0, &mut |perm| {
        let mut walk = Vec::with_capacity(n + 1);
        walk.push(1);
        walk.extend_from_slice(perm);
        walk.push(1);
        let cost = instance.cycle_cost(&walk);
        if cost < best {
            best = cost;
        }
    });
    best
}

fn permute(items: &mut Vec<usize>, k: usize, visit: &mut impl FnMut(&[usize])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

#[test]
fn test_parsed_instance_end_to_end() {
    let text = "\
# four locations, symmetric
4
0 10 15 20
10 0 35 25
15 35 0 30
20 25 30 0
";
    let instance = TspInstance::from_reader(std::io::Cursor::new(text)).unwrap();
    let solution = solve(&instance, &SearchSettings::default()).unwrap();

    assert_eq!(solution.cost, 80.0);
    assert!(solution.status.is_optimal());
}

#[test]
fn test_node_budget_reports_best_effort() {
    let instance = TspInstance::from_rows(&[
        vec![0.0, 10.0, 15.0, 20.0],
        vec![10.0, 0.0, 35.0, 25.0],
        vec![15.0, 35.0, 0.0, 30.0],
        vec![20.0, 25.0, 30.0, 0.0],
    ])
    .unwrap();

    let settings = SearchSettings::default().with_max_nodes(0);
    let solution = solve(&instance, &settings).unwrap();

    assert_eq!(solution.status, SearchStatus::NodeLimit);
    assert!(!solution.status.is_optimal());
}
