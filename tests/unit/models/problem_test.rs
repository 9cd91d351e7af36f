use super::*;
use crate::helpers::create_matrix;

fn create_problem() -> TspProblem {
    let weights = create_matrix(vec![
        vec![0., 3., 1., 2.],
        vec![3., 0., 2., 1.],
        vec![1., 2., 0., 3.],
        vec![2., 1., 3., 0.],
    ]);

    TspProblem::new(0, Some(0), weights)
}

#[test]
fn can_order_nearest_neighbours_by_weight() {
    let problem = create_problem();

    let neighbours = problem.nearest_neighbours_forward(3);

    assert_eq!(neighbours[0], vec![2, 3, 1]);
    assert_eq!(neighbours[1], vec![3, 2, 0]);
}

#[test]
fn can_truncate_nearest_neighbours() {
    let problem = create_problem();

    let neighbours = problem.nearest_neighbours_forward(1);

    assert_eq!(neighbours.iter().map(|list| list.len()).max(), Some(1));
}

#[test]
fn can_break_weight_ties_by_customer_id() {
    let weights = create_matrix(vec![vec![0., 1., 1., 1.]; 4]);
    let problem = TspProblem::new(0, None, weights);

    let neighbours = problem.nearest_neighbours_forward(3);

    assert_eq!(neighbours[0], vec![1, 2, 3]);
}

#[test]
fn can_cache_nearest_neighbours_per_k() {
    let problem = create_problem();

    let first = problem.nearest_neighbours_forward(2);
    let second = problem.nearest_neighbours_forward(2);

    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn can_convert_to_closed_shape() {
    let weights = create_matrix(vec![vec![0.; 3]; 3]);
    let problem = TspProblem::new(1, Some(2), weights);

    let closed = problem.to_closed();

    assert_eq!(closed.first(), 1);
    assert_eq!(closed.last(), Some(1));
    assert_eq!(closed.size(), 3);
}

#[test]
fn can_expose_stsp_problem_facts() {
    let weights = create_matrix(vec![vec![1.; 6]; 6]);
    let problem = StspProblem::new(0, None, weights, [0., 1., 1., 5.], 10.);

    assert_eq!(problem.size(), 3);
    assert_eq!(problem.turn_penalty(3), 5.);
    assert_eq!(problem.max(), 10.);
    assert_eq!(problem.weight(0, 5), 1.);
}
