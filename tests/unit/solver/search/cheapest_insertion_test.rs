use super::*;
use crate::helpers::{create_matrix, create_uniform_directed_matrix};
use crate::models::directed::extract_turn;

fn physical_ids(tour: &Tour) -> Vec<usize> {
    let mut ids: Vec<_> = tour.iter().map(extract_id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn can_grow_open_tour_without_budget_pressure() {
    let problem = StspProblem::new(0, None, create_uniform_directed_matrix(3), [0.; 4], f64::INFINITY);

    let (tour, fitness) = CheapestInsertionSolver.solve(&problem, &StspObjective).unwrap();

    assert_eq!(tour.first(), build_directed_id(0, 0));
    assert_eq!(physical_ids(&tour), vec![0, 1, 2]);
    assert_eq!(fitness.customers, 3);
    assert_eq!(fitness.weight, 2.);
}

#[test]
fn can_respect_weight_budget() {
    let problem = StspProblem::new(0, None, create_uniform_directed_matrix(4), [0.; 4], 1.5);

    let (tour, fitness) = CheapestInsertionSolver.solve(&problem, &StspObjective).unwrap();

    assert_eq!(fitness.customers, 2);
    assert!(fitness.weight <= 1.5);
    assert_eq!(tour.count(), 2);
}

#[test]
fn can_keep_everything_out_on_zero_budget() {
    let mut weights = vec![vec![5.; 6]; 6];
    (0..6).for_each(|side| weights[side][side] = 0.);

    let problem = StspProblem::new(0, None, create_matrix(weights), [0.; 4], 0.);

    let (tour, fitness) = CheapestInsertionSolver.solve(&problem, &StspObjective).unwrap();

    assert_eq!(fitness.customers, 1);
    assert_eq!(physical_ids(&tour), vec![0]);
}

#[test]
fn can_grow_fixed_end_tour_between_endpoints() {
    let problem = StspProblem::new(0, Some(2), create_uniform_directed_matrix(3), [0.; 4], f64::INFINITY);

    let (tour, fitness) = CheapestInsertionSolver.solve(&problem, &StspObjective).unwrap();

    assert_eq!(extract_id(tour.first()), 0);
    assert_eq!(tour.iter().last().map(extract_id), Some(2));
    assert_eq!(physical_ids(&tour), vec![0, 1, 2]);
    assert_eq!(fitness.customers, 3);
}

#[test]
fn can_prefer_cheap_turns() {
    let problem = StspProblem::new(0, None, create_uniform_directed_matrix(2), [3., 1., 2., 4.], f64::INFINITY);

    let (tour, _) = CheapestInsertionSolver.solve(&problem, &StspObjective).unwrap();

    assert_eq!(extract_turn(tour.first()), 1);
    assert!(tour.iter().all(|directed_id| extract_turn(directed_id) == 1));
}

#[test]
fn can_solve_through_problem_entry_points() {
    let problem = StspProblem::new(0, Some(0), create_uniform_directed_matrix(3), [0.; 4], f64::INFINITY);

    let (default_tour, default_fitness) = problem.solve().unwrap();
    let (custom_tour, custom_fitness) = problem.solve_with(&CheapestInsertionSolver).unwrap();

    assert_eq!(default_fitness.customers, 3);
    assert!(default_tour.is_closed());
    assert_eq!(default_fitness.customers, custom_fitness.customers);
    assert_eq!(default_tour, custom_tour);
}
