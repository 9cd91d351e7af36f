use super::*;
use crate::helpers::create_circle_matrix_with_positions;
use crate::solver::objectives::TspObjective;
use crate::models::TspProblem;

fn create_scrambled_circle_problem(last: Option<usize>) -> TspProblem {
    // the optimal closed order is [0, 3, 1, 4, 2, 5] with weight 6
    TspProblem::new(0, last, create_circle_matrix_with_positions(&[0, 2, 4, 1, 3, 5]))
}

#[test]
fn can_untangle_closed_tour() {
    let problem = create_scrambled_circle_problem(Some(0));
    let objective = TspObjective;

    let tour = Tour::new([0, 1, 2, 3, 4, 5], Some(0)).unwrap();
    let fitness = objective.calculate(&problem, &tour);

    let (improved, improved_fitness) =
        TwoOptOperator.improve(&problem, &objective, &tour, &fitness).expect("no improvement found");

    assert!(improved_fitness < fitness);
    assert!((improved_fitness - 6.).abs() < 1e-9);
    assert_eq!(improved.first(), 0);
    assert_eq!(improved.count(), 6);
}

#[test]
fn can_keep_fixed_endpoints_in_place() {
    let problem = create_scrambled_circle_problem(Some(5));
    let objective = TspObjective;

    let tour = Tour::new([0, 1, 2, 3, 4, 5], Some(5)).unwrap();
    let fitness = objective.calculate(&problem, &tour);

    let (improved, improved_fitness) =
        TwoOptOperator.improve(&problem, &objective, &tour, &fitness).expect("no improvement found");

    assert!(improved_fitness < fitness);
    assert_eq!(improved.first(), 0);
    assert_eq!(improved.iter().last(), Some(5));
    assert_eq!(improved.last(), Some(5));
}

#[test]
fn cannot_improve_optimal_tour() {
    let problem = create_scrambled_circle_problem(Some(0));
    let objective = TspObjective;

    let tour = Tour::new([0, 3, 1, 4, 2, 5], Some(0)).unwrap();
    let fitness = objective.calculate(&problem, &tour);

    assert!(TwoOptOperator.improve(&problem, &objective, &tour, &fitness).is_none());
}

#[test]
fn cannot_improve_tiny_tour() {
    let problem = create_scrambled_circle_problem(Some(0));
    let objective = TspObjective;

    let tour = Tour::new([0, 1, 2], Some(0)).unwrap();
    let fitness = objective.calculate(&problem, &tour);

    assert!(TwoOptOperator.improve(&problem, &objective, &tour, &fitness).is_none());
}
