use super::*;

#[test]
fn can_track_two_disjoint_cycles_and_their_merge() {
    let mut cycles = AsymmetricCycles::new(6);

    cycles.add_edge(0, 1);
    cycles.add_edge(1, 2);
    cycles.add_edge(2, 0);
    cycles.add_edge(3, 4);
    cycles.add_edge(4, 5);
    cycles.add_edge(5, 3);

    assert_eq!(cycles.cycles(), &[(0, 3), (3, 3)]);

    cycles.add_edge(2, 3);

    assert_eq!(cycles.cycles(), &[(0, 6)]);
}

#[test]
fn can_build_from_edges() {
    let mut cycles = AsymmetricCycles::from_edges(4, vec![(0, 1), (1, 0), (2, 3), (3, 2)]);

    assert_eq!(cycles.next_of(0), 1);
    assert_eq!(cycles.next_of(2), 3);
    assert_eq!(cycles.cycles(), &[(0, 2), (2, 2)]);
}

#[test]
fn can_ignore_edge_readdition() {
    let mut cycles = AsymmetricCycles::from_edges(3, vec![(0, 1), (1, 2), (2, 0)]);
    assert_eq!(cycles.cycles(), &[(0, 3)]);

    cycles.add_edge(1, 2);

    assert_eq!(cycles.cycles(), &[(0, 3)]);
}

#[test]
fn can_clone_independently() {
    let mut original = AsymmetricCycles::from_edges(3, vec![(0, 1), (1, 2), (2, 0)]);
    let mut clone = original.clone();

    clone.add_edge(2, 1);

    assert_eq!(original.next_of(2), 0);
    assert_eq!(original.cycles(), &[(0, 3)]);
    assert_eq!(clone.next_of(2), 1);
    assert_eq!(clone.cycles(), &[(0, 3)]);
}

#[test]
fn can_skip_vertices_without_edges() {
    let mut cycles = AsymmetricCycles::new(5);

    cycles.add_edge(1, 3);
    cycles.add_edge(3, 1);

    assert_eq!(cycles.cycles(), &[(1, 2)]);
    assert_eq!(cycles.next_of(0), NOT_SET);
}
