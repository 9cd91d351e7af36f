use super::*;

fn open_tour() -> Tour {
    Tour::new([0, 1, 2, 3], None).expect("cannot create tour")
}

fn closed_tour() -> Tour {
    Tour::new([0, 1, 2, 3], Some(0)).expect("cannot create tour")
}

fn fixed_end_tour() -> Tour {
    Tour::new([0, 1, 2, 3], Some(3)).expect("cannot create tour")
}

#[test]
fn can_create_tours_of_all_shapes() {
    let open = open_tour();
    assert_eq!((open.first(), open.last(), open.count()), (0, None, 4));
    assert!(!open.is_closed());

    let closed = closed_tour();
    assert_eq!((closed.first(), closed.last(), closed.count()), (0, Some(0), 4));
    assert!(closed.is_closed());

    let fixed = fixed_end_tour();
    assert_eq!((fixed.first(), fixed.last(), fixed.count()), (0, Some(3), 4));
    assert!(!fixed.is_closed());
}

#[test]
fn cannot_create_degenerate_tours() {
    assert!(Tour::new([], None).is_err());
    assert!(Tour::new([0, 1, 1], None).is_err());
    assert!(Tour::new([0, 1, 0], None).is_err());
    assert!(Tour::new([0, 1, 2], Some(5)).is_err());
}

#[test]
fn can_produce_pairs_according_to_shape() {
    let pairs: Vec<_> = open_tour().pairs().collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);

    let pairs: Vec<_> = closed_tour().pairs().collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);

    let pairs: Vec<_> = fixed_end_tour().pairs().collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn can_answer_successor_queries() {
    let open = open_tour();
    assert_eq!(open.next_to(0), Some(1));
    assert_eq!(open.next_to(3), None);
    assert_eq!(open.next_to(7), None);

    let closed = closed_tour();
    assert_eq!(closed.next_to(3), Some(0));

    assert_eq!(fixed_end_tour().next_to(3), None);
}

#[test]
fn can_answer_containment_queries() {
    let tour = open_tour();

    assert!((0..4).all(|customer| tour.contains(customer)));
    assert!(!tour.contains(4));
    assert!(!tour.contains(100));
}

#[test]
fn can_insert_after() {
    let mut tour = open_tour();

    tour.insert_after(1, 7).expect("cannot insert");

    assert_eq!(tour.count(), 5);
    assert_eq!(tour.iter().collect::<Vec<_>>(), vec![0, 1, 7, 2, 3]);
    assert_eq!(tour.next_to(1), Some(7));
    assert_eq!(tour.next_to(7), Some(2));
}

#[test]
fn can_insert_after_the_tail() {
    let mut tour = open_tour();

    tour.insert_after(3, 4).expect("cannot insert");

    assert_eq!(tour.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(tour.next_to(4), None);
}

#[test]
fn cannot_insert_invalid_customers() {
    let mut tour = fixed_end_tour();

    assert!(tour.insert_after(9, 5).is_err(), "inserting after an absent customer");
    assert!(tour.insert_after(1, 2).is_err(), "inserting a present customer");
    assert!(tour.insert_after(1, 3).is_err(), "inserting the fixed last customer");
}

#[test]
fn can_remove() {
    let mut tour = closed_tour();

    tour.remove(2).expect("cannot remove");

    assert_eq!(tour.count(), 3);
    assert_eq!(tour.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    assert_eq!(tour.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 3), (3, 0)]);
    assert!(!tour.contains(2));
}

#[test]
fn can_remove_the_tail() {
    let mut tour = open_tour();

    tour.remove(3).expect("cannot remove");

    assert_eq!(tour.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(tour.next_to(2), None);
}

#[test]
fn cannot_remove_protected_customers() {
    let mut tour = fixed_end_tour();

    assert!(tour.remove(0).is_err(), "removing the first customer");
    assert!(tour.remove(3).is_err(), "removing the fixed last customer");
    assert!(tour.remove(9).is_err(), "removing an absent customer");
}

#[test]
fn can_clone_with_equal_pairs() {
    let tour = closed_tour();
    let clone = tour.clone();

    assert_eq!(tour, clone);
    assert!(tour.pairs().eq(clone.pairs()));
}

#[test]
fn can_copy_from_idempotently() {
    let source = Tour::new([0, 2, 4, 1, 3], Some(0)).expect("cannot create tour");
    let mut target = open_tour();

    target.copy_from(&source);
    target.copy_from(&source);

    assert_eq!(target, source);
}

#[test]
fn can_rebase_between_shapes() {
    let open = open_tour();

    let closed = Tour::new_with_shape(&open, Some(0)).expect("cannot rebase");
    assert!(closed.is_closed());
    assert!(open.iter().eq(closed.iter()));

    let fixed = Tour::new_with_shape(&open, Some(3)).expect("cannot rebase");
    assert_eq!(fixed.last(), Some(3));

    let reopened = Tour::new_with_shape(&closed, None).expect("cannot rebase");
    assert_eq!(reopened, open);
}

#[test]
fn can_handle_single_customer_tours() {
    let tour = Tour::new([5], Some(5)).expect("cannot create tour");

    assert_eq!((tour.first(), tour.count()), (5, 1));
    assert!(tour.contains(5));
    assert_eq!(tour.pairs().count(), 0);
    assert_eq!(tour.next_to(5), None);
}
