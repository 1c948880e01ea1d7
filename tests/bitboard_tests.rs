use seabattle::{BitBoard, Coordinate};

#[test]
fn test_insert_remove_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    assert!(bb.insert(Coordinate::new(1, 1)));
    assert!(!bb.insert(Coordinate::new(1, 1)));
    assert!(bb.contains(Coordinate::new(1, 1)));

    assert!(bb.remove(Coordinate::new(1, 1)));
    assert!(!bb.contains(Coordinate::new(1, 1)));
    assert!(!bb.remove(Coordinate::new(1, 1)));
}

#[test]
fn test_off_grid_is_never_member() {
    let bb: BitBoard<u16, 4> = (0..16)
        .map(|i| Coordinate::new(i % 4, i / 4))
        .collect();
    assert_eq!(bb.count_ones(), 16);
    assert!(!bb.contains(Coordinate::new(-1, 0)));
    assert!(!bb.contains(Coordinate::new(0, 4)));
}

#[test]
#[should_panic]
fn test_insert_off_grid_panics() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.insert(Coordinate::new(4, 0));
}

#[test]
fn test_from_iter_and_iter() {
    let bb: BitBoard<u16, 4> = [Coordinate::new(3, 3), Coordinate::new(1, 0)]
        .into_iter()
        .collect();
    let squares: Vec<_> = bb.iter().collect();
    assert_eq!(squares, vec![Coordinate::new(1, 0), Coordinate::new(3, 3)]);
}

#[test]
fn test_intersection() {
    let a: BitBoard<u128, 10> = [Coordinate::new(0, 0), Coordinate::new(5, 5)].into_iter().collect();
    let b: BitBoard<u128, 10> = [Coordinate::new(5, 5), Coordinate::new(9, 9)].into_iter().collect();
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Coordinate::new(5, 5)]);
}
