use super::*;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn shuffled_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    let ds = Dataset::shuffled(100, &mut rng);
    let mut sorted = ds.values().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=100).collect::<Vec<u32>>());
    assert_eq!(ds.annotation().len(), 100);
    assert!(ds.annotation().iter().all(|&a| a == Annotation::Default));
}

#[test]
fn reset_resizes_and_clears_annotation() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut ds = Dataset::shuffled(8, &mut rng);
    ds.mark_all_sorted();
    ds.reset(3, &mut rng);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.annotation(), &[Annotation::Default; 3]);
}

#[test]
fn same_seed_same_permutation() {
    let a = Dataset::shuffled(32, &mut StdRng::seed_from_u64(99));
    let b = Dataset::shuffled(32, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn from_permutation_validates() {
    assert!(Dataset::from_permutation(vec![3, 1, 4, 2]).is_ok());
    assert!(Dataset::from_permutation(vec![]).is_ok());
    assert!(Dataset::from_permutation(vec![0, 1]).is_err());
    assert!(Dataset::from_permutation(vec![1, 3]).is_err());
    assert!(Dataset::from_permutation(vec![2, 2]).is_err());
}

#[test]
fn mark_helpers() {
    let mut ds = Dataset::from_permutation(vec![2, 1, 3]).unwrap();
    ds.mark(0, Annotation::Comparing);
    ds.mark_range(1..3, Annotation::Sorted);
    assert_eq!(
        ds.annotation(),
        &[Annotation::Comparing, Annotation::Sorted, Annotation::Sorted]
    );
    ds.clear_annotation();
    assert_eq!(ds.annotation(), &[Annotation::Default; 3]);
}

#[test]
fn counters_accumulate_and_reset() {
    let mut c = Counters::default();
    c.compared();
    c.swapped();
    c.add(3, 2);
    assert_eq!((c.comparisons(), c.swaps()), (4, 3));
    c.reset();
    assert_eq!(c, Counters::default());
}
