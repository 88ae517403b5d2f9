use super::*;

#[derive(Default)]
struct Recorder {
    compared: Vec<usize>,
    exchanged: Vec<(usize, usize)>,
    pivot: Option<usize>,
}

impl Probe for Recorder {
    fn compared(&mut self, idx: usize) {
        self.compared.push(idx);
    }

    fn exchanged(&mut self, a: usize, b: usize) {
        self.exchanged.push((a, b));
    }

    fn pivot_placed(&mut self, idx: usize) {
        self.pivot = Some(idx);
    }
}

#[test]
fn partitions_around_last_element() {
    let mut values = vec![5, 2, 7, 1, 4];
    let p = lomuto(&mut values, 0, 4, &mut Silent);
    assert_eq!(p, 2);
    assert_eq!(values[p], 4);
    assert!(values[..p].iter().all(|&v| v <= 4));
    assert!(values[p + 1..].iter().all(|&v| v > 4));
}

#[test]
fn probe_sees_every_scan_and_real_exchange() {
    let mut values = vec![3, 1, 4, 2];
    let mut rec = Recorder::default();
    let p = lomuto(&mut values, 0, 3, &mut rec);
    assert_eq!(rec.compared, vec![0, 1, 2]);
    // 1 moves to the front, then the pivot 2 lands at index 1.
    assert_eq!(rec.exchanged, vec![(0, 1), (1, 3)]);
    assert_eq!(rec.pivot, Some(p));
    assert_eq!(values, vec![1, 2, 4, 3]);
}

#[test]
fn already_partitioned_range_reports_no_exchanges() {
    let mut values = vec![1, 2, 3];
    let mut rec = Recorder::default();
    let p = lomuto(&mut values, 0, 2, &mut rec);
    assert_eq!(p, 2);
    assert!(rec.exchanged.is_empty());
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn sub_range_leaves_outside_untouched() {
    let mut values = vec![9, 3, 1, 2, 8];
    lomuto(&mut values, 1, 3, &mut Silent);
    assert_eq!(values[0], 9);
    assert_eq!(values[4], 8);
    assert_eq!(&values[1..4], &[1, 2, 3]);
}
