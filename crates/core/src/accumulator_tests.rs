use super::*;

#[test]
fn first_insert_creates_cell() {
    let mut map = AccumulatorMap::new(ReductionPolicy::Add);
    map.update("docA", 0.5);
    assert_eq!(map.len(), 1);
    let (_, cell) = map.iter().next().unwrap();
    assert_eq!(cell.val(), 0.5);
    assert_eq!(cell.count(), 1);
}

#[test]
fn repeat_key_accumulates() {
    let mut map = AccumulatorMap::new(ReductionPolicy::Add);
    map.update("docA", 0.5);
    map.update("docA", 0.25);
    assert_eq!(map.len(), 1);
    let (_, cell) = map.iter().next().unwrap();
    assert_eq!(cell.val(), 0.75);
    assert_eq!(cell.count(), 2);
}

#[test]
fn distinct_prefixes_are_distinct_keys() {
    // Exact equality, not prefix comparison: "doc" and "doc1" must not alias.
    let mut map = AccumulatorMap::new(ReductionPolicy::Add);
    map.update("doc", 1.0);
    map.update("doc1", 2.0);
    assert_eq!(map.len(), 2);
}

#[test]
fn rehash_preserves_all_cells_and_counts() {
    let mut map = AccumulatorMap::with_capacity(ReductionPolicy::Add, 4);
    for i in 0..200 {
        let docno = format!("doc{i}");
        map.update(&docno, i as f64);
        map.update(&docno, 1.0);
    }

    assert_eq!(map.len(), 200);
    for (docno, cell) in map.iter() {
        let i: f64 = docno.trim_start_matches("doc").parse().unwrap();
        assert_eq!(cell.val(), i + 1.0);
        assert_eq!(cell.count(), 2);
    }
}

#[test]
fn less_policy_tracks_minimum_across_rehash() {
    let mut map = AccumulatorMap::with_capacity(ReductionPolicy::Less, 4);
    map.update("docA", 5.0);
    for i in 0..50 {
        map.update(&format!("filler{i}"), 1.0);
    }
    map.update("docA", 0.1);
    let cell = map.iter().find(|(d, _)| *d == "docA").unwrap().1;
    assert_eq!(cell.val(), 0.1);
}
