
use super::*;

use crate::cigar::OpKind;

use rand::Rng;

//-----------------------------------------------------------------------------

fn check_build(start_offset: usize, encoding: &str, truth: &[usize]) {
    let map = IndexMap::build(start_offset, encoding);
    assert!(map.is_ok(), "Failed to build the map for {}: {}", encoding, map.unwrap_err());
    let map = map.unwrap();
    assert_eq!(map.len(), truth.len(), "Wrong map length for {} at {}", encoding, start_offset);
    assert_eq!(map.as_slice(), truth, "Wrong map for {} at {}", encoding, start_offset);
}

// Decodes the operations one unit at a time.
fn decode_units(start_offset: usize, ops: &[Operation]) -> Vec<usize> {
    let mut result = Vec::new();
    let mut cursor = start_offset;
    for op in ops.iter() {
        for _ in 0..op.count {
            if op.kind.consumes_transcript() {
                result.push(cursor);
            }
            if op.kind.consumes_chromosome() {
                cursor += 1;
            }
        }
    }
    result
}

#[test]
fn single_operations() {
    for start_offset in [0, 1, 42] {
        let p = start_offset;
        check_build(p, "1M", &[p]);
        check_build(p, "1I", &[p]);
        check_build(p, "1D", &[]);
        check_build(p, "1N", &[]);
        check_build(p, "1S", &[p]);
        check_build(p, "1H", &[]);
        check_build(p, "1P", &[]);
        check_build(p, "1=", &[p]);
        check_build(p, "1X", &[p]);
    }
}

#[test]
fn runs() {
    let ascending: Vec<usize> = (0..10).collect();
    check_build(0, "10M", &ascending);
    check_build(0, "10=", &ascending);
    check_build(0, "10X", &ascending);
    check_build(0, "10I", &[0; 10]);
    check_build(0, "10S", &[0; 10]);
    check_build(0, "10D", &[]);
    check_build(0, "10N", &[]);
    check_build(0, "10H", &[]);
    check_build(0, "10P", &[]);
    let shifted: Vec<usize> = (1..=10).collect();
    check_build(1, "10M", &shifted);
}

#[test]
fn mixed_operations() {
    check_build(
        3, "8M7D6M2I2M11D7M",
        &[3, 4, 5, 6, 7, 8, 9, 10, 18, 19, 20, 21, 22, 23, 24, 24, 24, 25, 37, 38, 39, 40, 41, 42, 43]
    );
    check_build(5, "3M1I3M1D5M", &[5, 6, 7, 8, 8, 9, 10, 12, 13, 14, 15, 16]);
    check_build(10, "2S3M2N2M2H", &[10, 10, 10, 11, 12, 15, 16]);
    check_build(0, "2M3P2M", &[0, 1, 2, 3]);
}

#[test]
fn chromosome_interval() {
    let map = IndexMap::build(3, "8M7D6M2I2M11D7M").unwrap();
    assert_eq!(map.chromosome_interval(), 3..44, "Wrong chromosome interval");
    let map = IndexMap::build(7, "5I").unwrap();
    assert_eq!(map.chromosome_interval(), 7..7, "Insertions should not extend the interval");
    let map = IndexMap::build(7, "5D").unwrap();
    assert!(map.is_empty(), "A deletion-only map should be empty");
    assert_eq!(map.chromosome_interval(), 7..12, "Deletions should extend the interval");
}

#[test]
fn lookup() {
    let map = IndexMap::build(5, "3M1I3M1D5M").unwrap();
    assert_eq!(map.get(0), Some(5), "Wrong value at the start");
    assert_eq!(map.get(11), Some(16), "Wrong value at the end");
    assert_eq!(map[7], 12, "Wrong value after a deletion");
    assert_eq!(map.get(12), None, "Found a value past the end");
    assert_eq!(map.get(-1), None, "Found a value at a negative coordinate");
    assert_eq!(map.get(isize::MIN), None, "Found a value at the minimum coordinate");
}

#[test]
fn invalid_encoding() {
    for encoding in ["", "0M", "5Q", "M5"] {
        assert!(IndexMap::build(0, encoding).is_err(), "Decoding {:?} should fail", encoding);
    }
}

#[test]
fn coordinate_overflow() {
    let result = IndexMap::build(usize::MAX, "1M");
    assert!(result.is_err(), "Advancing past usize::MAX should fail");
    let result = IndexMap::build(usize::MAX - 5, "3M3D1M");
    assert!(result.is_err(), "Advancing past usize::MAX in a deletion should fail");
    let result = IndexMap::build(usize::MAX - 5, "5M1I");
    assert!(result.is_ok(), "Reaching usize::MAX should not fail: {}", result.unwrap_err());
    assert_eq!(result.unwrap().as_slice(), &[usize::MAX - 5, usize::MAX - 4, usize::MAX - 3, usize::MAX - 2, usize::MAX - 1, usize::MAX]);
    check_build(usize::MAX, "2I1S", &[usize::MAX; 3]);
}

#[test]
fn length_overflow() {
    let result = IndexMap::build(0, "18446744073709551615I1I");
    assert!(result.is_err(), "A transcript length past usize::MAX should fail");
    let result = IndexMap::build(0, "9223372036854775807S");
    assert!(result.is_err(), "An index map that cannot be allocated should fail");
}

#[test]
fn huge_runs_without_entries() {
    check_build(0, "18446744073709551615H1H", &[]);
    check_build(0, "18446744073709551615P", &[]);
    check_build(0, "2M18446744073709551613N", &[0, 1]);
    let map = IndexMap::build(0, "1M18446744073709551614D").unwrap();
    assert_eq!(map.chromosome_interval(), 0..usize::MAX, "Wrong chromosome interval");
    assert!(IndexMap::build(0, "1M18446744073709551615D").is_err(), "The interval should overflow");
}

#[test]
fn random_encodings() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let start_offset = rng.gen_range(0..1_000_000);
        let num_ops = rng.gen_range(1..=20);
        let ops: Vec<Operation> = (0..num_ops).map(|_| {
            Operation::new(rng.gen_range(1..=50), OpKind::ALL[rng.gen_range(0..OpKind::NUM_TYPES)])
        }).collect();
        let encoding = cigar::to_string(&ops);
        let map = IndexMap::build(start_offset, &encoding).unwrap();
        assert_eq!(map.len(), cigar::transcript_len(&ops).unwrap(), "Wrong map length for {}", encoding);
        assert_eq!(map.as_slice(), decode_units(start_offset, &ops), "Wrong map for {}", encoding);
        let interval = map.chromosome_interval();
        assert_eq!(interval.len(), cigar::chromosome_len(&ops).unwrap(), "Wrong interval length for {}", encoding);
        for (i, value) in map.as_slice().iter().enumerate() {
            assert!(interval.start <= *value && *value <= interval.end, "Value {} outside the interval for {}", i, encoding);
            if i > 0 {
                assert!(map[i - 1] <= *value, "Map is not monotone at {} for {}", i, encoding);
            }
        }
    }
}

//-----------------------------------------------------------------------------
