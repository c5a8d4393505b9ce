/*!
 * Tests for bilingual alignment
 */

use rehal::alignment::{MatchStrategy, align};
use crate::common::unit;

/// Output length always equals the primary length, both strategies
#[test]
fn test_align_withAnySecondaryLength_shouldMatchPrimaryLength() {
    let primary = vec![unit(1, 1, "A"), unit(2, 2, "B"), unit(3, 3, "C")];

    for strategy in [MatchStrategy::ByPosition, MatchStrategy::ByKey] {
        for secondary_len in 0..5 {
            let secondary: Vec<_> = (0..secondary_len)
                .map(|i| unit(i + 1, (i + 1) as u32, "x"))
                .collect();
            let pairs = align(primary.clone(), secondary, strategy);
            assert_eq!(pairs.len(), primary.len(), "strategy {strategy}");
        }
    }
}

/// Empty primary yields empty output regardless of secondary
#[test]
fn test_align_withEmptyPrimary_shouldReturnEmpty() {
    let secondary = vec![unit(1, 1, "orphan"), unit(2, 2, "units")];

    assert!(align(Vec::new(), secondary.clone(), MatchStrategy::ByPosition).is_empty());
    assert!(align(Vec::new(), secondary, MatchStrategy::ByKey).is_empty());
    assert!(align(Vec::new(), Vec::new(), MatchStrategy::ByKey).is_empty());
}

/// Under by-key, every shared id pairs with exactly the unit carrying it
#[test]
fn test_align_byKey_withSharedIds_shouldPairById() {
    let primary = vec![unit(10, 1, "A"), unit(20, 2, "B"), unit(30, 3, "C")];
    // Secondary deliberately out of order, with one id missing
    let secondary = vec![unit(30, 1, "trans-C"), unit(10, 2, "trans-A")];

    let pairs = align(primary, secondary, MatchStrategy::ByKey);

    assert_eq!(pairs[0].secondary.as_ref().unwrap().body, "trans-A");
    assert!(pairs[1].secondary.is_none());
    assert_eq!(pairs[2].secondary.as_ref().unwrap().body, "trans-C");
}

/// Under by-position, pair i gets secondary[i] when it exists, else a gap
#[test]
fn test_align_byPosition_withShorterSecondary_shouldPairByIndex() {
    let primary = vec![unit(1, 1, "A"), unit(2, 2, "B"), unit(3, 3, "C")];
    let secondary = vec![unit(99, 1, "first"), unit(98, 2, "second")];

    let pairs = align(primary, secondary, MatchStrategy::ByPosition);

    assert_eq!(pairs[0].secondary.as_ref().unwrap().body, "first");
    assert_eq!(pairs[1].secondary.as_ref().unwrap().body, "second");
    assert!(pairs[2].secondary.is_none());
}

/// A longer secondary never produces extra pairs
#[test]
fn test_align_byPosition_withLongerSecondary_shouldIgnoreTail() {
    let primary = vec![unit(1, 1, "A")];
    let secondary = vec![unit(1, 1, "x"), unit(2, 2, "y"), unit(3, 3, "z")];

    let pairs = align(primary, secondary, MatchStrategy::ByPosition);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].secondary.as_ref().unwrap().body, "x");
}

/// Mismatch is silent: no strategy ever errors on missing matches
#[test]
fn test_align_byKey_withDisjointIds_shouldLeaveAllUnmatched() {
    let primary = vec![unit(1, 1, "A"), unit(2, 2, "B")];
    let secondary = vec![unit(100, 1, "x"), unit(200, 2, "y")];

    let pairs = align(primary, secondary, MatchStrategy::ByKey);

    assert!(pairs.iter().all(|p| p.secondary.is_none()));
    assert!(pairs.iter().all(|p| !p.has_translation()));
}

/// Duplicate ids in the secondary: the first occurrence wins
#[test]
fn test_align_byKey_withDuplicateSecondaryIds_shouldUseFirstOccurrence() {
    let primary = vec![unit(5, 1, "A")];
    let secondary = vec![unit(5, 1, "first"), unit(5, 2, "second")];

    let pairs = align(primary, secondary, MatchStrategy::ByKey);

    assert_eq!(pairs[0].secondary.as_ref().unwrap().body, "first");
}

/// The two strategies pick different partners for the same
/// two-primary / one-secondary input
#[test]
fn test_align_withCanonicalScenario_shouldDifferByStrategy() {
    let primary = vec![unit(1, 1, "A"), unit(2, 2, "B")];
    let secondary = vec![unit(2, 1, "X")];

    let by_key = align(primary.clone(), secondary.clone(), MatchStrategy::ByKey);
    assert!(by_key[0].secondary.is_none());
    assert_eq!(by_key[1].secondary.as_ref().unwrap().id, 2);
    assert_eq!(by_key[1].secondary.as_ref().unwrap().body, "X");

    let by_position = align(primary, secondary, MatchStrategy::ByPosition);
    assert_eq!(by_position[0].secondary.as_ref().unwrap().id, 2);
    assert_eq!(by_position[0].secondary.as_ref().unwrap().body, "X");
    assert!(by_position[1].secondary.is_none());
}

/// Primary order is preserved in the output
#[test]
fn test_align_withUnorderedIds_shouldPreservePrimaryOrder() {
    let primary = vec![unit(3, 1, "third"), unit(1, 2, "first"), unit(2, 3, "second")];
    let secondary = vec![unit(1, 1, "t1"), unit(2, 2, "t2"), unit(3, 3, "t3")];

    let pairs = align(primary, secondary, MatchStrategy::ByKey);

    let ids: Vec<u64> = pairs.iter().map(|p| p.primary.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(pairs[0].secondary.as_ref().unwrap().body, "t3");
}
