/*!
 * Bilingual alignment of independently fetched text sequences.
 *
 * Two renderings of the same chapter (original script and a translation)
 * arrive from separately versioned datasets and may differ in length or
 * segmentation. This module pairs them up for synchronized display without
 * ever treating a mismatch as a failure: a unit with no counterpart is shown
 * with a gap, not dropped and not reported as an error.
 */

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::content::TextUnit;

/// Strategy for correlating a primary sequence with its translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Pair the i-th primary unit with the i-th secondary unit, ignoring ids.
    ///
    /// The fallback for datasets where only relative order correlates, such
    /// as translation editions returned as bare arrays.
    #[default]
    ByPosition,

    /// Pair each primary unit with the secondary unit sharing its id,
    /// ignoring order.
    ///
    /// Strictly more correct whenever both sequences carry an authoritative
    /// shared identifier.
    ByKey,
}

impl MatchStrategy {
    // @returns: Kebab-case strategy identifier
    pub fn as_str(&self) -> &str {
        match self {
            Self::ByPosition => "by-position",
            Self::ByKey => "by-key",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A primary text unit paired with its best-effort matching translation.
///
/// `secondary` is `None` when no match exists under the chosen strategy.
/// That is a displayable gap, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Source-language unit, always present
    pub primary: TextUnit,

    /// Matching translated unit, absent when no match was found
    pub secondary: Option<TextUnit>,
}

impl AlignedPair {
    pub fn new(primary: TextUnit, secondary: Option<TextUnit>) -> Self {
        AlignedPair { primary, secondary }
    }

    /// Whether this pair carries a translation
    pub fn has_translation(&self) -> bool {
        self.secondary.is_some()
    }
}

/// Align two ordered sequences of text units into displayable pairs.
///
/// One pair is emitted for every primary unit, in primary order, so the
/// output length always equals `primary.len()`. Length mismatches and
/// missing keys are normal outcomes and never fail. Empty input yields
/// empty output.
pub fn align(
    primary: Vec<TextUnit>,
    secondary: Vec<TextUnit>,
    strategy: MatchStrategy,
) -> Vec<AlignedPair> {
    match strategy {
        MatchStrategy::ByPosition => align_by_position(primary, secondary),
        MatchStrategy::ByKey => align_by_key(primary, secondary),
    }
}

fn align_by_position(primary: Vec<TextUnit>, secondary: Vec<TextUnit>) -> Vec<AlignedPair> {
    let mut secondaries: Vec<Option<TextUnit>> = secondary.into_iter().map(Some).collect();

    primary
        .into_iter()
        .enumerate()
        .map(|(i, unit)| {
            let matched = secondaries.get_mut(i).and_then(|slot| slot.take());
            AlignedPair::new(unit, matched)
        })
        .collect()
}

fn align_by_key(primary: Vec<TextUnit>, secondary: Vec<TextUnit>) -> Vec<AlignedPair> {
    // First occurrence wins if the secondary sequence repeats an id
    let mut by_id: HashMap<u64, TextUnit> = HashMap::with_capacity(secondary.len());
    for unit in secondary {
        by_id.entry(unit.id).or_insert(unit);
    }

    primary
        .into_iter()
        .map(|unit| {
            let matched = by_id.remove(&unit.id);
            AlignedPair::new(unit, matched)
        })
        .collect()
}
