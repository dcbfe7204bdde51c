//! The I-V-VI-IV backtracking search

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::note::Note;
use crate::scale::{IntervalTable, MajorScale};

/// Required distance from the root for each slot after the I, in half-step
/// units: V sits 3.5 steps up, VI 4.5, IV 2.5.
const GAPS: [u32; 3] = [7, 9, 5];

/// A finished I-V-VI-IV progression, root first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progression {
    chords: [Note; 4],
}

impl Progression {
    pub fn root(&self) -> Note {
        self.chords[0]
    }

    pub fn chords(&self) -> &[Note] {
        &self.chords
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}

/// Search the scale for the I-V-VI-IV progression rooted at its first note.
///
/// Each of the three slots after the root tries the 8 scale notes in scale
/// order, accepts the first whose cumulative distance from the root equals
/// the slot's gap, recurses, and backtracks on dead ends. The first complete
/// progression wins.
///
/// `None` means the scale has no note at some required gap. That is a normal
/// negative result, not an error.
pub fn find_progression(scale: &MajorScale, intervals: &IntervalTable) -> Option<Progression> {
    let mut chords = vec![scale.root()];
    if !fill_slot(scale, intervals, &mut chords, 1) {
        return None;
    }
    let chords: [Note; 4] = chords.try_into().ok()?;
    Some(Progression { chords })
}

fn fill_slot(
    scale: &MajorScale,
    intervals: &IntervalTable,
    chords: &mut Vec<Note>,
    place: usize,
) -> bool {
    // Base case: the root plus three selections fill all four slots
    if place == 4 {
        return true;
    }
    let Some(&gap) = GAPS.get(place - 1) else {
        return false;
    };
    for &candidate in scale.notes() {
        if intervals.distance_from_root(candidate) == Some(gap) {
            chords.push(candidate);
            if fill_slot(scale, intervals, chords, place + 1) {
                return true;
            }
            chords.pop();
        }
    }
    false
}
