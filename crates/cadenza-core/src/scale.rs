//! Major scales and the interval table derived from them
//!
//! All distances are in integer half-step units (a whole step is 2), so gap
//! comparisons are exact equality with no floating-point accumulation.

use serde::{Deserialize, Serialize};

use crate::error::{CadenzaError, Result};
use crate::note::Note;

/// Length of a full scale listing: 7 degrees plus the octave repeat of the root
pub const SCALE_LEN: usize = 8;

/// Interval between two adjacent scale notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Half,
    Whole,
}

impl Step {
    /// Size in half-step units
    pub fn half_steps(&self) -> u32 {
        match self {
            Self::Half => 1,
            Self::Whole => 2,
        }
    }
}

/// An ascending 8-note major scale, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorScale {
    notes: [Note; SCALE_LEN],
}

impl MajorScale {
    /// Build a scale from an ordered note listing. The only check is the
    /// length; the notes are trusted to be a valid major scale in ascending
    /// order.
    pub fn new(notes: Vec<Note>) -> Result<Self> {
        let len = notes.len();
        let notes: [Note; SCALE_LEN] =
            notes.try_into().map_err(|_| CadenzaError::ScaleLength(len))?;
        Ok(Self { notes })
    }

    /// The root (tonic), i.e. the first note of the listing
    pub fn root(&self) -> Note {
        self.notes[0]
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

/// One consecutive scale pair and the step between its members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub from: Note,
    pub to: Note,
    pub step: Step,
}

/// The pairwise intervals of a scale, preserved in scale order.
///
/// Order matters: distance lookups scan the entries front to back, so a note
/// name that appears twice resolves to its earliest occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    entries: Vec<Interval>,
}

impl IntervalTable {
    /// Derive the 7 pairwise intervals of a major scale.
    ///
    /// The W-W-H-W-W-W-H pattern is hard-coded: entries 2 and 6 are
    /// half-steps, the rest whole. The table is only as correct as the scale
    /// it was built from.
    pub fn build(scale: &MajorScale) -> Self {
        let entries = scale
            .notes()
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Interval {
                from: pair[0],
                to: pair[1],
                step: if i == 2 || i == 6 { Step::Half } else { Step::Whole },
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[Interval] {
        &self.entries
    }

    /// Cumulative distance from the root to `note`, in half-step units.
    ///
    /// Scans entries in order and stops at the first one ending in `note`.
    /// `None` if the name never closes an entry.
    pub fn distance_from_root(&self, note: Note) -> Option<u32> {
        let mut sum = 0;
        for entry in &self.entries {
            sum += entry.step.half_steps();
            if entry.to == note {
                return Some(sum);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(tokens: &[&str]) -> MajorScale {
        let notes = tokens.iter().map(|t| t.parse().unwrap()).collect();
        MajorScale::new(notes).unwrap()
    }

    fn c_major() -> MajorScale {
        scale(&["C", "D", "E", "F", "G", "A", "B", "C"])
    }

    #[test]
    fn rejects_wrong_length() {
        let notes: Vec<Note> = ["C", "D", "E"].iter().map(|t| t.parse().unwrap()).collect();
        assert!(matches!(MajorScale::new(notes), Err(CadenzaError::ScaleLength(3))));
    }

    #[test]
    fn table_follows_major_step_pattern() {
        let table = IntervalTable::build(&c_major());
        assert_eq!(table.entries().len(), 7);

        // Half-steps at E-F and B-C, whole everywhere else
        for (i, entry) in table.entries().iter().enumerate() {
            let expected = if i == 2 || i == 6 { Step::Half } else { Step::Whole };
            assert_eq!(entry.step, expected, "entry {i}");
        }

        // 5 whole + 2 half = a 12 half-step octave
        let total: u32 = table.entries().iter().map(|e| e.step.half_steps()).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn distances_accumulate_in_scale_order() {
        let table = IntervalTable::build(&c_major());
        let distance = |t: &str| table.distance_from_root(t.parse().unwrap());
        assert_eq!(distance("D"), Some(2));
        assert_eq!(distance("E"), Some(4));
        assert_eq!(distance("F"), Some(5));
        assert_eq!(distance("G"), Some(7));
        assert_eq!(distance("A"), Some(9));
        assert_eq!(distance("B"), Some(11));
        // The root itself only closes the octave pair
        assert_eq!(distance("C"), Some(12));
    }

    #[test]
    fn distance_is_none_for_foreign_notes() {
        let table = IntervalTable::build(&c_major());
        assert_eq!(table.distance_from_root("F#".parse().unwrap()), None);
    }

    #[test]
    fn repeated_name_resolves_to_first_occurrence() {
        // D appears at positions 1 and 5; the scan must stop at the first
        let table = IntervalTable::build(&scale(&["C", "D", "E", "F", "G", "D", "B", "C"]));
        assert_eq!(table.distance_from_root("D".parse().unwrap()), Some(2));
    }
}
