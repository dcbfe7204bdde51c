//! Note-name tokens (a natural letter plus an optional accidental)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CadenzaError, Result};

/// The seven natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

/// Sharp or flat marker attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn as_char(&self) -> char {
        match self {
            Self::Sharp => '#',
            Self::Flat => 'b',
        }
    }
}

/// A note name such as `C`, `G#` or `Db`.
///
/// The accidental is part of the same token as its letter; `Display` and
/// `FromStr` round-trip the `<letter>[#|b]` form used by the scale table
/// and the user-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pub letter: Letter,
    pub accidental: Option<Accidental>,
}

impl Note {
    pub fn natural(letter: Letter) -> Self {
        Self { letter, accidental: None }
    }

    pub fn sharp(letter: Letter) -> Self {
        Self { letter, accidental: Some(Accidental::Sharp) }
    }

    pub fn flat(letter: Letter) -> Self {
        Self { letter, accidental: Some(Accidental::Flat) }
    }
}

impl FromStr for Note {
    type Err = CadenzaError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| CadenzaError::InvalidNote(s.to_string()))?;
        let accidental = match chars.next() {
            None => None,
            Some('#') => Some(Accidental::Sharp),
            Some('b') => Some(Accidental::Flat),
            Some(_) => return Err(CadenzaError::InvalidNote(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(CadenzaError::InvalidNote(s.to_string()));
        }
        Ok(Self { letter, accidental })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        if let Some(accidental) = self.accidental {
            write!(f, "{}", accidental.as_char())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Note {
    type Error = CadenzaError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
