//! cadenza-core: Domain types for the cadenza progression generator

mod error;
mod note;
mod progression;
mod scale;

pub use error::{CadenzaError, Result};
pub use note::{Accidental, Letter, Note};
pub use progression::{find_progression, Progression};
pub use scale::{Interval, IntervalTable, MajorScale, Step, SCALE_LEN};
