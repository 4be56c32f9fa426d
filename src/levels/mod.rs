//! Level progression: the 99-entry catalog, the progress record, and the
//! ledger that gates advancement.

pub mod catalog;
pub mod definition;
pub mod ledger;
pub mod progress;

pub use catalog::LevelCatalog;
pub use definition::{LevelDefinition, ELIMINATION_THRESHOLD, MAX_LEVEL};
pub use ledger::{CompletionRejected, LevelLedger, LevelReport};
pub use progress::{ProgressRecord, Rank};
