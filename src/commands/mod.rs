//! Command implementations

mod cases;
mod run;
mod snapshot;

pub use cases::cases;
pub use run::run;
pub use snapshot::snapshot;
