pub mod collectors;
pub mod system;

pub use collectors::{CollectorStats, Verdict, classify};
pub use system::verify_system;
