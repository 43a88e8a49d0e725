//! Quiz session engine
//!
//! Owns all session state and applies the `start`, `submit`, `advance` and
//! `restart` commands one at a time.

mod engine;
mod snapshot;

pub use engine::{AdvanceResult, Phase, SessionEngine, SessionState, SubmitResult};
pub use snapshot::SessionSnapshot;
