// CV scoring and job matching.
// Both derivations are pure and recomputed on every request.

pub mod handlers;
pub mod issues;
pub mod matcher;
pub mod scorer;
