//! DNS test server infrastructure: the in-memory record store, the resolution
//! engine and the upstream plumbing it forwards through.
pub mod dns;
pub mod repositories;
pub mod system;
