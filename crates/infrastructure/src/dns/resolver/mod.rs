pub mod alias_chain;
pub mod core;
pub mod forward;
pub mod local_answer;

pub use alias_chain::AliasChain;
pub use core::ResolutionEngine;
