//! Resolver adapters: produce the raw `revinfo` text the policy engine evaluates.
//!
//! This crate is the only one that spawns processes. Everything downstream works on the
//! captured text, so tests can swap in [`StaticResolver`].

#![forbid(unsafe_code)]

mod error;
mod gclient;
mod search;

pub use error::ResolveError;
pub use gclient::{GclientResolver, Invocation};
pub use search::find_on_path;

/// Capability to report the fully resolved state of the dependency manifest.
pub trait Resolver {
    fn resolve(&self) -> Result<String, ResolveError>;
}

/// Resolver returning canned output.
#[derive(Clone, Debug)]
pub struct StaticResolver {
    pub output: String,
}

impl StaticResolver {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Resolver for StaticResolver {
    fn resolve(&self) -> Result<String, ResolveError> {
        check_usable(self.output.clone())
    }
}

/// Whitespace-only output means the resolver reported nothing, which is never a valid state:
/// the repository's own entry is always present.
pub(crate) fn check_usable(output: String) -> Result<String, ResolveError> {
    if output.trim().is_empty() {
        return Err(ResolveError::EmptyOutput);
    }
    Ok(output)
}
