pub mod assembler;
pub mod context;
pub mod docblock;
pub mod imports;
pub mod normalizer;

use thiserror::Error;

pub use assembler::{Assembler, ClientMethodAssembler};
pub use context::{ClientMethodContext, Context};

/// Raised when a client method cannot be assembled. The construction failure
/// behind it is preserved as the error source for diagnostics.
#[derive(Debug, Error)]
#[error("failed to assemble client method {method:?}")]
pub struct AssemblerError {
  method: String,
  #[source]
  source: Box<dyn std::error::Error + Send + Sync>,
}

impl AssemblerError {
  pub fn from_error(method: impl Into<String>, error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    AssemblerError { method: method.into(), source: error.into() }
  }

  /// Wire name of the operation that failed to assemble.
  pub fn method(&self) -> &str {
    &self.method
  }
}
