pub mod class;
pub mod descriptor;
pub mod member;

use thiserror::Error;

/// PHP namespace separator, used everywhere a qualified name is split or
/// spliced back into generated text.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Identifiers shared with the runtime library that generated clients link
/// against. Generated code must reproduce these exactly.
pub mod runtime {
  /// Base class every generated client extends and delegates to.
  pub const CLIENT: &str = r"Soapgen\Client";
  pub const REQUEST_INTERFACE: &str = r"Soapgen\Type\RequestInterface";
  pub const RESULT_INTERFACE: &str = r"Soapgen\Type\ResultInterface";
  /// Aggregate request standing in for the arguments of a multi-argument
  /// operation; callers pack the original arguments into it before the call.
  pub const MULTI_ARGUMENT_REQUEST: &str = r"Soapgen\Type\MultiArgumentRequest";
  /// Transport-level fault raised by the client base class.
  pub const SOAP_EXCEPTION: &str = r"Soapgen\Exception\SoapException";

  /// Conventional name of the collapsed multi-argument parameter.
  pub const MULTI_ARGUMENT_PARAMETER: &str = "multiArgumentRequest";
  /// Transport invocation method on the client base class.
  pub const CALL_METHOD: &str = "call";
}

#[derive(Debug, Error)]
pub enum GeneratorError {
  #[error("malformed type name {0:?}")]
  MalformedTypeName(String),
  #[error("operation {0:?} declares no parameters")]
  MissingParameter(String),
}
