// Immutable operation descriptors. The extraction phase builds these from
// the service definition; the assemblers only read them.

#[derive(Debug, Clone)]
pub struct Parameter {
  pub name: String,
  /// Qualified type name as extracted from the service definition.
  pub kind: String,
  /// Ordinal within the operation, starting at 1.
  pub position: usize,
}

#[derive(Debug, Clone)]
pub struct ClientMethod {
  /// Wire name, used verbatim in the transport call.
  pub name: String,
  pub parameters: Vec<Parameter>,
  pub return_type: String,
}

impl ClientMethod {
  pub fn parameter(&self) -> Option<&Parameter> {
    self.parameters.first()
  }
}
