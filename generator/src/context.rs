use soapgen_model::class::ClassModel;
use soapgen_model::descriptor::ClientMethod;

/// Everything an assembler may be dispatched on.
#[derive(Debug)]
#[non_exhaustive]
pub enum Context<'a> {
  ClientMethod(ClientMethodContext<'a>),
}

/// Pairs one remote operation with the class model under construction. The
/// class is held by exclusive reference; one writer at a time.
#[derive(Debug)]
pub struct ClientMethodContext<'a> {
  class: &'a mut ClassModel,
  method: &'a ClientMethod,
}

impl<'a> ClientMethodContext<'a> {
  pub fn new(class: &'a mut ClassModel, method: &'a ClientMethod) -> Self {
    ClientMethodContext { class, method }
  }

  pub fn class(&self) -> &ClassModel {
    self.class
  }

  pub fn method(&self) -> &ClientMethod {
    self.method
  }

  /// Splits the context into the mutable class and the read-only descriptor.
  pub fn parts_mut(&mut self) -> (&mut ClassModel, &ClientMethod) {
    (&mut *self.class, self.method)
  }

  pub fn has_arguments(&self) -> bool {
    !self.method.parameters.is_empty()
  }

  pub fn is_multi_argument(&self) -> bool {
    self.method.parameters.len() > 1
  }
}
