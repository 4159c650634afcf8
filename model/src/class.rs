use itertools::Itertools;
use tracing::debug;

use crate::member::{render_type_hint, GeneratedMethod};

#[derive(Debug, Default)]
pub struct ClassModel {
  name: String,
  namespace: Option<String>,
  extended_class: Option<String>,
  uses: Vec<String>,
  methods: Vec<GeneratedMethod>,
}

impl ClassModel {
  pub fn new(name: impl Into<String>) -> Self {
    ClassModel { name: name.into(), ..Default::default() }
  }

  pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
    ClassModel { name: name.into(), namespace: Some(namespace.into()), ..Default::default() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Current namespace, empty for the global namespace.
  pub fn namespace(&self) -> &str {
    self.namespace.as_deref().unwrap_or("")
  }

  pub fn set_extended_class(&mut self, fqcn: impl Into<String>) {
    self.extended_class = Some(fqcn.into());
  }

  pub fn extended_class(&self) -> Option<&str> {
    self.extended_class.as_deref()
  }

  /// Registers a use statement. At most one entry per qualified name.
  pub fn add_use(&mut self, fqcn: impl Into<String>) {
    let fqcn = fqcn.into();
    if !self.has_use(&fqcn) {
      self.uses.push(fqcn);
    }
  }

  pub fn has_use(&self, fqcn: &str) -> bool {
    self.uses.iter().any(|it| it == fqcn)
  }

  pub fn uses(&self) -> &[String] {
    &self.uses
  }

  pub fn remove_method(&mut self, name: &str) {
    self.methods.retain(|it| it.name != name);
  }

  /// Installs a method, replacing any previous member with the same name.
  pub fn add_method(&mut self, method: GeneratedMethod) {
    if self.methods.iter().any(|it| it.name == method.name) {
      debug!("replacing previously generated method {}", method.name);
      self.remove_method(&method.name);
    }
    self.methods.push(method);
  }

  pub fn method(&self, name: &str) -> Option<&GeneratedMethod> {
    self.methods.iter().find(|it| it.name == name)
  }

  pub fn methods(&self) -> &[GeneratedMethod] {
    &self.methods
  }

  /// Serializes the whole class to PHP source text. The external writer is
  /// responsible for persisting it.
  pub fn render(&self) -> String {
    let mut builder = String::new();

    if let Some(namespace) = &self.namespace {
      builder.push_str(&format!("namespace {};\n\n", namespace));
    }

    if !self.uses.is_empty() {
      builder.push_str(&self.uses.iter().map(|it| format!("use {};", it)).join("\n"));
      builder.push_str("\n\n");
    }

    builder.push_str(&format!("class {}", self.name));
    if let Some(extended_class) = &self.extended_class {
      builder.push_str(&format!(" extends {}", render_type_hint(extended_class)));
    }
    builder.push_str("\n{\n");
    builder.push_str(&self.methods.iter().map(|it| it.render()).join("\n"));
    builder.push_str("}\n");

    builder
  }
}
