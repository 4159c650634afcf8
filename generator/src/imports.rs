use itertools::Itertools;
use tracing::trace;

use soapgen_model::class::ClassModel;
use soapgen_model::{GeneratorError, NAMESPACE_SEPARATOR};

/// Resolves `fqcn` to the short name to use in generated text and registers
/// an import on `class` when one is needed.
///
/// With `prefixed` set, the short name keeps the last namespace segment
/// (`Wrapper\Leaf`) and the registered import covers the wrapper namespace
/// instead of the leaf. Generated result wrappers live in operation-specific
/// namespaces, so importing the bare leaf would collide across operations.
pub fn resolve_reference(fqcn: &str, class: &mut ClassModel, prefixed: bool) -> Result<String, GeneratorError> {
  let trimmed = fqcn.trim_start_matches(NAMESPACE_SEPARATOR);
  if trimmed.is_empty() || trimmed.split(NAMESPACE_SEPARATOR).any(|it| it.is_empty()) {
    return Err(GeneratorError::MalformedTypeName(fqcn.to_owned()));
  }

  let mut parts = trimmed.split(NAMESPACE_SEPARATOR).collect_vec();
  let Some(class_name) = parts.pop() else {
    return Err(GeneratorError::MalformedTypeName(fqcn.to_owned()));
  };
  let prefix = if prefixed { parts.pop() } else { None };
  let class_namespace = parts.join("\\");

  let (short_name, import) = match prefix {
    Some(prefix) => (
      format!("{}\\{}", prefix, class_name),
      if class_namespace.is_empty() {
        prefix.to_owned()
      } else {
        format!("{}\\{}", class_namespace, prefix)
      },
    ),
    None => (class_name.to_owned(), trimmed.to_owned()),
  };

  // Bare names already resolve unambiguously; they never need an import.
  if !import.contains(NAMESPACE_SEPARATOR) {
    trace!("{} resolves without an import", import);
    return Ok(short_name);
  }

  if class_namespace != class.namespace() || !class.has_use(&import) {
    trace!("registering use statement for {}", import);
    class.add_use(import);
  }

  Ok(short_name)
}
