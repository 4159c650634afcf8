// Normalization of wire-level names into valid PHP identifiers. Everything
// here is pure and stable; the assembler's overwrite semantics rely on it.

use std::collections::HashMap;

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

use soapgen_model::NAMESPACE_SEPARATOR;

lazy_static! {
  static ref INVALID_IDENTIFIER_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9_]").unwrap();
}

/// Scalar aliases that appear in service definitions but have a native PHP
/// hint. Anything not listed passes through untouched.
static SCALAR_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
  HashMap::from([
    ("long", "int"),
    ("short", "int"),
    ("integer", "int"),
    ("double", "float"),
    ("decimal", "float"),
    ("boolean", "bool"),
    ("anyType", "mixed"),
  ])
});

fn normalize(name: &str) -> String {
  let name = INVALID_IDENTIFIER_CHARS.replace_all(name, "");
  if name.is_empty() {
    return "_".to_owned();
  }
  if name.starts_with(|ch: char| ch.is_ascii_digit()) {
    return format!("_{}", name);
  }
  name.into_owned()
}

/// Maps an operation's wire name to a camelCase member name.
pub fn normalize_method_name(wire_name: &str) -> String {
  lcfirst(&normalize(wire_name))
}

pub fn normalize_class_name(name: &str) -> String {
  ucfirst(&normalize(name))
}

pub fn normalize_property(name: &str) -> String {
  normalize(name)
}

/// Forward slashes are tolerated as namespace separators in configuration
/// input; outer separators are trimmed.
pub fn normalize_namespace(namespace: &str) -> String {
  namespace
    .replace('/', "\\")
    .trim_matches(NAMESPACE_SEPARATOR)
    .to_owned()
}

pub fn normalize_data_type(kind: &str) -> String {
  match SCALAR_ALIASES.get(kind) {
    Some(native) => (*native).to_owned(),
    None => kind.to_owned(),
  }
}

fn lcfirst(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn ucfirst(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
