use itertools::Itertools;

use crate::NAMESPACE_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
  pub name: String,
  pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
  pub long_description: Option<String>,
  pub tags: Vec<Tag>,
}

/*
/**
 * MultiArgumentRequest with following params:
 *
 * Type\SearchQuery $query
 *
 * @param MultiArgumentRequest
 * @return ResultInterface|Search\SearchResult
 */
*/
impl DocBlock {
  pub fn render(&self, indent: &str) -> String {
    let mut builder = String::new();
    builder.push_str(&format!("{}/**\n", indent));

    if let Some(description) = &self.long_description {
      for line in description.lines() {
        if line.is_empty() {
          builder.push_str(&format!("{} *\n", indent));
        } else {
          builder.push_str(&format!("{} * {}\n", indent, line));
        }
      }
      if !self.tags.is_empty() {
        builder.push_str(&format!("{} *\n", indent));
      }
    }

    for tag in &self.tags {
      builder.push_str(&format!("{} * @{} {}\n", indent, tag.name, tag.description));
    }

    builder.push_str(&format!("{} */\n", indent));
    builder
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
  Public,
  Protected,
  Private,
}

impl Visibility {
  pub fn keyword(self) -> &'static str {
    match self {
      Visibility::Public => "public",
      Visibility::Protected => "protected",
      Visibility::Private => "private",
    }
  }
}

/// Declared parameter of a generated method. Generated client methods take
/// at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
  pub name: String,
  pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
  pub name: String,
  pub visibility: Visibility,
  pub parameters: Vec<ParameterDeclaration>,
  pub body: String,
  pub return_type: Option<String>,
  pub doc_block: Option<DocBlock>,
}

/*
    public function getUser(\App\Type\GetUserRequest $request) : \App\Client\GetUserResult
    {
        return $this->call('GetUser', $request);
    }
*/
impl GeneratedMethod {
  pub fn render(&self) -> String {
    let mut builder = String::new();

    if let Some(doc_block) = &self.doc_block {
      builder.push_str(&doc_block.render("    "));
    }

    let parameters = self.parameters.iter()
      .map(|it| format!("{} ${}", render_type_hint(&it.kind), it.name))
      .join(", ");
    builder.push_str(&format!("    {} function {}({})", self.visibility.keyword(), self.name, parameters));
    if let Some(return_type) = &self.return_type {
      builder.push_str(&format!(" : {}", render_type_hint(return_type)));
    }
    builder.push_str("\n");

    builder.push_str("    {\n");
    for line in self.body.lines() {
      builder.push_str(&format!("        {}\n", line));
    }
    builder.push_str("    }\n");

    builder
  }
}

/// Namespaced names are hinted from the global namespace; bare names are
/// emitted as-is.
pub fn render_type_hint(kind: &str) -> String {
  if kind.contains(NAMESPACE_SEPARATOR) {
    format!("{}{}", NAMESPACE_SEPARATOR, kind)
  } else {
    kind.to_owned()
  }
}
