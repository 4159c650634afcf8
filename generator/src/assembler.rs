use tracing::debug;

use soapgen_model::class::ClassModel;
use soapgen_model::descriptor::ClientMethod;
use soapgen_model::member::{GeneratedMethod, ParameterDeclaration, Visibility};
use soapgen_model::{runtime, GeneratorError};

use crate::context::Context;
use crate::docblock;
use crate::normalizer;
use crate::AssemblerError;

/// The orchestrator consults `can_assemble` before dispatching a context.
pub trait Assembler {
  fn can_assemble(&self, context: &Context<'_>) -> bool;
  fn assemble(&self, context: &mut Context<'_>) -> Result<(), AssemblerError>;
}

/*
/**
 * @param RequestInterface|Type\GetUserRequest $request
 * @return ResultInterface|GetUser\GetUserResult
 * @throws SoapException
 */
public function getUser(\App\Type\GetUserRequest $request) : \App\Client\GetUser\GetUserResult
{
    return $this->call('GetUser', $request);
}
*/
#[derive(Debug, Default)]
pub struct ClientMethodAssembler;

impl Assembler for ClientMethodAssembler {
  fn can_assemble(&self, context: &Context<'_>) -> bool {
    matches!(context, Context::ClientMethod(_))
  }

  fn assemble(&self, context: &mut Context<'_>) -> Result<(), AssemblerError> {
    let Context::ClientMethod(context) = context;
    let is_multi_argument = context.is_multi_argument();
    let has_arguments = context.has_arguments();
    let (class, method) = context.parts_mut();

    class.set_extended_class(runtime::CLIENT);

    let method_name = normalizer::normalize_method_name(&method.name);
    debug!("assembling client method {:?} as {}", method.name, method_name);
    class.remove_method(&method_name);

    let generated = build_method(class, method, &method_name, has_arguments, is_multi_argument)
      .map_err(|error| AssemblerError::from_error(&method.name, error))?;

    // Installation is the last step; a failure above leaves no member behind.
    class.add_method(generated);

    Ok(())
  }
}

fn build_method(
  class: &mut ClassModel,
  method: &ClientMethod,
  method_name: &str,
  has_arguments: bool,
  is_multi_argument: bool,
) -> Result<GeneratedMethod, GeneratorError> {
  let mut body = format!("return $this->{}('{}');", runtime::CALL_METHOD, method.name);
  let mut parameters = Vec::new();

  let doc_block = if has_arguments {
    let parameter = declared_parameter(method, is_multi_argument)?;
    body = format!("return $this->{}('{}', ${});", runtime::CALL_METHOD, method.name, parameter.name);

    let doc_block = if is_multi_argument {
      docblock::multi_argument(class, method)?
    } else {
      docblock::single_argument(class, method)?
    };
    parameters.push(parameter);
    doc_block
  } else {
    docblock::no_argument(class, method)?
  };

  Ok(GeneratedMethod {
    name: method_name.to_owned(),
    visibility: Visibility::Public,
    parameters,
    body,
    return_type: Some(method.return_type.clone()),
    doc_block: Some(doc_block),
  })
}

/// A multi-argument operation collapses into one aggregate request value;
/// the transport accepts a single argument slot.
fn declared_parameter(method: &ClientMethod, is_multi_argument: bool) -> Result<ParameterDeclaration, GeneratorError> {
  if is_multi_argument {
    return Ok(ParameterDeclaration {
      name: runtime::MULTI_ARGUMENT_PARAMETER.to_owned(),
      kind: runtime::MULTI_ARGUMENT_REQUEST.to_owned(),
    });
  }

  let parameter = method
    .parameter()
    .ok_or_else(|| GeneratorError::MissingParameter(method.name.clone()))?;

  Ok(ParameterDeclaration {
    name: parameter.name.clone(),
    kind: normalizer::normalize_data_type(&parameter.kind),
  })
}

#[cfg(test)]
mod tests {
  use std::error::Error;

  use test_log::test;

  use soapgen_model::descriptor::Parameter;

  use crate::context::ClientMethodContext;

  use super::*;

  fn assemble(class: &mut ClassModel, method: &ClientMethod) -> Result<(), AssemblerError> {
    let assembler = ClientMethodAssembler;
    let mut context = Context::ClientMethod(ClientMethodContext::new(class, method));
    assert!(assembler.can_assemble(&context));
    assembler.assemble(&mut context)
  }

  #[test]
  fn zero_parameters_delegate_with_the_wire_name_only() {
    let mut class = ClassModel::new("StatusClient");
    let method = ClientMethod {
      name: "Ping".to_owned(),
      parameters: vec![],
      return_type: "PingResult".to_owned(),
    };

    assemble(&mut class, &method).unwrap();

    assert_eq!(class.extended_class(), Some(runtime::CLIENT));
    let generated = class.method("ping").unwrap();
    assert!(generated.parameters.is_empty());
    assert_eq!(generated.body, "return $this->call('Ping');");
    let doc_block = generated.doc_block.as_ref().unwrap();
    assert!(doc_block.tags.iter().all(|it| it.name != "param"));
  }

  #[test]
  fn single_parameter_mirrors_the_descriptor() {
    let mut class = ClassModel::new("UserClient");
    let method = ClientMethod {
      name: "GetUser".to_owned(),
      parameters: vec![
        Parameter { name: "id".to_owned(), kind: "Int".to_owned(), position: 1 },
      ],
      return_type: "UserResult".to_owned(),
    };

    assemble(&mut class, &method).unwrap();

    let generated = class.method("getUser").unwrap();
    assert_eq!(generated.parameters.len(), 1);
    assert_eq!(generated.parameters[0].name, "id");
    assert_eq!(generated.parameters[0].kind, "Int");
    assert_eq!(generated.body, "return $this->call('GetUser', $id);");
    assert_eq!(generated.return_type.as_deref(), Some("UserResult"));

    let doc_block = generated.doc_block.as_ref().unwrap();
    assert_eq!(doc_block.tags[0].name, "param");
    assert_eq!(doc_block.tags[0].description, "RequestInterface|Int $id");
    assert_eq!(doc_block.tags[1].name, "return");
    assert_eq!(doc_block.tags[1].description, "ResultInterface|UserResult");
    assert_eq!(doc_block.tags[2].name, "throws");
  }

  #[test]
  fn multiple_parameters_collapse_into_the_composite_request() {
    let mut class = ClassModel::with_namespace("SearchClient", "App\\Client");
    let method = ClientMethod {
      name: "Search".to_owned(),
      parameters: vec![
        Parameter { name: "query".to_owned(), kind: "App\\Type\\SearchQuery".to_owned(), position: 1 },
        Parameter { name: "page".to_owned(), kind: "App\\Type\\PageSpec".to_owned(), position: 2 },
      ],
      return_type: "App\\Client\\Search\\SearchResult".to_owned(),
    };

    assemble(&mut class, &method).unwrap();

    let generated = class.method("search").unwrap();
    assert_eq!(generated.parameters.len(), 1);
    assert_eq!(generated.parameters[0].name, runtime::MULTI_ARGUMENT_PARAMETER);
    assert_eq!(generated.parameters[0].kind, runtime::MULTI_ARGUMENT_REQUEST);
    assert_eq!(generated.body, "return $this->call('Search', $multiArgumentRequest);");

    let doc_block = generated.doc_block.as_ref().unwrap();
    assert_eq!(
      doc_block.long_description.as_deref(),
      Some("MultiArgumentRequest with following params:\n\nType\\SearchQuery $query\nType\\PageSpec $page")
    );
    assert!(doc_block.tags.iter().all(|it| it.name != "throws"));
  }

  #[test]
  fn scalar_parameter_types_map_to_native_hints() {
    let mut class = ClassModel::new("CounterClient");
    let method = ClientMethod {
      name: "Add".to_owned(),
      parameters: vec![
        Parameter { name: "amount".to_owned(), kind: "long".to_owned(), position: 1 },
      ],
      return_type: "AddResult".to_owned(),
    };

    assemble(&mut class, &method).unwrap();

    let generated = class.method("add").unwrap();
    assert_eq!(generated.parameters[0].kind, "int");
    let doc_block = generated.doc_block.as_ref().unwrap();
    assert_eq!(doc_block.tags[0].description, "RequestInterface|int $amount");
  }

  #[test]
  fn reassembly_is_idempotent() {
    let mut class = ClassModel::with_namespace("UserClient", "App\\Client");
    let method = ClientMethod {
      name: "GetUser".to_owned(),
      parameters: vec![
        Parameter { name: "request".to_owned(), kind: "App\\Type\\GetUserRequest".to_owned(), position: 1 },
      ],
      return_type: "App\\Client\\GetUser\\GetUserResult".to_owned(),
    };

    assemble(&mut class, &method).unwrap();
    let first = class.render();
    assemble(&mut class, &method).unwrap();

    assert_eq!(class.methods().len(), 1);
    assert_eq!(class.render(), first);
  }

  #[test]
  fn failures_wrap_the_cause_and_install_nothing() {
    let mut class = ClassModel::new("UserClient");
    let method = ClientMethod {
      name: "GetUser".to_owned(),
      parameters: vec![],
      return_type: "App\\Client\\".to_owned(),
    };

    let error = assemble(&mut class, &method).unwrap_err();
    assert_eq!(error.method(), "GetUser");
    assert!(error.source().is_some());
    assert!(error.to_string().contains("GetUser"));
    assert!(class.methods().is_empty());
  }

  #[test]
  fn rendered_client_matches_the_expected_shape() {
    let mut class = ClassModel::with_namespace("UserClient", "App\\Client");
    let method = ClientMethod {
      name: "GetUser".to_owned(),
      parameters: vec![
        Parameter { name: "request".to_owned(), kind: "App\\Type\\GetUserRequest".to_owned(), position: 1 },
      ],
      return_type: "App\\Client\\GetUser\\GetUserResult".to_owned(),
    };

    assemble(&mut class, &method).unwrap();
    let rendered = class.render();

    assert!(rendered.contains("namespace App\\Client;"));
    assert!(rendered.contains("use Soapgen\\Type\\RequestInterface;"));
    assert!(rendered.contains("use App\\Type;"));
    assert!(rendered.contains("use Soapgen\\Type\\ResultInterface;"));
    assert!(rendered.contains("use App\\Client\\GetUser;"));
    assert!(rendered.contains("use Soapgen\\Exception\\SoapException;"));
    assert!(rendered.contains("class UserClient extends \\Soapgen\\Client"));
    assert!(rendered.contains(" * @param RequestInterface|Type\\GetUserRequest $request"));
    assert!(rendered.contains(" * @return ResultInterface|GetUser\\GetUserResult"));
    assert!(rendered.contains(" * @throws SoapException"));
    assert!(rendered.contains("public function getUser(\\App\\Type\\GetUserRequest $request) : \\App\\Client\\GetUser\\GetUserResult"));
    assert!(rendered.contains("return $this->call('GetUser', $request);"));
  }
}
