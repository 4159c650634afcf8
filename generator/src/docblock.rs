// The three documentation variants, selected by operation arity. Every type
// reference goes through the import resolver so documentation uses the same
// short names as the rest of the generated file.

use soapgen_model::class::ClassModel;
use soapgen_model::descriptor::ClientMethod;
use soapgen_model::member::{DocBlock, Tag};
use soapgen_model::{runtime, GeneratorError};

use crate::imports::resolve_reference;
use crate::normalizer;

/*
/**
 * @return ResultInterface|Ping\PingResult
 * @throws SoapException
 */
*/
pub fn no_argument(class: &mut ClassModel, method: &ClientMethod) -> Result<DocBlock, GeneratorError> {
  Ok(DocBlock {
    long_description: None,
    tags: vec![
      return_tag(class, method)?,
      throws_tag(class)?,
    ],
  })
}

/*
/**
 * @param RequestInterface|Type\GetUserRequest $request
 * @return ResultInterface|GetUser\GetUserResult
 * @throws SoapException
 */
*/
pub fn single_argument(class: &mut ClassModel, method: &ClientMethod) -> Result<DocBlock, GeneratorError> {
  let parameter = method
    .parameter()
    .ok_or_else(|| GeneratorError::MissingParameter(method.name.clone()))?;

  let request = resolve_reference(runtime::REQUEST_INTERFACE, class, false)?;
  // Same alias mapping as the declared parameter, so the tag and the
  // signature agree on the hint.
  let kind = normalizer::normalize_data_type(&parameter.kind);
  let kind = resolve_reference(&kind, class, true)?;

  Ok(DocBlock {
    long_description: None,
    tags: vec![
      Tag {
        name: "param".to_owned(),
        description: format!("{}|{} ${}", request, kind, parameter.name),
      },
      return_tag(class, method)?,
      throws_tag(class)?,
    ],
  })
}

/*
/**
 * MultiArgumentRequest with following params:
 *
 * Type\SearchQuery $query
 * Type\PageSpec $page
 *
 * @param MultiArgumentRequest
 * @return ResultInterface|Search\SearchResult
 */
*/
pub fn multi_argument(class: &mut ClassModel, method: &ClientMethod) -> Result<DocBlock, GeneratorError> {
  let mut description = vec!["MultiArgumentRequest with following params:".to_owned(), String::new()];
  for parameter in &method.parameters {
    let kind = resolve_reference(&parameter.kind, class, true)?;
    description.push(format!("{} ${}", kind, parameter.name));
  }

  let request = resolve_reference(runtime::MULTI_ARGUMENT_REQUEST, class, false)?;

  // No throws tag in this variant.
  Ok(DocBlock {
    long_description: Some(description.join("\n")),
    tags: vec![
      Tag { name: "param".to_owned(), description: request },
      return_tag(class, method)?,
    ],
  })
}

fn return_tag(class: &mut ClassModel, method: &ClientMethod) -> Result<Tag, GeneratorError> {
  let result = resolve_reference(runtime::RESULT_INTERFACE, class, false)?;
  let concrete = resolve_reference(&method.return_type, class, true)?;

  Ok(Tag {
    name: "return".to_owned(),
    description: format!("{}|{}", result, concrete),
  })
}

fn throws_tag(class: &mut ClassModel) -> Result<Tag, GeneratorError> {
  Ok(Tag {
    name: "throws".to_owned(),
    description: resolve_reference(runtime::SOAP_EXCEPTION, class, false)?,
  })
}
