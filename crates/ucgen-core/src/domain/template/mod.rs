//! Template rendering.
//!
//! `render(kind, params)` is a pure function: identical params give
//! byte-identical output. Template sources live in [`builtin`]; this module
//! only selects a source and fills in the derived names.

mod builtin;
mod context;

pub use context::RenderContext;

use std::fmt;

use crate::domain::{GenerationRequest, Identifier};

/// Every file shape the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKind {
    Interface,
    Implementation,
    ApiClientNew,
    /// A single method body; embedded in [`TemplateKind::ApiClientNew`] or
    /// appended to an existing client.
    ApiClientMethod,
    Action,
    Entity,
    BaseInterface,
    ApiClientUtil,
}

impl TemplateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Implementation => "implementation",
            Self::ApiClientNew => "api-client",
            Self::ApiClientMethod => "api-client-method",
            Self::Action => "action",
            Self::Entity => "entity",
            Self::BaseInterface => "base-interface",
            Self::ApiClientUtil => "api-client-util",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs of a render call.
///
/// `http_method` is kept as the raw verb so the renderer can emit its
/// explicit-failure stub for verbs it does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParams {
    pub domain: Identifier,
    pub use_case: Identifier,
    pub api: Identifier,
    pub http_method: String,
    pub endpoint: String,
}

impl TemplateParams {
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            domain: request.domain().clone(),
            use_case: request.use_case().clone(),
            api: request.api().clone(),
            http_method: request.method().as_str().to_string(),
            endpoint: request.endpoint(),
        }
    }

    /// Symbol under which the use case is registered, e.g. `GET_PRODUCT_USE_CASE`.
    pub fn use_case_symbol(&self) -> String {
        use_case_symbol(&self.use_case)
    }

    /// Symbol under which the API client is registered, e.g. `PRODUCTS`.
    pub fn api_symbol(&self) -> String {
        self.api.constant()
    }

    fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_variable("DOMAIN", self.domain.as_str())
            .with_variable("DOMAIN_PASCAL", self.domain.pascal())
            .with_variable("USE_CASE", self.use_case.as_str())
            .with_variable("USE_CASE_CAMEL", self.use_case.camel())
            .with_variable("USE_CASE_PASCAL", self.use_case.pascal())
            .with_variable("USE_CASE_SYMBOL", self.use_case_symbol())
            .with_variable("API", self.api.as_str())
            .with_variable("API_CAMEL", self.api.camel())
            .with_variable("API_PASCAL", self.api.pascal())
            .with_variable("API_SYMBOL", self.api_symbol())
            .with_variable("HTTP_METHOD", self.verb())
            .with_variable("ENDPOINT", self.endpoint.as_str())
    }

    fn verb(&self) -> String {
        self.http_method.trim().to_ascii_uppercase()
    }
}

/// `get-product` → `GET_PRODUCT_USE_CASE`
pub fn use_case_symbol(use_case: &Identifier) -> String {
    format!("{}_USE_CASE", use_case.constant())
}

/// Render one template to its full file text.
pub fn render(kind: TemplateKind, params: &TemplateParams) -> String {
    let ctx = params.context();
    match kind {
        TemplateKind::Interface => ctx.render(builtin::INTERFACE),
        TemplateKind::Implementation => ctx
            .with_variable("CALL_ARGS", call_arguments(&params.verb()))
            .render(builtin::IMPLEMENTATION),
        TemplateKind::ApiClientNew => ctx
            .with_variable("METHOD", render(TemplateKind::ApiClientMethod, params))
            .render(builtin::API_CLIENT_NEW),
        TemplateKind::ApiClientMethod => ctx.render(method_source(&params.verb())),
        TemplateKind::Action => ctx.render(builtin::ACTION),
        TemplateKind::Entity => ctx.render(builtin::ENTITY),
        TemplateKind::BaseInterface => ctx.render(builtin::BASE_INTERFACE),
        TemplateKind::ApiClientUtil => ctx.render(builtin::API_CLIENT_UTIL),
    }
}

fn method_source(verb: &str) -> &'static str {
    match verb {
        "GET" => builtin::METHOD_GET,
        "POST" => builtin::METHOD_POST,
        "PUT" | "PATCH" => builtin::METHOD_WITH_ID_AND_BODY,
        "DELETE" => builtin::METHOD_DELETE,
        _ => builtin::METHOD_UNSUPPORTED,
    }
}

/// Arguments the use case passes to its API client method.
fn call_arguments(verb: &str) -> &'static str {
    match verb {
        "GET" => "input?.id as string | undefined",
        "POST" => "input",
        "PUT" | "PATCH" => "String(input?.id), input",
        "DELETE" => "String(input?.id)",
        _ => "",
    }
}
