//! The `GenerationRequest` aggregate and its builder.
//!
//! A `GenerationRequest` is the fully-validated description of one use case
//! to scaffold. Raw user strings go into the builder; `build()` validates all
//! of them before anything is planned, so an invalid method or identifier
//! never reaches the planner.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{HttpMethod, Identifier},
};

/// Default prefix of generated endpoint paths.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
/// Default extension of generated source files.
pub const DEFAULT_EXTENSION: &str = "ts";

/// Everything needed to scaffold one use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    domain: Identifier,
    use_case: Identifier,
    api: Identifier,
    method: HttpMethod,
    project_root: PathBuf,
    options: GenerationOptions,
}

/// Optional knobs of a request, usually fed from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Also generate `src/domains/{domain}/entities/{domain}.entity.*`.
    pub with_entity: bool,
    /// Also generate the shared base interface and API client helper.
    pub with_support_files: bool,
    /// Prefix of every generated endpoint, e.g. `/api/v1`.
    pub api_prefix: String,
    /// Extension of generated files, without the dot.
    pub extension: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            with_entity: false,
            with_support_files: false,
            api_prefix: DEFAULT_API_PREFIX.into(),
            extension: DEFAULT_EXTENSION.into(),
        }
    }
}

impl GenerationRequest {
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    pub fn domain(&self) -> &Identifier {
        &self.domain
    }
    pub fn use_case(&self) -> &Identifier {
        &self.use_case
    }
    pub fn api(&self) -> &Identifier {
        &self.api
    }
    pub const fn method(&self) -> HttpMethod {
        self.method
    }
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Endpoint targeted by the generated API client method.
    ///
    /// `get-product` under `/api/v1` → `/api/v1/get/product`.
    pub fn endpoint(&self) -> String {
        let prefix = self.options.api_prefix.trim_end_matches('/');
        format!("{prefix}/{}", self.use_case.path_segments())
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} via {} ({})",
            self.domain, self.use_case, self.api, self.method
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`GenerationRequest`].
///
/// Accepts raw strings; validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    domain: Option<String>,
    use_case: Option<String>,
    api: Option<String>,
    method: Option<String>,
    project_root: Option<PathBuf>,
    options: GenerationOptions,
}

impl GenerationRequestBuilder {
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn use_case(mut self, use_case: impl Into<String>) -> Self {
        self.use_case = Some(use_case.into());
        self
    }

    pub fn api(mut self, api: impl Into<String>) -> Self {
        self.api = Some(api.into());
        self
    }

    /// HTTP method, case-insensitive. `GET` when never called.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Root every generated path is resolved against. `.` when never called.
    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_entity(mut self, yes: bool) -> Self {
        self.options.with_entity = yes;
        self
    }

    pub fn with_support_files(mut self, yes: bool) -> Self {
        self.options.with_support_files = yes;
        self
    }

    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.api_prefix = prefix.into();
        self
    }

    /// Consume builder and construct `GenerationRequest`.
    ///
    /// Fails on the first missing or malformed field, in argument order:
    /// domain, use case, api, method.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let domain = required(self.domain, "domain")?;
        let use_case = required(self.use_case, "use case")?;
        let api = required(self.api, "api")?;

        let domain = Identifier::parse("domain", &domain)?;
        let use_case = Identifier::parse("use case", &use_case)?;
        let api = Identifier::parse("api", &api)?;

        let method = match self.method {
            Some(raw) => raw.parse::<HttpMethod>()?,
            None => HttpMethod::default(),
        };

        let extension = self.options.extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "extension" });
        }
        if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidOption {
                option: "extension",
                value: extension,
                reason: "only letters and digits are allowed",
            });
        }
        validate_api_prefix(&self.options.api_prefix)?;
        let options = GenerationOptions {
            extension,
            ..self.options
        };

        Ok(GenerationRequest {
            domain,
            use_case,
            api,
            method,
            project_root: self.project_root.unwrap_or_else(|| PathBuf::from(".")),
            options,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value.ok_or(DomainError::MissingRequiredField { field })
}

/// The prefix lands verbatim in generated template literals.
fn validate_api_prefix(prefix: &str) -> Result<(), DomainError> {
    let reason = if !prefix.starts_with('/') {
        Some("must start with '/'")
    } else if !prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'))
    {
        Some("only letters, digits, '/', '-', '_' and '.' are allowed")
    } else if prefix.split('/').any(|segment| segment == "." || segment == "..") {
        Some("'.' and '..' segments are not allowed")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(DomainError::InvalidOption {
            option: "api prefix",
            value: prefix.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> GenerationRequestBuilder {
        GenerationRequest::builder()
            .domain("products")
            .use_case("get-product")
            .api("products")
    }

    #[test]
    fn builder_defaults() {
        let request = products().build().unwrap();
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.project_root(), Path::new("."));
        assert!(!request.options().with_entity);
        assert_eq!(request.options().extension, "ts");
    }

    #[test]
    fn builder_requires_every_identifier() {
        let err = GenerationRequest::builder()
            .domain("products")
            .api("products")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "use case" });
    }

    #[test]
    fn builder_rejects_unknown_method() {
        let err = products().method("PURGE").build().unwrap_err();
        assert!(matches!(err, DomainError::InvalidHttpMethod { .. }));
    }

    #[test]
    fn builder_rejects_malformed_identifier() {
        let err = products().api("Products_API").build().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidIdentifier { field: "api", .. }
        ));
    }

    #[test]
    fn endpoint_joins_prefix_and_segments() {
        let request = products().build().unwrap();
        assert_eq!(request.endpoint(), "/api/v1/get/product");

        let request = products().api_prefix("/api/").build().unwrap();
        assert_eq!(request.endpoint(), "/api/get/product");
    }

    #[test]
    fn api_prefix_must_be_an_absolute_url_path() {
        for bad in ["api", "", "/api v1", "/api/${x}", "/api/../v1"] {
            let err = products().api_prefix(bad).build().unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidOption { option: "api prefix", .. }),
                "{bad}: {err:?}"
            );
        }
        assert!(products().api_prefix("/").build().is_ok());
        assert!(products().api_prefix("/api/v1.2_beta").build().is_ok());
    }

    #[test]
    fn extension_cannot_leave_the_source_tree() {
        for bad in ["ts/../../x", "t s", "d.ts"] {
            let options = GenerationOptions {
                extension: bad.into(),
                ..GenerationOptions::default()
            };
            let err = products().options(options).build().unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidOption { option: "extension", .. }),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn extension_is_normalised() {
        let options = GenerationOptions {
            extension: ".tsx".into(),
            ..GenerationOptions::default()
        };
        let request = products().options(options).build().unwrap();
        assert_eq!(request.options().extension, "tsx");
    }
}
