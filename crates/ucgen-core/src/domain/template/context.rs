use std::collections::BTreeMap;

/// Variable map for `{{NAME}}` substitution.
///
/// ## Edge Cases
///
/// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
/// - `{{A}}{{A}}` → both replaced
/// - single braces (TypeScript blocks, `${id}`) are never touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// `BTreeMap` keeps substitution order stable between runs.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Values are inserted verbatim; a value that itself contains a
    /// placeholder is not expanded a second time unless a later key matches.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_placeholders() {
        let ctx = RenderContext::new()
            .with_variable("NAME", "GetProduct")
            .with_variable("CONST", "GET_PRODUCT");
        assert_eq!(
            ctx.render("class {{NAME}} { id = SYMBOLS.{{CONST}}; }"),
            "class GetProduct { id = SYMBOLS.GET_PRODUCT; }"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_and_template_literals() {
        let ctx = RenderContext::new().with_variable("NAME", "x");
        assert_eq!(
            ctx.render("{{OTHER}} `${id}` {{NAME}}{{NAME}}"),
            "{{OTHER}} `${id}` xx"
        );
    }

    #[test]
    fn get_returns_inserted_value() {
        let ctx = RenderContext::new().with_variable("API", "products");
        assert_eq!(ctx.get("API"), Some("products"));
        assert_eq!(ctx.get("MISSING"), None);
    }
}
