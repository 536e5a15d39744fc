//! Textual convention of registry files.
//!
//! Everything that depends on how a registry *looks* (marker comments, how a
//! line's key is recognised) lives behind [`RegistrySyntax`]. The document
//! model in `document.rs` only sees markers, keys and raw lines.

use std::sync::LazyLock;

use regex::Regex;

/// A region boundary recognised on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Begin(String),
    End(String),
}

/// How region markers and entry keys are spelled in a registry file.
///
/// Lines passed in never include their line ending.
pub trait RegistrySyntax {
    /// Recognise a begin/end marker line.
    fn marker(&self, line: &str) -> Option<Marker>;

    /// Text of a begin marker for `group`, without indentation.
    fn begin_marker(&self, group: &str) -> String;

    /// Text of an end marker for `group`, without indentation.
    fn end_marker(&self, group: &str) -> String;

    /// Key of an entry line inside a region; `None` for blank and comment
    /// lines, which are kept but never count as entries.
    fn entry_key(&self, line: &str) -> Option<String>;
}

/// `// @ucgen-begin <group>` / `// @ucgen-end <group>` markers in
/// TypeScript/JavaScript registry files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsMarkerSyntax;

const TAG: &str = "@ucgen";

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*//\s*@ucgen-(begin|end)\s+([A-Za-z0-9_.-]+)\s*$")
        .expect("marker pattern is valid")
});

/// `import { A } from "m";` and `import "m";` → `m`
static IMPORT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*import\b(?:.*\bfrom)?\s*["']([^"']+)["']"#).expect("import pattern is valid")
});

/// `container.bind(SYMBOLS.X)…` and `container.bind<T>(X)…` → `X`
static BIND_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.bind\s*(?:<[^>]*>)?\(\s*(?:[A-Za-z_$][\w$]*\.)?([A-Za-z_$][\w$]*)\s*\)")
        .expect("bind pattern is valid")
});

/// `KEY: value,` and `"KEY": value,` → `KEY`
static OBJECT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*["']?([A-Za-z_$][\w$]*)["']?\s*:"#).expect("object key pattern is valid")
});

impl RegistrySyntax for TsMarkerSyntax {
    fn marker(&self, line: &str) -> Option<Marker> {
        let caps = MARKER.captures(line)?;
        let group = caps[2].to_string();
        match &caps[1] {
            "begin" => Some(Marker::Begin(group)),
            _ => Some(Marker::End(group)),
        }
    }

    fn begin_marker(&self, group: &str) -> String {
        format!("// {TAG}-begin {group}")
    }

    fn end_marker(&self, group: &str) -> String {
        format!("// {TAG}-end {group}")
    }

    fn entry_key(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) {
            return None;
        }

        [&IMPORT_KEY, &BIND_KEY, &OBJECT_KEY]
            .iter()
            .find_map(|re| re.captures(trimmed).map(|caps| caps[1].to_string()))
            .or_else(|| Some(trimmed.trim_end_matches([',', ';']).trim_end().to_string()))
    }
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_markers_with_any_indentation() {
        let syntax = TsMarkerSyntax;
        assert_eq!(
            syntax.marker("  // @ucgen-begin api-symbols"),
            Some(Marker::Begin("api-symbols".into()))
        );
        assert_eq!(
            syntax.marker("//@ucgen-end imports  "),
            Some(Marker::End("imports".into()))
        );
        assert_eq!(syntax.marker("// ucgen-begin imports"), None);
        assert_eq!(syntax.marker("const x = 1; // @ucgen-begin x"), None);
    }

    #[test]
    fn markers_round_trip_through_recogniser() {
        let syntax = TsMarkerSyntax;
        assert_eq!(
            syntax.marker(&syntax.begin_marker("registrations")),
            Some(Marker::Begin("registrations".into()))
        );
        assert_eq!(
            syntax.marker(&syntax.end_marker("registrations")),
            Some(Marker::End("registrations".into()))
        );
    }

    #[test]
    fn keys_of_import_lines_are_module_specifiers() {
        let syntax = TsMarkerSyntax;
        assert_eq!(
            syntax.entry_key(r#"import { ProductsApi } from "@/infrastructure/api/products/products.api";"#),
            Some("@/infrastructure/api/products/products.api".into())
        );
        assert_eq!(
            syntax.entry_key("import 'reflect-metadata';"),
            Some("reflect-metadata".into())
        );
    }

    #[test]
    fn keys_of_bindings_are_symbols() {
        let syntax = TsMarkerSyntax;
        assert_eq!(
            syntax.entry_key("container.bind(SYMBOLS.GET_PRODUCT_USE_CASE).to(GetProductUseCase);"),
            Some("GET_PRODUCT_USE_CASE".into())
        );
        assert_eq!(
            syntax.entry_key("container.bind<ProductsApi>( SYMBOLS.PRODUCTS ).to(ProductsApi);"),
            Some("PRODUCTS".into())
        );
    }

    #[test]
    fn keys_of_object_members() {
        let syntax = TsMarkerSyntax;
        assert_eq!(
            syntax.entry_key(r#"  PRODUCTS: Symbol.for("PRODUCTS"),"#),
            Some("PRODUCTS".into())
        );
        assert_eq!(
            syntax.entry_key(r#"  "ORDERS" : Symbol.for("ORDERS"),"#),
            Some("ORDERS".into())
        );
    }

    #[test]
    fn unrecognised_lines_key_on_their_text() {
        let syntax = TsMarkerSyntax;
        assert_eq!(syntax.entry_key("  registerAll();  "), Some("registerAll()".into()));
    }

    #[test]
    fn blank_and_comment_lines_have_no_key() {
        let syntax = TsMarkerSyntax;
        assert_eq!(syntax.entry_key("   "), None);
        assert_eq!(syntax.entry_key("  // PRODUCTS: old"), None);
        assert_eq!(syntax.entry_key(" * doc"), None);
    }
}
