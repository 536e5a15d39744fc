//! The two registry files the generator maintains.

use std::fmt;

use serde::Serialize;

use super::document::{
    GroupAnchor, GroupPlacement, InsertOutcome, RegistryDocument, RegistryEntry,
};
use super::syntax::TsMarkerSyntax;
use crate::domain::RelativePath;
use crate::domain::template::TemplateParams;

pub const API_SYMBOLS: &str = "api-symbols";
pub const USE_CASE_SYMBOLS: &str = "use-case-symbols";
pub const IMPORTS: &str = "imports";
pub const REGISTRATIONS: &str = "registrations";

const SYMBOLS_SKELETON: &str = r#"export const SYMBOLS = {
  // @ucgen-begin api-symbols
  // @ucgen-end api-symbols
  // @ucgen-begin use-case-symbols
  // @ucgen-end use-case-symbols
};
"#;

const CONTAINER_SKELETON: &str = r#"import "reflect-metadata";
import { Container } from "inversify";

import { SYMBOLS } from "./symbols";
// @ucgen-begin imports
// @ucgen-end imports

export const container = new Container();

// @ucgen-begin registrations
// @ucgen-end registrations
"#;

/// Which registry a patch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// Symbol table, `src/di/symbols.*`.
    Symbols,
    /// Dependency-injection bindings, `src/di/container.*`.
    Container,
}

impl RegistryKind {
    pub const ALL: [Self; 2] = [Self::Symbols, Self::Container];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Symbols => "symbols",
            Self::Container => "container",
        }
    }

    pub fn path(&self, extension: &str) -> RelativePath {
        RelativePath::new(format!("src/di/{}.{extension}", self.as_str()))
    }

    /// Group names in the order they appear in a fresh file.
    pub const fn groups(&self) -> &'static [&'static str] {
        match self {
            Self::Symbols => &[API_SYMBOLS, USE_CASE_SYMBOLS],
            Self::Container => &[IMPORTS, REGISTRATIONS],
        }
    }

    /// Text of a registry file that does not exist yet.
    pub const fn skeleton(&self) -> &'static str {
        match self {
            Self::Symbols => SYMBOLS_SKELETON,
            Self::Container => CONTAINER_SKELETON,
        }
    }

    /// Where `group` goes when a hand-written file lacks it.
    pub fn placement(&self, group: &str) -> GroupPlacement {
        match (self, group) {
            (Self::Symbols, _) => GroupPlacement {
                anchor: GroupAnchor::BeforeObjectClose("export const SYMBOLS"),
                indent: "  ",
            },
            (Self::Container, IMPORTS) => GroupPlacement {
                anchor: GroupAnchor::AfterImports,
                indent: "",
            },
            (Self::Container, _) => GroupPlacement::END,
        }
    }

    pub fn parse(&self, text: &str) -> RegistryDocument {
        RegistryDocument::parse(text, &TsMarkerSyntax)
    }

    /// Entries one use case contributes to this registry.
    pub fn insertions(&self, params: &TemplateParams) -> Vec<Insertion> {
        let api_symbol = params.api_symbol();
        let use_case_symbol = params.use_case_symbol();
        let api_class = format!("{}Api", params.api.pascal());
        let use_case_class = format!("{}UseCase", params.use_case.pascal());

        match self {
            Self::Symbols => vec![
                Insertion::new(API_SYMBOLS, symbol_entry(&api_symbol)),
                Insertion::new(USE_CASE_SYMBOLS, symbol_entry(&use_case_symbol)),
            ],
            Self::Container => {
                let api_module = format!(
                    "@/infrastructure/api/{api}/{api}.api",
                    api = params.api
                );
                let use_case_module =
                    format!("@/application/use-cases/{}.usecase", params.use_case);
                vec![
                    Insertion::new(IMPORTS, import_entry(&api_class, api_module)),
                    Insertion::new(IMPORTS, import_entry(&use_case_class, use_case_module)),
                    Insertion::new(
                        REGISTRATIONS,
                        RegistryEntry::new(
                            api_symbol.clone(),
                            format!(
                                "container.bind(SYMBOLS.{api_symbol}).to({api_class}).inSingletonScope();"
                            ),
                        ),
                    ),
                    Insertion::new(
                        REGISTRATIONS,
                        RegistryEntry::new(
                            use_case_symbol.clone(),
                            format!("container.bind(SYMBOLS.{use_case_symbol}).to({use_case_class});"),
                        ),
                    ),
                ]
            }
        }
    }

    /// Apply `insertions` to `document` in order.
    pub fn apply(&self, document: &mut RegistryDocument, insertions: &[Insertion]) -> PatchSummary {
        let mut summary = PatchSummary::default();
        for insertion in insertions {
            let outcome = document.insert(
                insertion.group,
                insertion.entry.clone(),
                self.placement(insertion.group),
                &TsMarkerSyntax,
            );
            match outcome {
                InsertOutcome::Inserted { created_group } => {
                    summary.inserted += 1;
                    if created_group {
                        summary.created_groups.push(insertion.group);
                    }
                }
                InsertOutcome::AlreadyPresent => summary.already_present += 1,
                InsertOutcome::Unplaced => {
                    if !summary.unplaced.contains(&insertion.group) {
                        summary.unplaced.push(insertion.group);
                    }
                }
            }
        }
        summary
    }

    /// How many of `insertions` are not yet in `document`. An absent
    /// registry has everything pending.
    pub fn pending(&self, document: Option<&RegistryDocument>, insertions: &[Insertion]) -> usize {
        insertions
            .iter()
            .filter(|i| !document.is_some_and(|doc| doc.contains(i.group, &i.entry.key)))
            .count()
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry destined for a named group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub group: &'static str,
    pub entry: RegistryEntry,
}

impl Insertion {
    pub fn new(group: &'static str, entry: RegistryEntry) -> Self {
        Self { group, entry }
    }

    pub fn key(&self) -> &str {
        &self.entry.key
    }
}

/// Counts from [`RegistryKind::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub inserted: usize,
    pub already_present: usize,
    pub created_groups: Vec<&'static str>,
    /// Missing groups with no safe place in the file.
    pub unplaced: Vec<&'static str>,
}

fn symbol_entry(symbol: &str) -> RegistryEntry {
    RegistryEntry::new(symbol, format!("{symbol}: Symbol.for(\"{symbol}\"),"))
}

fn import_entry(class: &str, module: String) -> RegistryEntry {
    let line = format!("import {{ {class} }} from \"{module}\";");
    RegistryEntry::new(module, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenerationRequest;
    use crate::domain::registry::RegistrySyntax;

    fn params() -> TemplateParams {
        let request = GenerationRequest::builder()
            .domain("products")
            .use_case("get-product")
            .api("products")
            .build()
            .unwrap();
        TemplateParams::from_request(&request)
    }

    #[test]
    fn skeletons_parse_cleanly_with_every_group() {
        for kind in RegistryKind::ALL {
            let doc = kind.parse(kind.skeleton());
            assert!(doc.issues().is_empty(), "{kind}");
            for group in kind.groups() {
                assert!(doc.group(group).unwrap().is_empty(), "{kind}/{group}");
            }
        }
    }

    #[test]
    fn paths_use_extension() {
        assert_eq!(RegistryKind::Symbols.path("ts").to_string(), "src/di/symbols.ts");
        assert_eq!(RegistryKind::Container.path("js").to_string(), "src/di/container.js");
    }

    #[test]
    fn insertion_keys_match_what_the_syntax_recognises() {
        let syntax = TsMarkerSyntax;
        for kind in RegistryKind::ALL {
            for insertion in kind.insertions(&params()) {
                assert_eq!(
                    syntax.entry_key(&insertion.entry.value).as_deref(),
                    Some(insertion.key()),
                    "{}",
                    insertion.entry.value
                );
            }
        }
    }

    #[test]
    fn symbols_from_scratch() {
        let kind = RegistryKind::Symbols;
        let mut doc = kind.parse(kind.skeleton());
        let summary = kind.apply(&mut doc, &kind.insertions(&params()));
        assert_eq!(summary.inserted, 2);
        assert_eq!(
            doc.serialize(),
            r#"export const SYMBOLS = {
  // @ucgen-begin api-symbols
  PRODUCTS: Symbol.for("PRODUCTS"),
  // @ucgen-end api-symbols
  // @ucgen-begin use-case-symbols
  GET_PRODUCT_USE_CASE: Symbol.for("GET_PRODUCT_USE_CASE"),
  // @ucgen-end use-case-symbols
};
"#
        );
    }

    #[test]
    fn container_from_scratch() {
        let kind = RegistryKind::Container;
        let mut doc = kind.parse(kind.skeleton());
        kind.apply(&mut doc, &kind.insertions(&params()));
        let text = doc.serialize();
        assert!(text.contains(
            "// @ucgen-begin imports\nimport { ProductsApi } from \"@/infrastructure/api/products/products.api\";\nimport { GetProductUseCase } from \"@/application/use-cases/get-product.usecase\";\n// @ucgen-end imports\n"
        ));
        assert!(text.contains(
            "container.bind(SYMBOLS.PRODUCTS).to(ProductsApi).inSingletonScope();\ncontainer.bind(SYMBOLS.GET_PRODUCT_USE_CASE).to(GetProductUseCase);\n// @ucgen-end registrations\n"
        ));
    }

    #[test]
    fn second_apply_changes_nothing() {
        for kind in RegistryKind::ALL {
            let insertions = kind.insertions(&params());
            let mut doc = kind.parse(kind.skeleton());
            kind.apply(&mut doc, &insertions);
            let first = doc.serialize();

            let summary = kind.apply(&mut doc, &insertions);
            assert_eq!(summary.inserted, 0);
            assert_eq!(summary.already_present, insertions.len());
            assert_eq!(doc.serialize(), first);
        }
    }

    #[test]
    fn hand_written_symbols_gain_missing_groups() {
        let kind = RegistryKind::Symbols;
        let text = "// project symbols\nexport const SYMBOLS = {\n  LOGGER: Symbol.for(\"LOGGER\"),\n};\n";
        let mut doc = kind.parse(text);
        let summary = kind.apply(&mut doc, &kind.insertions(&params()));
        assert_eq!(summary.created_groups, [API_SYMBOLS, USE_CASE_SYMBOLS]);

        let out = doc.serialize();
        assert!(out.starts_with("// project symbols\nexport const SYMBOLS = {\n  LOGGER: Symbol.for(\"LOGGER\"),\n  // @ucgen-begin api-symbols\n"));
        assert!(out.ends_with("  // @ucgen-end use-case-symbols\n};\n"));
    }

    #[test]
    fn imports_region_follows_a_multi_line_import() {
        let kind = RegistryKind::Container;
        let text = "import \"reflect-metadata\";\nimport {\n  Container,\n  interfaces,\n} from \"inversify\";\n\nexport const container = new Container();\n";
        let mut doc = kind.parse(text);
        kind.apply(&mut doc, &kind.insertions(&params()));

        let out = doc.serialize();
        assert!(out.starts_with(
            "import \"reflect-metadata\";\nimport {\n  Container,\n  interfaces,\n} from \"inversify\";\n// @ucgen-begin imports\nimport { ProductsApi }"
        ));
        assert!(out.ends_with("container.bind(SYMBOLS.GET_PRODUCT_USE_CASE).to(GetProductUseCase);\n// @ucgen-end registrations\n"));
    }

    #[test]
    fn symbol_regions_stay_inside_the_symbols_object() {
        let kind = RegistryKind::Symbols;
        let text = "export const SYMBOLS = {\n  LOGGER: Symbol.for(\"LOGGER\"),\n};\n\nexport function symbolName(s: symbol) {\n  return s.description;\n}\n";
        let mut doc = kind.parse(text);
        let summary = kind.apply(&mut doc, &kind.insertions(&params()));
        assert!(summary.unplaced.is_empty());

        let out = doc.serialize();
        let close = out.find("};\n").unwrap();
        assert!(out.find("// @ucgen-begin api-symbols").unwrap() < close);
        assert!(out.find("// @ucgen-end use-case-symbols").unwrap() < close);
        assert!(out.ends_with("};\n\nexport function symbolName(s: symbol) {\n  return s.description;\n}\n"));
    }

    #[test]
    fn symbols_without_the_object_are_left_alone() {
        let kind = RegistryKind::Symbols;
        let text = "export const TOKENS = {};\n";
        let mut doc = kind.parse(text);
        let summary = kind.apply(&mut doc, &kind.insertions(&params()));
        assert_eq!(summary.inserted, 0);
        assert_eq!(summary.unplaced, [API_SYMBOLS, USE_CASE_SYMBOLS]);
        assert_eq!(doc.serialize(), text);
    }

    #[test]
    fn pending_counts_missing_entries() {
        let kind = RegistryKind::Symbols;
        let insertions = kind.insertions(&params());
        assert_eq!(kind.pending(None, &insertions), 2);

        let mut doc = kind.parse(kind.skeleton());
        assert_eq!(kind.pending(Some(&doc), &insertions), 2);
        kind.apply(&mut doc, &insertions[..1]);
        assert_eq!(kind.pending(Some(&doc), &insertions), 1);
    }
}
