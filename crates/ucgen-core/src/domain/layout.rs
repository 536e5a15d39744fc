//! Where each generated artifact lives inside a project.

use crate::domain::template::TemplateKind;
use crate::domain::{GenerationRequest, RelativePath};

/// Path of the file rendered from `kind`, relative to the project root.
///
/// `None` for kinds that are fragments of another file.
pub fn artifact_path(kind: TemplateKind, request: &GenerationRequest) -> Option<RelativePath> {
    let ext = &request.options().extension;
    let domain = request.domain();
    let use_case = request.use_case();
    let api = request.api();

    let path = match kind {
        TemplateKind::Interface => {
            format!("src/domains/{domain}/usecases/{use_case}.usecase.interface.{ext}")
        }
        TemplateKind::Implementation => format!("src/application/use-cases/{use_case}.usecase.{ext}"),
        TemplateKind::ApiClientNew => format!("src/infrastructure/api/{api}/{api}.api.{ext}"),
        TemplateKind::Action => format!("src/presenter/actions/{}.action.{ext}", use_case.camel()),
        TemplateKind::Entity => format!("src/domains/{domain}/entities/{domain}.entity.{ext}"),
        TemplateKind::BaseInterface => format!("src/domains/shared/usecase.interface.{ext}"),
        TemplateKind::ApiClientUtil => format!("src/infrastructure/api/api-client.{ext}"),
        TemplateKind::ApiClientMethod => return None,
    };
    Some(RelativePath::new(path))
}

/// Template kinds a request produces files for, in plan order.
pub fn requested_artifacts(request: &GenerationRequest) -> Vec<TemplateKind> {
    let mut kinds = vec![
        TemplateKind::Interface,
        TemplateKind::Implementation,
        TemplateKind::ApiClientNew,
        TemplateKind::Action,
    ];
    if request.options().with_entity {
        kinds.push(TemplateKind::Entity);
    }
    if request.options().with_support_files {
        kinds.extend([TemplateKind::BaseInterface, TemplateKind::ApiClientUtil]);
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::builder()
            .domain("products")
            .use_case("get-product")
            .api("products")
            .build()
            .unwrap()
    }

    fn path(kind: TemplateKind) -> String {
        artifact_path(kind, &request()).unwrap().to_string()
    }

    #[test]
    fn conventional_layout() {
        assert_eq!(
            path(TemplateKind::Interface),
            "src/domains/products/usecases/get-product.usecase.interface.ts"
        );
        assert_eq!(
            path(TemplateKind::Implementation),
            "src/application/use-cases/get-product.usecase.ts"
        );
        assert_eq!(
            path(TemplateKind::ApiClientNew),
            "src/infrastructure/api/products/products.api.ts"
        );
        assert_eq!(path(TemplateKind::Action), "src/presenter/actions/getProduct.action.ts");
        assert_eq!(
            path(TemplateKind::Entity),
            "src/domains/products/entities/products.entity.ts"
        );
    }

    #[test]
    fn method_fragment_has_no_file() {
        assert!(artifact_path(TemplateKind::ApiClientMethod, &request()).is_none());
    }

    #[test]
    fn optional_artifacts_follow_options() {
        assert_eq!(requested_artifacts(&request()).len(), 4);

        let full = GenerationRequest::builder()
            .domain("products")
            .use_case("get-product")
            .api("products")
            .with_entity(true)
            .with_support_files(true)
            .build()
            .unwrap();
        let kinds = requested_artifacts(&full);
        assert_eq!(kinds.len(), 7);
        assert_eq!(kinds[4], TemplateKind::Entity);
    }
}
