use minijinja::{AutoEscape, Environment, context};

use designgen_core::model::ApiModel;

use crate::error::GenerateError;
use crate::rules;

const TEMPLATE_NAME: &str = "design.go.j2";

/// Render driver: wraps the rendered declarations in the Go program header.
///
/// Built once and immutable afterwards, so a single renderer can be shared
/// across threads and reused for any number of models.
pub struct DesignRenderer {
    env: Environment<'static>,
}

impl DesignRenderer {
    pub fn new() -> Result<Self, GenerateError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(TEMPLATE_NAME, include_str!("../templates/design.go.j2"))?;
        Ok(Self { env })
    }

    /// Render the unformatted design program for `api` in Go package `package`.
    pub fn render(&self, api: &ApiModel, package: &str) -> Result<String, GenerateError> {
        if !is_go_identifier(package) {
            return Err(GenerateError::InvalidPackage(package.to_string()));
        }

        let sections: Vec<String> = [
            rules::api(api),
            rules::resources(api),
            rules::user_types(api),
        ]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect();

        log::debug!(
            "rendering package {package}: {} section(s), {} resource(s), {} type(s)",
            sections.len(),
            api.resources.len(),
            api.types.len()
        );

        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        let raw = tmpl.render(context! {
            package => package,
            sections => sections,
        })?;
        Ok(raw)
    }
}

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use designgen_core::model::{ResourceModel, UserTypeModel};

    use super::*;

    const HEADER: &str = "package design

import (
\t. \"github.com/goadesign/goa/design\"
\t. \"github.com/goadesign/goa/design/apidsl\"
)
";

    #[test]
    fn test_header_only_for_empty_model() {
        let renderer = DesignRenderer::new().unwrap();
        let raw = renderer.render(&ApiModel::default(), "design").unwrap();
        assert_eq!(raw, HEADER);
    }

    #[test]
    fn test_sections_follow_header() {
        let renderer = DesignRenderer::new().unwrap();
        let api = ApiModel {
            title: "Pets".to_string(),
            resources: BTreeMap::from([(
                "pet".to_string(),
                ResourceModel {
                    name: "pet".to_string(),
                    ..ResourceModel::default()
                },
            )]),
            types: BTreeMap::from([("Pet".to_string(), UserTypeModel::new("Pet"))]),
            ..ApiModel::default()
        };
        let raw = renderer.render(&api, "design").unwrap();
        let expected = format!(
            "{HEADER}\nvar _ = API(\"\", func() {{\nTitle(\"Pets\")\n}})\n\nvar _ = Resource(\"pet\", func() {{\n}})\n\nvar Pet = Type(\"Pet\", func() {{\n}})\n"
        );
        assert_eq!(raw, expected);
    }

    #[test]
    fn test_custom_package() {
        let renderer = DesignRenderer::new().unwrap();
        let raw = renderer.render(&ApiModel::default(), "petstore").unwrap();
        assert!(raw.starts_with("package petstore\n"));
    }

    #[test]
    fn test_invalid_package() {
        let renderer = DesignRenderer::new().unwrap();
        for package in ["", "9lives", "my-design", "func"] {
            let err = renderer.render(&ApiModel::default(), package).unwrap_err();
            assert!(matches!(err, GenerateError::InvalidPackage(_)), "{package}");
        }
    }

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DesignRenderer>();

        let renderer = DesignRenderer::new().unwrap();
        let api = ApiModel {
            host: "example.com".to_string(),
            ..ApiModel::default()
        };
        let first = renderer.render(&api, "design").unwrap();
        let second = renderer.render(&api, "design").unwrap();
        assert_eq!(first, second);
    }
}
