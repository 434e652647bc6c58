use std::collections::BTreeMap;

use crate::model::*;
use crate::parse::operation::{Operation, ParameterLocation, ParameterOrRef, PathItem};
use crate::parse::spec::{ExternalDocs, SwaggerSpec};

use super::name_normalizer::{
    dsl_path, path_prefix, ref_type_name, response_name, route_to_name, type_name,
};

/// Options controlling which parts of the document are mapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Map `paths` into resources/actions and `definitions` into types.
    pub operations: bool,
}

/// Normalize a parsed Swagger document into the canonical model.
pub fn normalize(spec: &SwaggerSpec) -> ApiModel {
    normalize_with_options(spec, &NormalizeOptions::default())
}

/// Normalize with explicit options.
pub fn normalize_with_options(spec: &SwaggerSpec, options: &NormalizeOptions) -> ApiModel {
    let mut api = ApiModel {
        host: spec.host.clone(),
        schemes: spec.schemes.clone(),
        base_path: spec.base_path.clone(),
        consumes: vec![EncodingModel {
            mime_types: spec.consumes.clone(),
            encoder: false,
            ..EncodingModel::default()
        }],
        produces: vec![EncodingModel {
            mime_types: spec.produces.clone(),
            encoder: true,
            ..EncodingModel::default()
        }],
        ..ApiModel::default()
    };

    if let Some(ref info) = spec.info {
        let title = info.title.clone().unwrap_or_default();
        api.name = title.clone();
        api.title = title;
        api.description = info.description.clone().unwrap_or_default();
        api.version = info.version.clone().unwrap_or_default();
        api.terms_of_service = info.terms_of_service.clone().unwrap_or_default();
        api.contact = info.contact.as_ref().map(|c| ContactModel {
            name: c.name.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            url: c.url.clone().unwrap_or_default(),
        });
        api.license = info.license.as_ref().map(|l| LicenseModel {
            name: l.name.clone().unwrap_or_default(),
            url: l.url.clone().unwrap_or_default(),
        });
    }

    api.docs = spec.external_docs.as_ref().map(docs_model);

    if options.operations {
        map_definitions(spec, &mut api);
        map_paths(spec, &mut api);
    }

    log::debug!(
        "normalized API {:?}: {} resource(s), {} type(s)",
        api.name,
        api.resources.len(),
        api.types.len()
    );

    api
}

fn docs_model(docs: &ExternalDocs) -> DocsModel {
    DocsModel {
        description: docs.description.clone().unwrap_or_default(),
        url: docs.url.clone().unwrap_or_default(),
    }
}

fn map_definitions(spec: &SwaggerSpec, api: &mut ApiModel) {
    for name in spec.definitions.keys() {
        let ident = type_name(name);
        api.types.insert(ident.clone(), UserTypeModel::new(ident));
    }
}

fn map_paths(spec: &SwaggerSpec, api: &mut ApiModel) {
    for (path, item) in &spec.paths {
        for (verb, op) in path_operations(item) {
            let resource_name = op
                .tags
                .first()
                .cloned()
                .unwrap_or_else(|| path_prefix(path));

            let resource = api
                .resources
                .entry(resource_name.clone())
                .or_insert_with(|| ResourceModel {
                    name: resource_name.clone(),
                    description: tag_description(spec, &resource_name),
                    ..ResourceModel::default()
                });

            let action_name = op
                .operation_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| route_to_name(verb, path));
            let route = RouteModel::new(verb, dsl_path(path));

            match resource.actions.get_mut(&action_name) {
                Some(existing) => {
                    log::debug!("merging route {verb} {path} into action {action_name:?}");
                    existing.routes.push(route);
                }
                None => {
                    let action = build_action(&action_name, route, op);
                    resource.actions.insert(action_name, action);
                }
            }
        }
    }
}

/// Operations of a path item in a fixed verb order.
fn path_operations(item: &PathItem) -> impl Iterator<Item = (Verb, &Operation)> {
    [
        (Verb::Get, &item.get),
        (Verb::Put, &item.put),
        (Verb::Post, &item.post),
        (Verb::Delete, &item.delete),
        (Verb::Options, &item.options),
        (Verb::Head, &item.head),
        (Verb::Patch, &item.patch),
    ]
    .into_iter()
    .filter_map(|(verb, op)| op.as_ref().map(|op| (verb, op)))
}

fn tag_description(spec: &SwaggerSpec, name: &str) -> String {
    spec.tags
        .iter()
        .find(|tag| tag.name == name)
        .and_then(|tag| tag.description.clone())
        .unwrap_or_default()
}

fn build_action(name: &str, route: RouteModel, op: &Operation) -> ActionModel {
    let description = op
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| op.summary.clone())
        .unwrap_or_default();

    let payload = op.parameters.iter().find_map(|param| match param {
        ParameterOrRef::Parameter(p) if p.location == ParameterLocation::Body => p
            .schema
            .as_ref()
            .and_then(|s| s.ref_path.as_deref())
            .and_then(ref_type_name)
            .map(UserTypeModel::new),
        _ => None,
    });

    let mut responses = BTreeMap::new();
    for code in op.responses.keys() {
        match response_name(code) {
            Some(response) => {
                responses.insert(response.to_string(), ResponseModel::new(response));
            }
            None => {
                log::warn!("skipping response {code:?} of action {name:?}: no goa response name")
            }
        }
    }

    ActionModel {
        name: name.to_string(),
        description,
        docs: op.external_docs.as_ref().map(docs_model),
        schemes: op.schemes.clone(),
        routes: vec![route],
        payload,
        responses,
    }
}
