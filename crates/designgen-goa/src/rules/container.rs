//! Rules that open a call with a `func() {` body or iterate a keyed map.
//!
//! Children are emitted in a fixed order that mirrors the DSL reference, and
//! keyed maps are walked in ascending key order.

use designgen_core::model::{
    ActionModel, ApiModel, CorsModel, EncodingModel, ResourceModel, ResponseModel,
    UserTypeModel,
};

use crate::quote::go_quote;

use super::{
    Documented, base_path, block_call, credentials, description, email, expose, func_body,
    function, headers, host, join_lines, max_age, methods, name, package, routing, scheme,
    terms_of_service, title, url, version,
};

/// The `var _ = API(...)` declaration.
pub fn api(api: &ApiModel) -> String {
    if api.is_empty() {
        return String::new();
    }
    let body = func_body(&[
        title(api),
        description(api),
        version(api),
        terms_of_service(api),
        contact(api),
        license(api),
        docs(api),
        host(api),
        scheme(api),
        base_path(api),
        origins(api),
        consumes(api),
        produces(api),
    ]);
    format!("var _ = API({}, {body})", go_quote(&api.name))
}

pub fn contact(api: &ApiModel) -> String {
    match api.contact {
        Some(ref contact) if !contact.is_empty() => {
            let body = func_body(&[name(contact), email(contact), url(contact)]);
            format!("Contact({body})")
        }
        _ => String::new(),
    }
}

pub fn license(api: &ApiModel) -> String {
    match api.license {
        Some(ref license) if !license.is_empty() => {
            format!("License({})", func_body(&[name(license), url(license)]))
        }
        _ => String::new(),
    }
}

pub fn docs(node: &impl Documented) -> String {
    match node.docs() {
        Some(docs) if !docs.is_empty() => {
            format!("Docs({})", func_body(&[description(docs), url(docs)]))
        }
        _ => String::new(),
    }
}

/// One `Origin("...", func() {...})` policy.
pub fn origin(cors: &CorsModel) -> String {
    if cors.is_empty() {
        return String::new();
    }
    let body = func_body(&[
        headers(cors),
        methods(cors),
        expose(cors),
        max_age(cors),
        credentials(cors),
    ]);
    format!("Origin({}, {body})", go_quote(&cors.origin))
}

pub fn origins(api: &ApiModel) -> String {
    join_lines(api.origins.values().map(origin))
}

/// `Consumes(...)` or `Produces(...)` depending on the encoding's role.
///
/// An encoding without MIME types renders nothing, even when it names a
/// function or package.
pub fn encoding(encoding: &EncodingModel) -> String {
    let keyword = if encoding.encoder { "Produces" } else { "Consumes" };
    let mime_types = &encoding.mime_types;
    if mime_types.is_empty() {
        return String::new();
    }
    if mime_types.len() == 1 && !encoding.has_custom_codec() {
        return format!("{keyword}({})", go_quote(&mime_types[0]));
    }

    let mut elements: Vec<String> = mime_types.iter().map(|m| go_quote(m)).collect();
    if encoding.has_custom_codec() {
        elements.push(func_body(&[function(encoding), package(encoding)]));
    }
    block_call(keyword, elements)
}

pub fn consumes(api: &ApiModel) -> String {
    join_lines(api.consumes.iter().map(encoding))
}

pub fn produces(api: &ApiModel) -> String {
    join_lines(api.produces.iter().map(encoding))
}

/// One `Action("name", func() {...})`.
pub fn action(action: &ActionModel) -> String {
    if action.is_empty() {
        return String::new();
    }
    let body = func_body(&[
        description(action),
        docs(action),
        scheme(action),
        routing(action),
        payload(action),
        responses(action),
    ]);
    format!("Action({}, {body})", go_quote(&action.name))
}

pub fn actions(resource: &ResourceModel) -> String {
    join_lines(resource.actions.values().map(action))
}

/// `Payload(TypeName)`, referencing the type by identifier.
pub fn payload(action: &ActionModel) -> String {
    match action.payload {
        Some(ref payload) if !payload.type_name.is_empty() => {
            format!("Payload({})", payload.type_name)
        }
        _ => String::new(),
    }
}

pub fn response(response: &ResponseModel) -> String {
    if response.name.is_empty() {
        return String::new();
    }
    format!("Response({})", response.name)
}

pub fn responses(action: &ActionModel) -> String {
    join_lines(action.responses.values().map(response))
}

/// The `var _ = Resource(...)` declaration.
pub fn resource(resource: &ResourceModel) -> String {
    if resource.is_empty() {
        return String::new();
    }
    let body = func_body(&[
        description(resource),
        base_path(resource),
        actions(resource),
    ]);
    format!("var _ = Resource({}, {body})", go_quote(&resource.name))
}

pub fn resources(api: &ApiModel) -> String {
    join_lines(api.resources.values().map(resource))
}

/// `var Name = Type("Name", func() {})`. Attributes are not modelled.
pub fn user_type(user_type: &UserTypeModel) -> String {
    if user_type.type_name.is_empty() {
        return String::new();
    }
    format!(
        "var {name} = Type({quoted}, func() {{\n}})",
        name = user_type.type_name,
        quoted = go_quote(&user_type.type_name)
    )
}

pub fn user_types(api: &ApiModel) -> String {
    join_lines(api.types.values().map(user_type))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use designgen_core::model::{ContactModel, DocsModel, LicenseModel, RouteModel, Verb};

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn json_encoding(encoder: bool) -> EncodingModel {
        EncodingModel {
            mime_types: strings(&["application/json"]),
            encoder,
            ..EncodingModel::default()
        }
    }

    fn full_cors() -> CorsModel {
        CorsModel {
            origin: "*".to_string(),
            headers: strings(&["Authorization", "Link"]),
            methods: strings(&["GET"]),
            exposed: strings(&["Authorization"]),
            max_age: 600,
            credentials: true,
            regexp: false,
        }
    }

    fn full_docs() -> DocsModel {
        DocsModel {
            description: "Description of docs".to_string(),
            url: "http://localhost/docs".to_string(),
        }
    }

    #[test]
    fn test_api_full() {
        let model = ApiModel {
            name: "Name of API".to_string(),
            title: "Title of API".to_string(),
            description: "Description of API".to_string(),
            version: "1.0.0".to_string(),
            terms_of_service: "terms of service".to_string(),
            contact: Some(ContactModel {
                name: "Name of contact".to_string(),
                email: "foo@bar.com".to_string(),
                url: "http://localhost/contact".to_string(),
            }),
            license: Some(LicenseModel {
                name: "Name of license".to_string(),
                url: "http://localhost/license".to_string(),
            }),
            docs: Some(full_docs()),
            host: "http://localhost/".to_string(),
            schemes: strings(&["http", "https"]),
            base_path: "/v1".to_string(),
            origins: BTreeMap::from([("*".to_string(), full_cors())]),
            consumes: vec![json_encoding(false)],
            produces: vec![json_encoding(true)],
            ..ApiModel::default()
        };
        let expected = r#"var _ = API("Name of API", func() {
Title("Title of API")
Description("Description of API")
Version("1.0.0")
TermsOfService("terms of service")
Contact(func() {
Name("Name of contact")
Email("foo@bar.com")
URL("http://localhost/contact")
})
License(func() {
Name("Name of license")
URL("http://localhost/license")
})
Docs(func() {
Description("Description of docs")
URL("http://localhost/docs")
})
Host("http://localhost/")
Scheme(
"http",
"https",
)
BasePath("/v1")
Origin("*", func() {
Headers(
"Authorization",
"Link",
)
Methods("GET")
Expose("Authorization")
MaxAge(600)
Credentials()
})
Consumes("application/json")
Produces("application/json")
})"#;
        assert_eq!(api(&model), expected);
    }

    #[test]
    fn test_api_fixed_child_order() {
        let model = ApiModel {
            host: "api.example.com".to_string(),
            description: "Description".to_string(),
            title: "Title".to_string(),
            ..ApiModel::default()
        };
        let expected = r#"var _ = API("", func() {
Title("Title")
Description("Description")
Host("api.example.com")
})"#;
        assert_eq!(api(&model), expected);
    }

    #[test]
    fn test_api_empty() {
        assert_eq!(api(&ApiModel::default()), "");
    }

    #[test]
    fn test_api_with_empty_encodings_only() {
        let model = ApiModel {
            consumes: vec![EncodingModel::default()],
            produces: vec![EncodingModel {
                encoder: true,
                ..EncodingModel::default()
            }],
            ..ApiModel::default()
        };
        assert_eq!(api(&model), "var _ = API(\"\", func() {\n})");
    }

    #[test]
    fn test_contact() {
        let with = |contact: ContactModel| ApiModel {
            contact: Some(contact),
            ..ApiModel::default()
        };

        let full = with(ContactModel {
            name: "Name of contact".to_string(),
            email: "foo@bar.com".to_string(),
            url: "http://localhost/contact".to_string(),
        });
        assert_eq!(
            contact(&full),
            "Contact(func() {\nName(\"Name of contact\")\nEmail(\"foo@bar.com\")\nURL(\"http://localhost/contact\")\n})"
        );

        let email_only = with(ContactModel {
            email: "foo@bar.com".to_string(),
            ..ContactModel::default()
        });
        assert_eq!(contact(&email_only), "Contact(func() {\nEmail(\"foo@bar.com\")\n})");

        assert_eq!(contact(&with(ContactModel::default())), "");
        assert_eq!(contact(&ApiModel::default()), "");
    }

    #[test]
    fn test_license() {
        let model = ApiModel {
            license: Some(LicenseModel {
                url: "http://localhost/license".to_string(),
                ..LicenseModel::default()
            }),
            ..ApiModel::default()
        };
        assert_eq!(
            license(&model),
            "License(func() {\nURL(\"http://localhost/license\")\n})"
        );
        assert_eq!(license(&ApiModel::default()), "");
    }

    #[test]
    fn test_docs_on_api_and_action() {
        let model = ApiModel {
            docs: Some(full_docs()),
            ..ApiModel::default()
        };
        let expected = "Docs(func() {\nDescription(\"Description of docs\")\nURL(\"http://localhost/docs\")\n})";
        assert_eq!(docs(&model), expected);

        let action_model = ActionModel {
            docs: Some(full_docs()),
            ..ActionModel::default()
        };
        assert_eq!(docs(&action_model), expected);

        let empty_docs = ApiModel {
            docs: Some(DocsModel::default()),
            ..ApiModel::default()
        };
        assert_eq!(docs(&empty_docs), "");
        assert_eq!(docs(&ApiModel::default()), "");
    }

    #[test]
    fn test_origin_single() {
        let model = ApiModel {
            origins: BTreeMap::from([("*".to_string(), full_cors())]),
            ..ApiModel::default()
        };
        let expected = r#"Origin("*", func() {
Headers(
"Authorization",
"Link",
)
Methods("GET")
Expose("Authorization")
MaxAge(600)
Credentials()
})"#;
        assert_eq!(origins(&model), expected);
    }

    #[test]
    fn test_origins_sorted_by_key() {
        let cors = |origin: &str| CorsModel {
            origin: origin.to_string(),
            ..CorsModel::default()
        };
        let model = ApiModel {
            origins: BTreeMap::from([
                ("b".to_string(), cors("http://b.example.com")),
                ("a".to_string(), cors("http://a.example.com")),
            ]),
            ..ApiModel::default()
        };
        let expected = "Origin(\"http://a.example.com\", func() {\n})\nOrigin(\"http://b.example.com\", func() {\n})";
        assert_eq!(origins(&model), expected);
    }

    #[test]
    fn test_origin_empty() {
        assert_eq!(origin(&CorsModel::default()), "");
        assert_eq!(origins(&ApiModel::default()), "");
    }

    #[test]
    fn test_consumes_variants() {
        let model = ApiModel {
            consumes: vec![
                json_encoding(false),
                EncodingModel {
                    mime_types: strings(&["application/json", "application/xml"]),
                    ..EncodingModel::default()
                },
                EncodingModel {
                    function: "newFunc".to_string(),
                    ..json_encoding(false)
                },
                EncodingModel {
                    package_path: "encoding/json".to_string(),
                    ..json_encoding(false)
                },
            ],
            ..ApiModel::default()
        };
        let expected = r#"Consumes("application/json")
Consumes(
"application/json",
"application/xml",
)
Consumes(
"application/json",
func() {
Function("newFunc")
},
)
Consumes(
"application/json",
func() {
Package("encoding/json")
},
)"#;
        assert_eq!(consumes(&model), expected);
        assert_eq!(consumes(&ApiModel::default()), "");
    }

    #[test]
    fn test_produces_variants() {
        let model = ApiModel {
            produces: vec![
                json_encoding(true),
                EncodingModel {
                    mime_types: strings(&["application/json", "application/xml"]),
                    encoder: true,
                    ..EncodingModel::default()
                },
            ],
            ..ApiModel::default()
        };
        let expected = "Produces(\"application/json\")\nProduces(\n\"application/json\",\n\"application/xml\",\n)";
        assert_eq!(produces(&model), expected);
        assert_eq!(produces(&ApiModel::default()), "");
    }

    #[test]
    fn test_encoding_function_and_package() {
        let model = EncodingModel {
            function: "NewEncoder".to_string(),
            package_path: "github.com/goadesign/goa/encoding/json".to_string(),
            ..json_encoding(true)
        };
        let expected = r#"Produces(
"application/json",
func() {
Function("NewEncoder")
Package("github.com/goadesign/goa/encoding/json")
},
)"#;
        assert_eq!(encoding(&model), expected);
    }

    #[test]
    fn test_encoding_without_mime_types_is_elided() {
        assert_eq!(encoding(&EncodingModel::default()), "");
        let custom = EncodingModel {
            function: "newFunc".to_string(),
            ..EncodingModel::default()
        };
        assert_eq!(encoding(&custom), "");
    }

    #[test]
    fn test_action_full() {
        let model = ActionModel {
            name: "show".to_string(),
            description: "Description of action".to_string(),
            docs: Some(full_docs()),
            schemes: strings(&["http"]),
            routes: vec![RouteModel::new(Verb::Get, "/")],
            payload: Some(UserTypeModel::new("FooPayload")),
            responses: BTreeMap::from([
                ("OK".to_string(), ResponseModel::new("OK")),
                ("NotFound".to_string(), ResponseModel::new("NotFound")),
            ]),
        };
        let expected = r#"Action("show", func() {
Description("Description of action")
Docs(func() {
Description("Description of docs")
URL("http://localhost/docs")
})
Scheme("http")
Routing(GET("/"))
Payload(FooPayload)
Response(NotFound)
Response(OK)
})"#;
        assert_eq!(action(&model), expected);
    }

    #[test]
    fn test_action_name_only() {
        let model = ActionModel {
            name: "list".to_string(),
            ..ActionModel::default()
        };
        assert_eq!(action(&model), "Action(\"list\", func() {\n})");
        assert_eq!(action(&ActionModel::default()), "");
    }

    #[test]
    fn test_actions_sorted_by_key() {
        let named = |name: &str| ActionModel {
            name: name.to_string(),
            ..ActionModel::default()
        };
        let model = ResourceModel {
            actions: BTreeMap::from([
                ("show".to_string(), named("show")),
                ("list".to_string(), named("list")),
            ]),
            ..ResourceModel::default()
        };
        assert_eq!(
            actions(&model),
            "Action(\"list\", func() {\n})\nAction(\"show\", func() {\n})"
        );
        assert_eq!(actions(&ResourceModel::default()), "");
    }

    #[test]
    fn test_payload() {
        let model = ActionModel {
            payload: Some(UserTypeModel::new("FooPayload")),
            ..ActionModel::default()
        };
        assert_eq!(payload(&model), "Payload(FooPayload)");
        assert_eq!(payload(&ActionModel::default()), "");
    }

    #[test]
    fn test_responses() {
        let multi = ActionModel {
            responses: BTreeMap::from([
                ("FooMedia".to_string(), ResponseModel::new("FooMedia")),
                ("BarMedia".to_string(), ResponseModel::new("BarMedia")),
            ]),
            ..ActionModel::default()
        };
        assert_eq!(responses(&multi), "Response(BarMedia)\nResponse(FooMedia)");

        let single = ActionModel {
            responses: BTreeMap::from([("FooMedia".to_string(), ResponseModel::new("FooMedia"))]),
            ..ActionModel::default()
        };
        assert_eq!(responses(&single), "Response(FooMedia)");

        assert_eq!(responses(&ActionModel::default()), "");
        assert_eq!(response(&ResponseModel::default()), "");
    }

    #[test]
    fn test_resource() {
        let model = ResourceModel {
            name: "pet".to_string(),
            description: "Everything about your Pets".to_string(),
            base_path: "/pets".to_string(),
            actions: BTreeMap::from([(
                "list".to_string(),
                ActionModel {
                    name: "list".to_string(),
                    routes: vec![RouteModel::new(Verb::Get, "")],
                    ..ActionModel::default()
                },
            )]),
        };
        let expected = r#"var _ = Resource("pet", func() {
Description("Everything about your Pets")
BasePath("/pets")
Action("list", func() {
})
})"#;
        assert_eq!(resource(&model), expected);
        assert_eq!(resource(&ResourceModel::default()), "");
    }

    #[test]
    fn test_resources_sorted_by_key() {
        let named = |name: &str| ResourceModel {
            name: name.to_string(),
            ..ResourceModel::default()
        };
        let model = ApiModel {
            resources: BTreeMap::from([
                ("store".to_string(), named("store")),
                ("pet".to_string(), named("pet")),
            ]),
            ..ApiModel::default()
        };
        assert_eq!(
            resources(&model),
            "var _ = Resource(\"pet\", func() {\n})\nvar _ = Resource(\"store\", func() {\n})"
        );
    }

    #[test]
    fn test_user_types() {
        let multi = ApiModel {
            types: BTreeMap::from([
                ("FooPayload".to_string(), UserTypeModel::new("FooPayload")),
                ("BarPayload".to_string(), UserTypeModel::new("BarPayload")),
            ]),
            ..ApiModel::default()
        };
        let expected = r#"var BarPayload = Type("BarPayload", func() {
})
var FooPayload = Type("FooPayload", func() {
})"#;
        assert_eq!(user_types(&multi), expected);

        assert_eq!(user_type(&UserTypeModel::default()), "");
        assert_eq!(user_types(&ApiModel::default()), "");
    }

    #[test]
    fn test_map_rendering_is_deterministic() {
        let build = || ApiModel {
            types: ["Zebra", "Aardvark", "Mongoose"]
                .iter()
                .map(|n| (n.to_string(), UserTypeModel::new(*n)))
                .collect(),
            ..ApiModel::default()
        };
        let first = user_types(&build());
        assert_eq!(first, user_types(&build()));
        assert!(first.starts_with("var Aardvark"));
        assert!(first.ends_with("var Zebra = Type(\"Zebra\", func() {\n})"));
    }
}
