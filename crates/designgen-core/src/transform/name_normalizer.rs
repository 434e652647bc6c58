use heck::ToPascalCase;

use crate::model::Verb;

/// Exported Go identifier for a definition name: `pet-category` → `PetCategory`.
pub fn type_name(name: &str) -> String {
    let ident = sanitize_identifier(name).to_pascal_case();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("T{ident}")
    } else {
        ident
    }
}

/// Type name targeted by a `#/definitions/<Name>` reference.
pub fn ref_type_name(ref_path: &str) -> Option<String> {
    ref_path
        .strip_prefix("#/definitions/")
        .filter(|name| !name.is_empty())
        .map(type_name)
}

/// Rewrite swagger path templates into goa wildcards: `/pets/{petId}` → `/pets/:petId`.
pub fn dsl_path(path: &str) -> String {
    path.split('/')
        .map(|seg| match seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(param) => format!(":{param}"),
            None => seg.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// First static path segment, used to group routes into resources.
/// e.g. "/pets/{petId}" → "pets", "/store/inventory" → "store"
pub fn path_prefix(path: &str) -> String {
    path.split('/')
        .find(|s| !s.is_empty() && !s.starts_with('{'))
        .unwrap_or("default")
        .to_string()
}

/// Derive a camelCase action name from HTTP verb + path.
///
/// Examples:
/// - `GET /users` → `listUsers`
/// - `POST /users` → `createUsers`
/// - `GET /users/{userId}` → `getUser`
/// - `PUT /users/{userId}` → `updateUser`
/// - `DELETE /users/{userId}` → `deleteUser`
/// - `GET /users/{userId}/messages` → `listUsersMessages`
pub fn route_to_name(verb: Verb, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for seg in path.split('/').filter(|s| !s.is_empty()) {
        if seg.starts_with('{') && seg.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(seg);
            ends_with_param = false;
        }
    }

    let prefix = match verb {
        Verb::Get if ends_with_param => "get",
        Verb::Get => "list",
        Verb::Post => "create",
        Verb::Put => "update",
        Verb::Delete => "delete",
        Verb::Patch => "patch",
        Verb::Options => "options",
        Verb::Head => "head",
        Verb::Trace => "trace",
        Verb::Connect => "connect",
    };

    let mut name = prefix.to_string();
    for (i, part) in resource_parts.iter().enumerate() {
        let is_last = i == resource_parts.len() - 1;
        let word = if is_last && ends_with_param {
            singularize(part)
        } else {
            part.to_string()
        };
        name.push_str(&sanitize_identifier(&word).to_pascal_case());
    }
    name
}

/// goa response name for an HTTP status code. `None` for codes goa has no
/// response template for (and for `default`).
pub fn response_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "200" => "OK",
        "201" => "Created",
        "202" => "Accepted",
        "203" => "NonAuthoritativeInfo",
        "204" => "NoContent",
        "205" => "ResetContent",
        "206" => "PartialContent",
        "300" => "MultipleChoices",
        "301" => "MovedPermanently",
        "302" => "Found",
        "303" => "SeeOther",
        "304" => "NotModified",
        "305" => "UseProxy",
        "307" => "TemporaryRedirect",
        "400" => "BadRequest",
        "401" => "Unauthorized",
        "402" => "PaymentRequired",
        "403" => "Forbidden",
        "404" => "NotFound",
        "405" => "MethodNotAllowed",
        "406" => "NotAcceptable",
        "407" => "ProxyAuthRequired",
        "408" => "RequestTimeout",
        "409" => "Conflict",
        "410" => "Gone",
        "411" => "LengthRequired",
        "412" => "PreconditionFailed",
        "413" => "RequestEntityTooLarge",
        "414" => "RequestURITooLong",
        "415" => "UnsupportedMediaType",
        "416" => "RequestedRangeNotSatisfiable",
        "417" => "ExpectationFailed",
        "418" => "Teapot",
        "422" => "UnprocessableEntity",
        "500" => "InternalServerError",
        "501" => "NotImplemented",
        "502" => "BadGateway",
        "503" => "ServiceUnavailable",
        "504" => "GatewayTimeout",
        "505" => "HTTPVersionNotSupported",
        _ => return None,
    };
    Some(name)
}

/// Naive singularization: strips trailing 's' if present.
fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("ses") || word.ends_with("xes") || word.ends_with("zes") {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

/// Replace runs of non-alphanumeric characters with a single underscore.
fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if prev_was_separator && !result.is_empty() {
                result.push('_');
            }
            result.push(ch);
            prev_was_separator = false;
        } else {
            prev_was_separator = true;
        }
    }

    if result.is_empty() {
        return "unnamed".to_string();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("Pet"), "Pet");
        assert_eq!(type_name("pet-category"), "PetCategory");
        assert_eq!(type_name("api_response"), "ApiResponse");
        assert_eq!(type_name("3dModel"), "T3dModel");
        assert_eq!(type_name("$$$"), "Unnamed");
    }

    #[test]
    fn test_ref_type_name() {
        assert_eq!(ref_type_name("#/definitions/Pet"), Some("Pet".to_string()));
        assert_eq!(
            ref_type_name("#/definitions/order_item"),
            Some("OrderItem".to_string())
        );
        assert_eq!(ref_type_name("#/parameters/limit"), None);
        assert_eq!(ref_type_name("#/definitions/"), None);
    }

    #[test]
    fn test_dsl_path() {
        assert_eq!(dsl_path("/pets"), "/pets");
        assert_eq!(dsl_path("/pets/{petId}"), "/pets/:petId");
        assert_eq!(
            dsl_path("/users/{userId}/messages/{messageId}"),
            "/users/:userId/messages/:messageId"
        );
        assert_eq!(dsl_path("/"), "/");
    }

    #[test]
    fn test_path_prefix() {
        assert_eq!(path_prefix("/pets"), "pets");
        assert_eq!(path_prefix("/pets/{petId}"), "pets");
        assert_eq!(path_prefix("/store/inventory"), "store");
        assert_eq!(path_prefix("/{tenant}/users"), "users");
        assert_eq!(path_prefix("/"), "default");
    }

    #[test]
    fn test_route_to_name_list() {
        assert_eq!(route_to_name(Verb::Get, "/users"), "listUsers");
    }

    #[test]
    fn test_route_to_name_create() {
        assert_eq!(route_to_name(Verb::Post, "/users"), "createUsers");
    }

    #[test]
    fn test_route_to_name_get_single() {
        assert_eq!(route_to_name(Verb::Get, "/users/{userId}"), "getUser");
    }

    #[test]
    fn test_route_to_name_update() {
        assert_eq!(route_to_name(Verb::Put, "/users/{userId}"), "updateUser");
    }

    #[test]
    fn test_route_to_name_delete() {
        assert_eq!(route_to_name(Verb::Delete, "/users/{userId}"), "deleteUser");
    }

    #[test]
    fn test_route_to_name_nested_get() {
        assert_eq!(
            route_to_name(Verb::Get, "/users/{userId}/messages"),
            "listUsersMessages"
        );
    }

    #[test]
    fn test_route_to_name_dashed_segment() {
        assert_eq!(
            route_to_name(Verb::Get, "/store/order-items/{id}"),
            "getStoreOrderItem"
        );
    }

    #[test]
    fn test_route_to_name_root() {
        assert_eq!(route_to_name(Verb::Get, "/"), "list");
    }

    #[test]
    fn test_response_name() {
        assert_eq!(response_name("200"), Some("OK"));
        assert_eq!(response_name("404"), Some("NotFound"));
        assert_eq!(response_name("default"), None);
        assert_eq!(response_name("299"), None);
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("pets"), "pet");
        assert_eq!(singularize("address"), "address");
    }
}
