//! Verb and routing rules.

use designgen_core::model::{ActionModel, RouteModel, Verb};

use crate::quote::go_quote;

use super::block_call;

/// `GET("/path")` under the route's own verb; nothing for an incomplete route.
pub fn route(route: &RouteModel) -> String {
    match route.complete_verb() {
        Some(verb) => format!("{}({})", verb.as_str(), go_quote(&route.path)),
        None => String::new(),
    }
}

/// The route rendered under one specific verb rule. Routes with any other
/// verb render nothing.
pub fn verb(verb: Verb, node: &RouteModel) -> String {
    if node.verb != Some(verb) {
        return String::new();
    }
    route(node)
}

/// `Routing(GET("/"))` for one route, the block form for several.
pub fn routing(action: &ActionModel) -> String {
    let routes: Vec<String> = action
        .routes
        .iter()
        .map(route)
        .filter(|r| !r.is_empty())
        .collect();

    match routes.len() {
        0 => String::new(),
        1 => format!("Routing({})", routes[0]),
        _ => block_call("Routing", routes),
    }
}
