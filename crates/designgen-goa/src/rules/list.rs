//! Rules emitting a list of values: inline for one value, block form for more.

use designgen_core::model::CorsModel;

use crate::quote::go_quote;

use super::{Schemed, block_call, list_call};

pub fn expose(cors: &CorsModel) -> String {
    list_call("Expose", &cors.exposed)
}

/// Allowed headers always use the block form.
pub fn headers(cors: &CorsModel) -> String {
    if cors.headers.is_empty() {
        return String::new();
    }
    block_call("Headers", cors.headers.iter().map(|h| go_quote(h)))
}

pub fn methods(cors: &CorsModel) -> String {
    list_call("Methods", &cors.methods)
}

pub fn scheme(node: &impl Schemed) -> String {
    list_call("Scheme", node.schemes())
}
