//! Emission rules.
//!
//! Each rule is a pure function from one model node to a fragment of design
//! source. A rule whose bound fields are all at their zero value returns the
//! empty string, so containers can compose children without checking them
//! first. Rules that apply to several node types are bound through the
//! shape traits below.

mod container;
mod list;
mod route;
mod scalar;

pub use container::{
    action, actions, api, consumes, contact, docs, encoding, license, origin, origins, payload,
    produces, resource, resources, response, responses, user_type, user_types,
};
pub use list::{expose, headers, methods, scheme};
pub use route::{route, routing, verb};
pub use scalar::{
    base_path, credentials, description, email, function, host, max_age, name, package,
    terms_of_service, title, url, version,
};

use designgen_core::model::{
    ActionModel, ApiModel, ContactModel, DocsModel, LicenseModel, ResourceModel,
};

use crate::quote::go_quote;

/// A node with a `Description`.
pub trait Described {
    fn description(&self) -> &str;
}

/// A node with a `Name`.
pub trait Named {
    fn name(&self) -> &str;
}

/// A node with a `URL`.
pub trait Linked {
    fn url(&self) -> &str;
}

/// A node with a `BasePath`.
pub trait BasePathed {
    fn base_path(&self) -> &str;
}

/// A node restricted to a list of URL schemes.
pub trait Schemed {
    fn schemes(&self) -> &[String];
}

/// A node with an optional external docs reference.
pub trait Documented {
    fn docs(&self) -> Option<&DocsModel>;
}

macro_rules! str_shape {
    ($shape:ident :: $field:ident for $($ty:ty),+) => {
        $(
            impl $shape for $ty {
                fn $field(&self) -> &str {
                    &self.$field
                }
            }
        )+
    };
}

str_shape!(Described::description for ApiModel, ActionModel, DocsModel, ResourceModel);
str_shape!(Named::name for ApiModel, ContactModel, LicenseModel);
str_shape!(Linked::url for ContactModel, LicenseModel, DocsModel);
str_shape!(BasePathed::base_path for ApiModel, ResourceModel);

impl Schemed for ApiModel {
    fn schemes(&self) -> &[String] {
        &self.schemes
    }
}

impl Schemed for ActionModel {
    fn schemes(&self) -> &[String] {
        &self.schemes
    }
}

impl Documented for ApiModel {
    fn docs(&self) -> Option<&DocsModel> {
        self.docs.as_ref()
    }
}

impl Documented for ActionModel {
    fn docs(&self) -> Option<&DocsModel> {
        self.docs.as_ref()
    }
}

/// `Keyword("value")`, or nothing when the value is empty.
fn string_call(keyword: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{keyword}({})", go_quote(value))
}

/// `Keyword("a")` for one value, the block form for several, nothing for none.
fn list_call(keyword: &str, values: &[String]) -> String {
    match values {
        [] => String::new(),
        [single] => format!("{keyword}({})", go_quote(single)),
        many => block_call(keyword, many.iter().map(|v| go_quote(v))),
    }
}

/// `Keyword(` followed by one element per line, each with a trailing comma.
fn block_call(keyword: &str, elements: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("{keyword}(\n");
    for element in elements {
        out.push_str(&element);
        out.push_str(",\n");
    }
    out.push(')');
    out
}

/// `func() {` with every non-empty child on its own line, then `}`.
fn func_body(children: &[String]) -> String {
    let mut out = String::from("func() {\n");
    for child in children.iter().filter(|c| !c.is_empty()) {
        out.push_str(child);
        out.push('\n');
    }
    out.push('}');
    out
}

/// Join the non-empty fragments with line breaks. Entries of a keyed map are
/// separated by a single line break, not a blank line; the formatter owns
/// vertical spacing.
fn join_lines(fragments: impl IntoIterator<Item = String>) -> String {
    fragments
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
