use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::api::DocsModel;

/// HTTP verb of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Connect,
        Verb::Delete,
        Verb::Get,
        Verb::Head,
        Verb::Options,
        Verb::Patch,
        Verb::Post,
        Verb::Put,
        Verb::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Connect => "CONNECT",
            Verb::Delete => "DELETE",
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
            Verb::Patch => "PATCH",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the nine HTTP verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl fmt::Display for UnknownVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown HTTP verb: {}", self.0)
    }
}

impl std::error::Error for UnknownVerb {}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVerb(s.to_string()))
    }
}

/// A single HTTP route. Contributes nothing unless both verb and path are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteModel {
    pub verb: Option<Verb>,
    pub path: String,
}

impl RouteModel {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb: Some(verb),
            path: path.into(),
        }
    }

    /// The verb, when the route is complete.
    pub fn complete_verb(&self) -> Option<Verb> {
        self.verb.filter(|_| !self.path.is_empty())
    }
}

/// A named user type. Only the name is modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTypeModel {
    pub type_name: String,
}

impl UserTypeModel {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

/// A named response, emitted by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseModel {
    pub name: String,
}

impl ResponseModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One action of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionModel {
    pub name: String,
    pub description: String,
    pub docs: Option<DocsModel>,
    pub schemes: Vec<String>,
    pub routes: Vec<RouteModel>,
    pub payload: Option<UserTypeModel>,
    pub responses: BTreeMap<String, ResponseModel>,
}

impl ActionModel {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A resource grouping actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceModel {
    pub name: String,
    pub description: String,
    pub base_path: String,
    pub actions: BTreeMap<String, ActionModel>,
}

impl ResourceModel {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
