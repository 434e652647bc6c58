use std::collections::BTreeMap;

use super::action::{ResourceModel, UserTypeModel};

/// The root of the canonical model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiModel {
    pub name: String,
    pub title: String,
    pub description: String,
    pub version: String,
    pub terms_of_service: String,
    pub host: String,
    pub schemes: Vec<String>,
    pub base_path: String,
    pub contact: Option<ContactModel>,
    pub license: Option<LicenseModel>,
    pub docs: Option<DocsModel>,
    pub origins: BTreeMap<String, CorsModel>,
    pub consumes: Vec<EncodingModel>,
    pub produces: Vec<EncodingModel>,
    pub types: BTreeMap<String, UserTypeModel>,
    pub resources: BTreeMap<String, ResourceModel>,
}

impl ApiModel {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Contact information for the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactModel {
    pub name: String,
    pub email: String,
    pub url: String,
}

impl ContactModel {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.url.is_empty()
    }
}

/// License of the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseModel {
    pub name: String,
    pub url: String,
}

impl LicenseModel {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty()
    }
}

/// External documentation reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsModel {
    pub description: String,
    pub url: String,
}

impl DocsModel {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.url.is_empty()
    }
}

/// A CORS policy for one origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsModel {
    pub origin: String,
    pub headers: Vec<String>,
    pub methods: Vec<String>,
    pub exposed: Vec<String>,
    pub max_age: u32,
    pub credentials: bool,
    /// Whether `origin` is a regular expression. Never emitted.
    pub regexp: bool,
}

impl CorsModel {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A set of MIME types handled by one encoder or decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingModel {
    pub mime_types: Vec<String>,
    pub function: String,
    pub package_path: String,
    /// `true` for "produces" encodings, `false` for "consumes" ones.
    pub encoder: bool,
}

impl EncodingModel {
    /// Whether the encoding names a custom function or package.
    pub fn has_custom_codec(&self) -> bool {
        !self.function.is_empty() || !self.package_path.is_empty()
    }
}
