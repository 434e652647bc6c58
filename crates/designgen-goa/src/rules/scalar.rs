//! Rules emitting a single value.

use designgen_core::model::{ApiModel, ContactModel, CorsModel, EncodingModel};

use super::{BasePathed, Described, Linked, Named, string_call};

pub fn base_path(node: &impl BasePathed) -> String {
    string_call("BasePath", node.base_path())
}

pub fn credentials(cors: &CorsModel) -> String {
    if cors.credentials {
        "Credentials()".to_string()
    } else {
        String::new()
    }
}

pub fn description(node: &impl Described) -> String {
    string_call("Description", node.description())
}

pub fn email(contact: &ContactModel) -> String {
    string_call("Email", &contact.email)
}

pub fn function(encoding: &EncodingModel) -> String {
    string_call("Function", &encoding.function)
}

pub fn host(api: &ApiModel) -> String {
    string_call("Host", &api.host)
}

pub fn max_age(cors: &CorsModel) -> String {
    if cors.max_age == 0 {
        return String::new();
    }
    format!("MaxAge({})", cors.max_age)
}

pub fn name(node: &impl Named) -> String {
    string_call("Name", node.name())
}

pub fn package(encoding: &EncodingModel) -> String {
    string_call("Package", &encoding.package_path)
}

pub fn terms_of_service(api: &ApiModel) -> String {
    string_call("TermsOfService", &api.terms_of_service)
}

pub fn title(api: &ApiModel) -> String {
    string_call("Title", &api.title)
}

pub fn url(node: &impl Linked) -> String {
    string_call("URL", node.url())
}

pub fn version(api: &ApiModel) -> String {
    string_call("Version", &api.version)
}
