//! Canonical API model.
//!
//! Every map keyed by a human-assigned name is a [`BTreeMap`](std::collections::BTreeMap),
//! so traversal is always in ascending key order no matter how the source
//! document ordered its entries.

pub mod action;
pub mod api;

pub use action::{ActionModel, ResourceModel, ResponseModel, RouteModel, UserTypeModel, Verb};
pub use api::{ApiModel, ContactModel, CorsModel, DocsModel, EncodingModel, LicenseModel};
