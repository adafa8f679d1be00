#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub use k8s_openapi::api::{
    self,
    core::v1::{Endpoints, Pod},
    networking::v1::Ingress,
};
pub use kube::core::{ApiResource, DynamicObject, GroupVersionKind, ObjectMeta, ResourceExt};
