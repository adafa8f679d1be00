#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Core types and collaborator contracts for the application gateway
//! ingress controller's reconciliation loop.

mod decision;
mod event;
mod gateway;
mod index;
mod resource_id;

pub use self::{
    decision::Decision,
    event::Event,
    gateway::{ConfigCache, FetchGatewayConfig, GatewayConfig},
    index::ReferenceIndex,
    resource_id::{InvalidResourceId, ResourceId},
};
