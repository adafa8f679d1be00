//! Event admission for the application gateway ingress controller.
//!
//! Reconciling the gateway is expensive: it fetches the deployed
//! configuration from the management API, recomputes the desired
//! configuration from cluster state, and pushes a diff. Most change
//! notifications cannot alter the outcome, so they are filtered out before
//! the pipeline runs:
//!
//! - `Endpoints` and `Pod` mutations are admitted only when the resource is
//!   referenced by some Ingress the controller manages.
//! - Periodic resync ticks are admitted only when the deployed configuration
//!   differs from the last applied snapshot.
//! - Everything else the controller watches is admitted as-is.
//!
//! ```text
//! [ watches ] --\
//!                >--> [ Dispatcher / AdmissionFilter ] --admitted--> [ reconcile queue ]
//! [ ticks ] ----/
//! ```
//!
//! The filter only decides; draining the event channel and forwarding
//! admitted events is the dispatcher's job, and the collaborators it queries
//! (reference index, gateway accessor, config cache) are supplied by the
//! embedding controller.

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod dispatch;
mod filter;
mod metrics;


pub use self::{
    dispatch::{ticks, Dispatcher},
    filter::{default_ignored_endpoints, AdmissionFilter},
    metrics::DispatchMetrics,
};
