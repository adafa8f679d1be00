use appgw_ingress_controller_core::{
    ConfigCache, Decision, Event, FetchGatewayConfig, ReferenceIndex, ResourceId,
};
use appgw_ingress_controller_k8s_api::{self as k8s, ResourceExt};
use tracing::{debug, error, instrument, trace};

/// Decides whether a change notification warrants running the reconciliation
/// pipeline.
///
/// The filter holds no mutable state. Resource events are decided entirely
/// from the reference index; only periodic ticks read the gateway, so a
/// failing management API cannot stall resource-driven reconciliation.
pub struct AdmissionFilter<I, G, C> {
    index: I,
    gateway: G,
    cache: C,
    ignored_endpoints: ResourceId,
}

/// The AAD pod identity Endpoints, present in every cluster running managed
/// identity. Its churn says nothing about ingress state.
pub fn default_ignored_endpoints() -> ResourceId {
    ResourceId::new("default", "aad-pod-identity-mic")
}

// === impl AdmissionFilter ===

impl<I, G, C> AdmissionFilter<I, G, C>
where
    I: ReferenceIndex,
    G: FetchGatewayConfig,
    C: ConfigCache,
{
    pub fn new(index: I, gateway: G, cache: C) -> Self {
        Self {
            index,
            gateway,
            cache,
            ignored_endpoints: default_ignored_endpoints(),
        }
    }

    /// Replaces the Endpoints identity that is dropped without consulting the
    /// reference index.
    pub fn with_ignored_endpoints(mut self, ignored_endpoints: ResourceId) -> Self {
        self.ignored_endpoints = ignored_endpoints;
        self
    }

    /// Classifies an event as admitted or skipped.
    ///
    /// Never fails: a gateway read error is converted into a skip carrying
    /// the error text, since reconciling against state that could not be
    /// fetched must not happen.
    #[instrument(skip_all, fields(event = %event.kind()))]
    pub async fn decide(&self, event: &Event) -> Decision {
        match event {
            Event::Endpoints(endpoints) => self.decide_endpoints(endpoints),
            Event::Pod(pod) => self.decide_pod(pod),
            Event::Tick => self.decide_tick().await,
            Event::Other(_) => Decision::ADMIT,
        }
    }

    fn decide_endpoints(&self, endpoints: &k8s::Endpoints) -> Decision {
        let namespace = endpoints.namespace().unwrap_or_default();
        let name = endpoints.name_any();
        if self.ignored_endpoints.matches(&namespace, &name) {
            return Decision::IGNORE;
        }

        let referenced = self.index.is_endpoints_referenced(endpoints);
        if referenced {
            trace!(%namespace, %name, "Endpoint event detected");
        } else {
            trace!(%namespace, %name, "Endpoint event skipped");
        }

        // The reason is recorded for both outcomes; the dispatcher surfaces
        // it only when the event is dropped.
        Decision::with_reason(
            referenced,
            format!("endpoint {namespace}/{name} is not used by any Ingress"),
        )
    }

    fn decide_pod(&self, pod: &k8s::Pod) -> Decision {
        let namespace = pod.namespace().unwrap_or_default();
        let name = pod.name_any();
        trace!(%namespace, %name, "Pod event detected");

        Decision::with_reason(
            self.index.is_pod_referenced(pod),
            format!("pod {namespace}/{name} is not used by any Ingress"),
        )
    }

    async fn decide_tick(&self) -> Decision {
        let current = match self.gateway.fetch_gateway_config().await {
            Ok(config) => config,
            Err(error) => {
                error!(%error, "Failed to fetch gateway config");
                return Decision::skip(error.to_string());
            }
        };

        if self
            .cache
            .last_applied()
            .is_some_and(|cached| *cached == current)
        {
            trace!("Gateway state unchanged");
            return Decision::skip(
                "Reconciler NoOp: current gateway state == cached gateway state",
            );
        }

        debug!("Triggered by reconciler event");
        Decision::ADMIT
    }
}
