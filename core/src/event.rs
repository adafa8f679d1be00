use appgw_ingress_controller_k8s_api as k8s;

/// A change notification delivered to the admission filter.
///
/// Resource mutations the filter inspects by type are carried as their
/// concrete payloads; everything else the controller watches (Ingresses,
/// Services, Secrets, ...) flows through as a dynamic object so the
/// reconciliation pipeline still receives it whole. `Tick` is the periodic
/// resync timer and carries no payload.
#[derive(Clone, Debug)]
pub enum Event {
    Endpoints(k8s::Endpoints),
    Pod(k8s::Pod),
    Tick,
    Other(k8s::DynamicObject),
}

// === impl Event ===

impl Event {
    /// A short static name for log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Endpoints(_) => "endpoints",
            Self::Pod(_) => "pod",
            Self::Tick => "tick",
            Self::Other(_) => "other",
        }
    }
}
