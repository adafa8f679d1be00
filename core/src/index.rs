use appgw_ingress_controller_k8s_api as k8s;

/// Read-only queries against the controller's Ingress reference index.
///
/// A resource is referenced when some Ingress the controller manages resolves
/// to it, e.g. an Endpoints object backing a Service named by an Ingress
/// rule. Implementations are expected to answer from memory without blocking.
pub trait ReferenceIndex {
    fn is_endpoints_referenced(&self, endpoints: &k8s::Endpoints) -> bool;

    fn is_pod_referenced(&self, pod: &k8s::Pod) -> bool;
}
