use appgw_ingress_controller_core::{Decision, Event};
use prometheus_client::{
    encoding::EncodeLabelSet,
    metrics::{counter::Counter, family::Family},
    registry::Registry,
};

/// Counters for admission decisions, labeled by event kind.
#[derive(Clone, Debug)]
pub struct DispatchMetrics {
    admitted: Family<EventLabels, Counter>,
    skipped: Family<EventLabels, Counter>,
}

#[derive(Clone, Hash, PartialEq, Eq, EncodeLabelSet, Debug)]
struct EventLabels {
    event: &'static str,
}

// === impl DispatchMetrics ===

impl DispatchMetrics {
    pub fn register(reg: &mut Registry) -> Self {
        let admitted = Family::<EventLabels, Counter>::default();
        reg.register(
            "admitted",
            "Total number of events admitted into the reconcile queue",
            admitted.clone(),
        );

        let skipped = Family::<EventLabels, Counter>::default();
        reg.register(
            "skipped",
            "Total number of events dropped by the admission filter",
            skipped.clone(),
        );

        Self { admitted, skipped }
    }

    pub(crate) fn record(&self, event: &Event, decision: &Decision) {
        let labels = EventLabels {
            event: event.kind(),
        };
        if decision.admit {
            self.admitted.get_or_create(&labels).inc();
        } else {
            self.skipped.get_or_create(&labels).inc();
        }
    }
}
