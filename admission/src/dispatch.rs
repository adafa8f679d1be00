use crate::{metrics::DispatchMetrics, AdmissionFilter};
use appgw_ingress_controller_core::{ConfigCache, Event, FetchGatewayConfig, ReferenceIndex};
use std::time::Duration;
use tokio::{sync::mpsc, time};
use tracing::{debug, trace};

/// Drains an event channel through an [`AdmissionFilter`], forwarding
/// admitted events into the reconcile queue and dropping the rest.
pub struct Dispatcher<I, G, C> {
    filter: AdmissionFilter<I, G, C>,
    metrics: DispatchMetrics,
    events: mpsc::Receiver<Event>,
    reconcile: mpsc::Sender<Event>,
}

// === impl Dispatcher ===

impl<I, G, C> Dispatcher<I, G, C>
where
    I: ReferenceIndex,
    G: FetchGatewayConfig,
    C: ConfigCache,
{
    pub fn new(
        filter: AdmissionFilter<I, G, C>,
        metrics: DispatchMetrics,
        events: mpsc::Receiver<Event>,
        reconcile: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            filter,
            metrics,
            events,
            reconcile,
        }
    }

    /// Processes events until the event channel closes or the reconcile
    /// queue's receiver is dropped.
    ///
    /// Admitted events are forwarded in order; a full reconcile queue
    /// backpressures the loop rather than dropping events.
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            let decision = self.filter.decide(&event).await;
            self.metrics.record(&event, &decision);

            if !decision.admit {
                match &decision.reason {
                    Some(reason) => debug!(event = %event.kind(), %reason, "Skipping event"),
                    None => trace!(event = %event.kind(), "Ignoring event"),
                }
                continue;
            }

            if self.reconcile.send(event).await.is_err() {
                debug!("Reconcile queue closed");
                return;
            }
        }
    }
}

/// Emits [`Event::Tick`] every `period` until the channel closes.
///
/// The first tick fires one period after the call. Ticks that fall due while
/// the channel is full are delayed rather than delivered in a burst.
pub async fn ticks(period: Duration, events: mpsc::Sender<Event>) {
    let mut interval = time::interval_at(time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if events.send(Event::Tick).await.is_err() {
            return;
        }
    }
}
