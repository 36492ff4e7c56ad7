//! Cancellable delayed events.
//!
//! Each scheduled task sleeps in its own tokio task and then sends a
//! [`RuntimeEvent`] back to the UI loop over an `mpsc` channel. The task owns
//! no application state, so the loop remains the single writer. A task is
//! aborted when its [`TaskHandle`] is dropped, which ties its lifetime to the
//! view that requested it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// ── Public types ──────────────────────────────────────────────────────────────

/// Identifies the flow instance a scheduled event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Event delivered to the UI loop once a delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// The simulated payment finished processing.
    PaymentSettled(Ticket),
    /// The simulated contact message was delivered.
    ContactDelivered(Ticket),
    /// The contact success banner should be dismissed.
    ContactReset(Ticket),
}

impl RuntimeEvent {
    pub fn ticket(&self) -> Ticket {
        match *self {
            RuntimeEvent::PaymentSettled(t)
            | RuntimeEvent::ContactDelivered(t)
            | RuntimeEvent::ContactReset(t) => t,
        }
    }
}

/// Delays applied to the simulated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    pub payment: Duration,
    pub contact_delivery: Duration,
    pub contact_reset: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            payment: Duration::from_millis(2000),
            contact_delivery: Duration::from_millis(1500),
            contact_reset: Duration::from_millis(3000),
        }
    }
}

// ── TaskHandle ────────────────────────────────────────────────────────────────

/// Owner of one scheduled task.
///
/// Dropping the handle aborts the task; an aborted task never sends.
#[derive(Debug)]
pub struct TaskHandle {
    ticket: Ticket,
    handle: JoinHandle<()>,
}

impl TaskHandle {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Whether `event` was produced by this task.
    pub fn owns(&self, event: &RuntimeEvent) -> bool {
        event.ticket() == self.ticket
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Spawns delayed events and hands out tickets.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<RuntimeEvent>,
    timings: FlowTimings,
    next_ticket: u64,
}

impl Scheduler {
    /// Create a scheduler and the receiving end the UI loop polls.
    pub fn new(timings: FlowTimings) -> (Self, mpsc::UnboundedReceiver<RuntimeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                timings,
                next_ticket: 1,
            },
            rx,
        )
    }

    pub fn timings(&self) -> FlowTimings {
        self.timings
    }

    /// Send the event built by `make` after `delay`.
    pub fn schedule<F>(&mut self, delay: Duration, make: F) -> TaskHandle
    where
        F: FnOnce(Ticket) -> RuntimeEvent,
    {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        let event = make(ticket);
        let tx = self.tx.clone();

        tracing::debug!(?event, delay_ms = delay.as_millis() as u64, "scheduling event");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(event).is_err() {
                tracing::debug!(?event, "event receiver dropped; discarding");
            }
        });

        TaskHandle { ticket, handle }
    }

    /// Schedule [`RuntimeEvent::PaymentSettled`] after the payment delay.
    pub fn settle_payment(&mut self) -> TaskHandle {
        self.schedule(self.timings.payment, RuntimeEvent::PaymentSettled)
    }

    /// Schedule [`RuntimeEvent::ContactDelivered`] after the delivery delay.
    pub fn deliver_contact(&mut self) -> TaskHandle {
        self.schedule(self.timings.contact_delivery, RuntimeEvent::ContactDelivered)
    }

    /// Schedule [`RuntimeEvent::ContactReset`] after the reset delay.
    pub fn reset_contact(&mut self) -> TaskHandle {
        self.schedule(self.timings.contact_reset, RuntimeEvent::ContactReset)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
