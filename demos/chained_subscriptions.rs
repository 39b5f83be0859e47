//! # Example: Chained Subscriptions
//!
//! Two subscriptions wired the way an operator would wire them: the outer
//! forwarder feeds the inner one. A terminal event reaching the outer
//! subscription releases the source once and is relayed to the inner one,
//! which disposes in turn. Later events are absorbed by both.
//!
//! ```text
//! source ── outer.forwarder() ──► inner.forwarder() ──► LogWriter
//!   ▲              │
//!   └─ FnCancel ◄──┘ (on first dispose of outer)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example chained_subscriptions --features logging
//! ```

use std::sync::Arc;

use rxsink::{ConsumerRef, FnCancel, LogWriter, StreamError, SubscriptionState};

fn main() {
    let sink: ConsumerRef<&'static str> = Arc::new(LogWriter::new("chain"));

    let inner = SubscriptionState::builder(sink).with_label("inner").build();

    let outer = SubscriptionState::builder(Arc::new(inner.forwarder()))
        .with_label("outer")
        .with_cancel(FnCancel::arc(|| {
            println!("[source] released");
            Ok(())
        }))
        .build();

    let source = outer.forwarder();
    let _ = source.on_next("hello");
    let _ = source.on_next("world");
    let _ = source.on_error(StreamError::msg("connection reset"));
    let _ = source.on_next("ignored");

    println!(
        "[main] outer disposed={} inner disposed={}",
        outer.is_disposed(),
        inner.is_disposed()
    );
}
