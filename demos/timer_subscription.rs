//! # Example: Timer Subscription
//!
//! A tokio interval produces ticks into an [`EventForwarder`]; the consumer is a
//! channel read by another task. The subscriber cancels early after a few
//! ticks, which cancels the timer's token exactly once.
//!
//! ```text
//! ticker task ── on_next(n) ──► EventForwarder ──► ChannelConsumer ──► reader task
//!      ▲                                                                  │
//!      └──── CancellationToken ◄── SubscriptionState::dispose() ◄─────────┘ (after 3 ticks)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=rxsink=debug cargo run --example timer_subscription
//! ```

use std::sync::Arc;
use std::time::Duration;

use rxsink::{ChannelConsumer, Event, SubscriptionState};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let timer_token = CancellationToken::new();
    let (consumer, mut rx) = ChannelConsumer::<u64>::pair(16);

    let state = SubscriptionState::builder(consumer.into_ref())
        .with_label("ticker")
        .with_cancel(Arc::new(timer_token.clone()))
        .build();

    let fwd = state.forwarder();
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(50));
        let mut n = 0u64;
        loop {
            tokio::select! {
                _ = timer_token.cancelled() => break,
                _ = interval.tick() => {
                    n += 1;
                    if let Err(err) = fwd.on_next(n) {
                        println!("[ticker] delivery failed: {err}");
                    }
                }
            }
        }
        println!("[ticker] timer released after {n} ticks");
    });

    let subscriber = state.as_cancel();
    while let Some(ev) = rx.recv().await {
        match ev {
            Event::Next(n) => {
                println!("[reader] tick {n}");
                if n == 3 {
                    subscriber.cancel()?;
                }
            }
            Event::Completed | Event::Error(_) => break,
        }
        if state.is_disposed() {
            break;
        }
    }

    ticker.await?;
    println!("[main] disposed={}", state.is_disposed());
    Ok(())
}
