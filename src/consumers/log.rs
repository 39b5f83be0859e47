//! # LogWriter: simple event printer
//!
//! A minimal consumer that prints incoming [`Event`]s to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [next] sub="ticks" value=1
//! [next] sub="ticks" value=2
//! [error] sub="ticks" err="connection refused"
//! [completed] sub="ticks"
//! ```

use std::borrow::Cow;
use std::fmt::Debug;

use crate::consumers::Consumer;
use crate::error::Outcome;
use crate::events::Event;

/// Event writer consumer.
#[derive(Debug, Clone)]
pub struct LogWriter {
    label: Cow<'static, str>,
}

impl LogWriter {
    /// Construct a new [`LogWriter`] tagging every line with `label`.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new("subscription")
    }
}

impl<T: Debug> Consumer<T> for LogWriter {
    fn on(&self, e: Event<T>) -> Outcome {
        match e {
            Event::Next(value) => {
                println!("[next] sub={:?} value={:?}", self.label, value);
            }
            Event::Completed => {
                println!("[completed] sub={:?}", self.label);
            }
            Event::Error(err) => {
                println!("[error] sub={:?} err={:?}", self.label, err.to_string());
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
