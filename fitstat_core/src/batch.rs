//! Batch driver for sequences of sensor packages.
//!
//! Readings are processed strictly in input order. Each record is independent:
//! a failure is recorded against its index and, under
//! [`ErrorPolicy::Continue`], the next record starts from scratch.

use crate::dispatch::summarize;
use crate::summary::SummaryMessage;
use crate::{RawReading, Result};
use serde::{Deserialize, Serialize};

/// What the driver does after a record fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Report the failure and keep going
    #[default]
    Continue,
    /// Stop at the first failure
    Abort,
}

/// Outcome of one record in a batch
#[derive(Debug)]
pub struct RecordOutcome {
    /// Zero-based position in the input
    pub index: usize,
    pub workout_code: String,
    pub result: Result<SummaryMessage>,
}

/// Ordered outcomes of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Summaries of the records that succeeded, in input order
    pub fn summaries(&self) -> impl Iterator<Item = &SummaryMessage> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }
}

/// Process every reading under the given error policy
pub fn process_batch(readings: &[RawReading], policy: ErrorPolicy) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, reading) in readings.iter().enumerate() {
        let result = summarize(reading);
        let failed = result.is_err();

        if let Err(ref e) = result {
            tracing::warn!(
                "Reading #{} ({}) failed: {}",
                index + 1,
                reading.workout_code,
                e
            );
        }

        report.outcomes.push(RecordOutcome {
            index,
            workout_code: reading.workout_code.clone(),
            result,
        });

        if failed && policy == ErrorPolicy::Abort {
            tracing::info!("Aborting batch after reading #{}", index + 1);
            break;
        }
    }

    tracing::debug!(
        "Processed {} of {} readings ({} failed)",
        report.outcomes.len(),
        readings.len(),
        report.failed()
    );
    report
}

/// The demonstration packages processed when no input is given
pub fn default_readings() -> Vec<RawReading> {
    vec![
        RawReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        RawReading::new("RUN", vec![15000.0, 1.0, 75.0]),
        RawReading::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
