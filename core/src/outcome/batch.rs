use super::{Failure, Outcome, divide};
use crate::{String, Vec};

/// Every outcome of applying a fallible operation across a collection.
///
/// Nothing short-circuits: failures are collected next to successes, in
/// input order. Callers that need fail-fast semantics opt in with
/// [`Batch::into_result`], which reports all failures at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    outcomes: Vec<Outcome<T>>,
}

impl<T> Batch<T> {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: Outcome<T>) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Outcome<T>] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.outcomes.iter().filter_map(Outcome::as_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.outcomes.iter().filter_map(Outcome::as_failure)
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(Outcome::is_failure)
    }

    /// All success values, or every failure aggregated into one error.
    pub fn into_result(self) -> Result<Vec<T>, AggregateFailure> {
        let total = self.outcomes.len();
        let mut values = Vec::with_capacity(total);
        let mut failures = Vec::new();

        for outcome in self.outcomes {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(failure) => failures.push(failure),
            }
        }

        if failures.is_empty() {
            return Ok(values);
        }

        tracing::debug!(total, failed = failures.len(), "batch has failures");
        Err(AggregateFailure { failures, total })
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Outcome<T>> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Batch<T> {
    type Item = Outcome<T>;
    type IntoIter = alloc::vec::IntoIter<Outcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

/// All failures of a batch, raised together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} of {} operations failed: {}", .failures.len(), .total, join_messages(.failures))]
pub struct AggregateFailure {
    failures: Vec<Failure>,
    total: usize,
}

impl AggregateFailure {
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Number of operations in the batch, including successful ones.
    pub fn total(&self) -> usize {
        self.total
    }
}

fn join_messages(failures: &[Failure]) -> String {
    failures
        .iter()
        .map(Failure::message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Apply [`divide`] to every `(dividend, divisor)` pair.
pub fn divide_all(pairs: &[(f64, f64)]) -> Batch<f64> {
    pairs
        .iter()
        .map(|&(dividend, divisor)| divide(dividend, divisor))
        .collect()
}
