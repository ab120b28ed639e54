use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::fmt::Display;
use std::future::Future;
use thiserror::Error;

/// Default number of items processed at the same time
pub const DEFAULT_WIDTH: usize = 10;

/// Failure of a single dispatched item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("{item}: {message}")]
    Failed { item: String, message: String },

    #[error("{item}: worker task panicked")]
    Panicked { item: String },
}

impl DispatchError {
    pub fn item(&self) -> &str {
        match self {
            DispatchError::Failed { item, .. } | DispatchError::Panicked { item } => item,
        }
    }
}

/// Results of a fan-out, in completion order
#[derive(Debug)]
pub struct DispatchOutcome<T> {
    pub results: Vec<T>,
    pub errors: Vec<DispatchError>,
}

impl<T> Default for DispatchOutcome<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> DispatchOutcome<T> {
    /// Number of items that finished, successfully or not
    pub fn completed(&self) -> usize {
        self.results.len() + self.errors.len()
    }
}

/// Bounded concurrent fan-out over a list of items.
///
/// Each item runs as its own tokio task and at most `width` tasks are in
/// flight. A worker that returns an error or panics is recorded in
/// `DispatchOutcome::errors`; the other items keep running. There is no
/// cancellation and no batch timeout.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    width: usize,
}

impl Dispatcher {
    /// A width of zero falls back to `DEFAULT_WIDTH`
    pub fn new(width: usize) -> Self {
        let width = if width == 0 { DEFAULT_WIDTH } else { width };
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub async fn run_all<I, T, F, Fut>(&self, items: Vec<I>, worker: F) -> DispatchOutcome<T>
    where
        I: Display + Send + 'static,
        T: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.run_all_with_progress(items, worker, |_, _| {}).await
    }

    /// Like `run_all`, calling `progress(completed, total)` after every item
    pub async fn run_all_with_progress<I, T, F, Fut, P>(
        &self,
        items: Vec<I>,
        worker: F,
        mut progress: P,
    ) -> DispatchOutcome<T>
    where
        I: Display + Send + 'static,
        T: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T>> + Send + 'static,
        P: FnMut(usize, usize) + Send,
    {
        let total = items.len();
        let mut outcome = DispatchOutcome::default();
        if total == 0 {
            return outcome;
        }

        let worker = &worker;
        let mut tasks = stream::iter(items)
            .map(|item| {
                let label = item.to_string();
                let task = worker(item);
                async move { (label, tokio::spawn(task).await) }
            })
            .buffer_unordered(self.width);

        while let Some((item, joined)) = tasks.next().await {
            match joined {
                Ok(Ok(value)) => outcome.results.push(value),
                Ok(Err(e)) => {
                    log::debug!("{} failed: {:#}", item, e);
                    outcome.errors.push(DispatchError::Failed {
                        item,
                        message: format!("{:#}", e),
                    });
                }
                Err(e) => {
                    log::error!("{} stopped unexpectedly: {}", item, e);
                    outcome.errors.push(DispatchError::Panicked { item });
                }
            }
            progress(outcome.completed(), total);
        }

        outcome
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}
