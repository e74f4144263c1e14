use crate::models::country::ValidationError;
use crate::models::page::TriggerId;
use crate::models::response::Rendering;
use crate::page::Page;
use crate::services::lookup::Lookup;
use crate::services::transport::{RequestError, Transport};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

/// Turns triggers into requests and their outcomes into page updates.
///
/// Every failure is reported on the page: validation problems through an
/// alert before any request is made, request problems through a log entry
/// followed by an alert. A failed lookup never touches its result container.
pub struct FormAdapter<T, P> {
    transport: T,
    page: Arc<P>,
}

impl<T, P> FormAdapter<T, P>
where
    T: Transport,
    P: Page,
{
    pub fn new(transport: T, page: Arc<P>) -> Self {
        Self { transport, page }
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// Reads and validates the form for `trigger`. Alerts on failure.
    pub fn prepare(&self, trigger: TriggerId) -> Result<Lookup, ValidationError> {
        Lookup::from_form(trigger, self.page.as_ref()).map_err(|e| {
            debug!("{} rejected: {}", trigger, e);
            self.page.alert(&e.to_string());
            e
        })
    }

    /// Performs the request for an already validated lookup and renders it.
    pub async fn execute(&self, lookup: Lookup) -> Result<Rendering, RequestError> {
        let path = lookup.path();
        info!("Fetching {} from {}", lookup.label(), path);

        match self.transport.get_json(&path).await {
            Ok(payload) => {
                let rendering = Rendering::new(lookup.heading(), &payload);
                self.page.replace_content(lookup.container(), rendering.clone());
                debug!("Rendered {} into {}", lookup.label(), lookup.container());
                Ok(rendering)
            }
            Err(e) => {
                error!("Error fetching {}: {}", lookup.label(), e);
                self.page.alert(&format!(
                    "Error fetching {}. See console for details.",
                    lookup.label()
                ));
                Err(e)
            }
        }
    }

    pub async fn run(&self, trigger: TriggerId) -> Result<Rendering, AdapterError> {
        let lookup = self.prepare(trigger)?;
        Ok(self.execute(lookup).await?)
    }

    pub async fn fetch_country_info(&self) -> Result<Rendering, AdapterError> {
        self.run(TriggerId::GetCountry).await
    }

    pub async fn fetch_population(&self) -> Result<Rendering, AdapterError> {
        self.run(TriggerId::GetPopulation).await
    }

    pub async fn fetch_diagnostics(&self) -> Result<Rendering, AdapterError> {
        self.run(TriggerId::GetDiagnostics).await
    }

    /// Event-handler entry point: runs the lookup and drops the outcome,
    /// which has already been reported on the page.
    pub async fn handle(&self, trigger: TriggerId) {
        let _ = self.run(trigger).await;
    }
}

/// Fires triggers against an adapter without waiting for their responses.
///
/// The form is read and validated inside [`Dispatcher::fire`], so the values
/// used are the ones present when the trigger happened. The request itself
/// runs in its own task. Overlapping lookups of the same kind all land, last
/// write wins.
pub struct Dispatcher<T, P> {
    adapter: Arc<FormAdapter<T, P>>,
    in_flight: JoinSet<()>,
}

impl<T, P> Dispatcher<T, P>
where
    T: Transport + 'static,
    P: Page + 'static,
{
    pub fn new(adapter: Arc<FormAdapter<T, P>>) -> Self {
        Self {
            adapter,
            in_flight: JoinSet::new(),
        }
    }

    /// Returns `true` when a request was started, `false` when validation
    /// stopped it. Must be called from within a tokio runtime.
    pub fn fire(&mut self, trigger: TriggerId) -> bool {
        while self.in_flight.try_join_next().is_some() {}

        let Ok(lookup) = self.adapter.prepare(trigger) else {
            return false;
        };

        let adapter = self.adapter.clone();
        self.in_flight.spawn(async move {
            let _ = adapter.execute(lookup).await;
        });
        true
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Waits for every started lookup to finish.
    pub async fn drain(mut self) {
        while self.in_flight.join_next().await.is_some() {}
    }
}

/// Binds `triggers` to `adapter` and returns the dispatcher task. Once every
/// sender is dropped the task waits for in-flight lookups and exits.
pub fn bind<T, P>(
    adapter: Arc<FormAdapter<T, P>>,
    mut triggers: UnboundedReceiver<TriggerId>,
) -> JoinHandle<()>
where
    T: Transport + 'static,
    P: Page + 'static,
{
    tokio::spawn(async move {
        let mut dispatcher = Dispatcher::new(adapter);

        while let Some(trigger) = triggers.recv().await {
            dispatcher.fire(trigger);
        }

        dispatcher.drain().await;
        debug!("Trigger source closed, dispatcher stopped");
    })
}
