//! Controller module - Application logic and event handling
//!
//! The controller owns the model and is driven by the UI loop. It is
//! organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `fetch`: Starting fetches and applying their completions

mod input;
mod fetch;

use tokio::sync::mpsc;

use crate::model::{AppModel, InertTransport, SearchClient};

pub use fetch::FetchCompletion;

pub struct AppController {
    pub(crate) model: AppModel,
    client: SearchClient,
    transport: InertTransport,
    completions: mpsc::UnboundedSender<FetchCompletion>,
}

impl AppController {
    /// Build a controller; the receiver must be drained by the UI loop and
    /// fed back through [`AppController::apply_completion`].
    pub fn new(client: SearchClient, query: String) -> (Self, mpsc::UnboundedReceiver<FetchCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            model: AppModel::new(query),
            client,
            transport: InertTransport,
            completions: tx,
        };
        (controller, rx)
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn transport(&self) -> &InertTransport {
        &self.transport
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit()
    }
}
