/// Load tickets with cancellation.
///
/// Starting a load cancels the ticket of the previous one. A decode running
/// elsewhere can poll `is_cancelled` to stop early; its completion is
/// ignored either way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use crate::error::Error;
use super::AssetFeatures;

/// Handle of one in-flight load
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    name: String,
    cancelled: Arc<AtomicBool>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// File name or URL being loaded
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// Result of completing a load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The asset replaced the scene model
    Loaded(AssetFeatures),
    /// Decoding failed and the placeholder asset was loaded instead
    Placeholder,
    /// The ticket was cancelled or superseded; the scene is untouched
    Cancelled,
    /// Neither the asset nor the placeholder could be loaded
    Failed(Error),
}

/// Issues tickets, at most one live at a time
#[derive(Debug, Default)]
pub struct AssetLoader {
    generation: u64,
    current: Option<LoadTicket>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the in-flight load, if any, and issue a new ticket.
    pub fn begin(&mut self, name: impl Into<String>) -> LoadTicket {
        self.cancel();
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            name: name.into(),
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        self.current = Some(ticket.clone());
        ticket
    }

    /// Consume the ticket if it is still the live one.
    pub fn accept(&mut self, ticket: &LoadTicket) -> bool {
        let live = matches!(&self.current, Some(current) if current.generation == ticket.generation);
        if !live || ticket.is_cancelled() {
            return false;
        }
        self.current = None;
        true
    }

    /// Cancel the in-flight load.
    pub fn cancel(&mut self) {
        if let Some(ticket) = self.current.take() {
            ticket.cancel();
        }
    }

    pub fn in_flight(&self) -> Option<&LoadTicket> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
