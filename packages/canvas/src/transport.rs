//! Delivery of [`CanvasUpdate`]s to the client.
//!
//! The actual network hop belongs to whatever serves the page. This module
//! only defines the seam ([`CanvasTransport`]) and two adapters: a
//! [`ChannelTransport`] feeding a `flume` channel that an event stream (SSE,
//! websocket) drains, and a [`RecordingTransport`] that keeps every update in
//! memory.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

use crate::{CanvasUpdate, Command, debug_or_trace, script};

#[derive(Debug, Error)]
pub enum TransportError {
    /// The receiving side of the transport is gone.
    #[error("Canvas transport disconnected")]
    Disconnected,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Delivers canvas updates to the client.
///
/// Implementations must execute the commands of one update in order, and
/// must not interleave commands of other updates for the same canvas between
/// them.
#[async_trait]
pub trait CanvasTransport: Send + Sync {
    /// # Errors
    ///
    /// * If the update could not be handed to the client
    async fn send(&self, update: CanvasUpdate) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: CanvasTransport + ?Sized> CanvasTransport for Arc<T> {
    async fn send(&self, update: CanvasUpdate) -> Result<(), TransportError> {
        (**self).send(update).await
    }
}

#[async_trait]
impl<T: CanvasTransport + ?Sized> CanvasTransport for Box<T> {
    async fn send(&self, update: CanvasUpdate) -> Result<(), TransportError> {
        (**self).send(update).await
    }
}

/// Publishes updates on a `flume` channel, one message per update.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: flume::Sender<CanvasUpdate>,
}

impl ChannelTransport {
    #[must_use]
    pub const fn new(sender: flume::Sender<CanvasUpdate>) -> Self {
        Self { sender }
    }

    /// Creates an unbounded channel and returns the transport with its receiver.
    #[must_use]
    pub fn unbounded() -> (Self, flume::Receiver<CanvasUpdate>) {
        let (tx, rx) = flume::unbounded();
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl CanvasTransport for ChannelTransport {
    async fn send(&self, update: CanvasUpdate) -> Result<(), TransportError> {
        log::trace!("send: target={} commands={}", update.target, update.len());

        self.sender
            .send_async(update)
            .await
            .map_err(|_| TransportError::Disconnected)
    }
}

/// Keeps every update it receives, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    updates: Arc<Mutex<Vec<CanvasUpdate>>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the updates received so far.
    #[must_use]
    pub fn updates(&self) -> Vec<CanvasUpdate> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every received command, flattened across updates.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        self.updates()
            .into_iter()
            .flat_map(|update| update.commands)
            .collect()
    }

    /// Every received update rendered as JavaScript.
    #[must_use]
    pub fn scripts(&self) -> Vec<String> {
        self.updates().iter().map(script::render_update).collect()
    }

    pub fn clear(&self) {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl CanvasTransport for RecordingTransport {
    async fn send(&self, update: CanvasUpdate) -> Result<(), TransportError> {
        debug_or_trace!(
            ("send: recording update for {}", update.target),
            ("send: recording update={update:?}")
        );

        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(update);

        Ok(())
    }
}
