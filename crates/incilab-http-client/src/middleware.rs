//! Middleware pipeline
//!
//! Stages run in registration order. On the way out a stage may mutate the
//! request; on the way in it receives the reply and either hands it to the
//! next stage or ends the pipeline with a terminal payload. An error from
//! any stage is propagated to the caller unchanged.

use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;

use incilab_common::{Envelope, Error};

use crate::request::RequestDescriptor;

/// Raw reply as received from the transport
#[derive(Debug, Clone)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Bytes,
}

/// Terminal value produced by the pipeline
#[derive(Debug, Clone)]
pub enum Payload {
    /// Parsed response envelope
    Envelope(Envelope),
    /// Raw bytes of a binary request
    Binary(Bytes),
}

/// Inbound pipeline state
#[derive(Debug, Clone)]
pub enum Flow {
    /// Hand the reply to the next stage
    Continue(Reply),
    /// Terminal outcome; remaining stages are skipped
    Resolved(Payload),
}

/// One pipeline stage
#[async_trait]
pub trait Middleware: Debug + Send + Sync {
    /// Outbound stage, may mutate the request before it is sent.
    async fn on_request(&self, _request: &mut RequestDescriptor) -> Result<(), Error> {
        Ok(())
    }

    /// Inbound stage. Returns [`Flow::Continue`] to pass the reply on or
    /// [`Flow::Resolved`] to end the pipeline with a terminal value.
    async fn on_response(&self, _request: &RequestDescriptor, flow: Flow) -> Result<Flow, Error> {
        Ok(flow)
    }
}
