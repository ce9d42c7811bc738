//! UI-side end of the worker channels
//!
//! Owns the request sender, the response receiver, and the request id
//! sequence shared by every component that talks to the API.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::messages::{ApiRequest, ApiResponse};

#[derive(Debug, Default)]
pub struct ApiChannel {
    request_tx: Option<UnboundedSender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
    last_request_id: u64,
    disconnected: bool,
}

impl ApiChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
        self.disconnected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some() && !self.disconnected
    }

    /// Allocate the next request id; ids start at 1 and never repeat
    pub fn next_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// Hand a request to the worker, returning false if it cannot be delivered
    pub fn send(&mut self, request: ApiRequest) -> bool {
        let Some(tx) = &self.request_tx else {
            log::warn!(
                "API worker not running, dropping request {}",
                request.request_id()
            );
            return false;
        };

        if tx.send(request).is_err() {
            log::error!("API worker disconnected, request dropped");
            self.disconnected = true;
            return false;
        }
        true
    }

    /// Drain every response that has arrived since the last poll
    ///
    /// Non-blocking; safe to call on every tick of the event loop.
    pub fn drain(&mut self) -> Vec<ApiResponse> {
        let mut responses = Vec::new();

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        if !self.disconnected {
                            log::error!("API worker disconnected unexpectedly");
                        }
                        self.disconnected = true;
                        break;
                    }
                }
            }
        }

        responses
    }
}
