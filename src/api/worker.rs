//! API Worker Thread
//!
//! Handles recipe API requests in a background thread to avoid blocking the UI.
//! Receives requests via channel, runs each one as its own task on a tokio
//! runtime, and sends tagged responses back to the main thread.
//!
//! Includes panic handling so a crash in the HTTP stack cannot corrupt the TUI.

use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::client::{ApiError, RecipeClient};
use super::messages::{ApiRequest, ApiResponse};
use crate::config::ApiConfig;

const WORKER_THREAD_NAME: &str = "larder-api";

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Spawn the API worker thread
///
/// Creates a background thread with a current-thread tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Spawns one task per request, so a slow detail fetch never holds up a search
/// 3. Sends each result back via the response channel
///
/// When the configuration has no usable API key, every request is answered
/// immediately with `ApiError::NotConfigured`.
pub fn spawn_worker(
    config: &ApiConfig,
    request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let client_result = RecipeClient::from_config(config);
    if let Err(e) = &client_result {
        log::warn!("API worker starting without a client: {}", e);
    }

    let spawned = std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            // The default panic hook prints to stderr which corrupts the TUI
            let prev_hook = Arc::new(panic::take_hook());
            panic::set_hook(worker_panic_hook(prev_hook));

            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime for API worker: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(client_result, request_rx, response_tx));
            }));

            if let Err(e) = result {
                log::error!("API worker thread panicked: {}", panic_message(e.as_ref()));
            }
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn API worker thread: {}", e);
    }
}

/// Log panics raised on the worker thread and hand every other panic to `previous`
///
/// The hook is process-wide, so the UI thread must keep the hook that restores
/// the terminal.
fn worker_panic_hook(previous: Arc<PanicHook>) -> PanicHook {
    Box::new(move |panic_info: &PanicHookInfo<'_>| {
        if on_worker_thread() {
            log::error!(
                "API worker panic: {} at {:?}",
                panic_message(panic_info.payload()),
                panic_info.location()
            );
        } else {
            previous(panic_info);
        }
    })
}

fn on_worker_thread() -> bool {
    std::thread::current().name() == Some(WORKER_THREAD_NAME)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Main async worker loop - processes requests until the channel is closed
async fn worker_loop(
    client_result: Result<RecipeClient, ApiError>,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        match &client_result {
            Ok(client) => {
                let client = client.clone();
                let response_tx = response_tx.clone();
                let fallback = request.clone();
                let task = tokio::spawn(async move { handle_request(&client, request).await });
                tokio::spawn(async move {
                    let response = await_response(task, &fallback).await;
                    // Main thread gone means we are shutting down
                    let _ = response_tx.send(response);
                });
            }
            Err(e) => {
                let _ = response_tx.send(ApiResponse::failed(&request, e.clone()));
            }
        }
    }

    log::debug!("API request channel closed, worker exiting");
}

/// Wait for a request task, answering with `ApiError::Worker` if it died
///
/// Every request gets exactly one response, so the UI never waits forever.
async fn await_response(task: JoinHandle<ApiResponse>, request: &ApiRequest) -> ApiResponse {
    match task.await {
        Ok(response) => response,
        Err(e) => {
            log::error!("API request {} failed: {}", request.request_id(), e);
            ApiResponse::failed(request, ApiError::Worker(e.to_string()))
        }
    }
}

/// Run one request against the API and wrap the outcome in its response
async fn handle_request(client: &RecipeClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Suggest {
            query,
            request_id,
            cancel_token,
        } => ApiResponse::Suggestions {
            request_id,
            result: client.autocomplete(&query, &cancel_token).await,
        },
        ApiRequest::FindRecipes {
            query,
            request_id,
            cancel_token,
        } => ApiResponse::Recipes {
            request_id,
            result: client.find_by_ingredients(&query, &cancel_token).await,
        },
        ApiRequest::RecipeDetail {
            recipe_id,
            request_id,
        } => ApiResponse::RecipeDetail {
            request_id,
            recipe_id,
            result: client
                .recipe_information(recipe_id, &CancellationToken::new())
                .await,
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
