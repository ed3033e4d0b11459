use crate::{
    config::Configuration, error::AppError, pipeline::recognizer::GestureRecognizer,
    protocol::{GestureRequest, GestureResponse},
};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// One in-flight request plus the channel its answer goes back on.
struct GestureJob {
    request: GestureRequest,
    reply: oneshot::Sender<GestureResponse>,
}

/// Owns the dispatch task that drains the request channel and fans each
/// job out to its own task over the shared recognizer. The recognizer's
/// own locking keeps the tracker serialized; jobs otherwise run freely.
pub struct Coordinator {
    dispatch_task: tokio::task::JoinHandle<()>,
    cancel_token: CancellationToken,
    job_tx: Sender<GestureJob>,
}

impl Coordinator {
    fn new(configuration: Configuration, recognizer: Arc<GestureRecognizer>) -> Self {
        let cancel_token = CancellationToken::new();
        let (job_tx, job_rx) = tokio::sync::mpsc::channel(configuration.request_buffer_size);

        Self {
            dispatch_task: Self::start_dispatch_task(recognizer, job_rx, cancel_token.clone()),
            cancel_token,
            job_tx,
        }
    }

    fn start_dispatch_task(
        recognizer: Arc<GestureRecognizer>,
        mut job_rx: Receiver<GestureJob>,
        cancel_token: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => break,
                    job = job_rx.recv() => {
                        let Some(job) = job else { break };
                        let recognizer = recognizer.clone();
                        // Decode and detect are CPU work and the tracker
                        // serializes behind its mutex; keep that off the
                        // runtime worker threads.
                        tokio::task::spawn_blocking(move || {
                            let outcome = recognizer.recognize(job.request.frame.as_deref());
                            if job.reply.send(GestureResponse::from(outcome)).is_err() {
                                tracing::debug!("Requester went away before the reply was ready");
                            }
                        });
                    }
                }
            }
        })
    }

    /// Cheap cloneable entry point for the routing layer.
    pub fn handle(&self) -> GestureHandle {
        GestureHandle {
            job_tx: self.job_tx.clone(),
        }
    }

    pub fn stop(&self) {
        self.cancel_token.cancel();
        self.dispatch_task.abort();
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Clone)]
pub struct GestureHandle {
    job_tx: Sender<GestureJob>,
}

impl GestureHandle {
    pub async fn recognize(&self, request: GestureRequest) -> Result<GestureResponse, AppError> {
        let (reply, response) = oneshot::channel();
        self.job_tx
            .send(GestureJob { request, reply })
            .await
            .map_err(|_| AppError::RecognizerGone)?;
        response.await.map_err(|_| AppError::RecognizerGone)
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    recognizer: Option<Arc<GestureRecognizer>>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            recognizer: None,
        }
    }

    // Adjusts the request buffer size, this will override the configuration.
    pub fn request_buffer_size(mut self, request_buffer_size: usize) -> Self {
        self.configuration.request_buffer_size = request_buffer_size;
        self
    }

    pub fn recognizer(mut self, recognizer: Arc<GestureRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn build(self) -> Result<Coordinator, AppError> {
        let recognizer = self
            .recognizer
            .ok_or(AppError::Pipeline("Recognizer not set".to_string()))?;
        Ok(Coordinator::new(self.configuration, recognizer))
    }
}
