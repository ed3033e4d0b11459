use crate::error::AppError;
use crate::pipeline::recognizer::GestureRecognizer;
use crate::protocol::{GestureRequest, GestureResponse};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

/// `tower::Service` front over the recognizer, so the routing layer can
/// compose it with its usual middleware. Clones share one recognizer.
#[derive(Clone)]
pub struct GestureService {
    recognizer: Arc<GestureRecognizer>,
}

impl GestureService {
    pub fn new(recognizer: Arc<GestureRecognizer>) -> Self {
        Self { recognizer }
    }
}

impl Service<GestureRequest> for GestureService {
    type Response = GestureResponse;
    type Error = AppError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: GestureRequest) -> Self::Future {
        let recognizer = self.recognizer.clone();
        Box::pin(async move {
            let outcome = recognizer.recognize(request.frame.as_deref());
            Ok(GestureResponse::from(outcome))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::classifier::GestureModel;
    use crate::pipeline::extractor::LandmarkExtractor;
    use crate::pipeline::testing::{
        bias_only_artifact, open_palm_payload, uniform_landmarks, write_model_file,
        ScriptedTracker,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn service_resolves_a_frame_to_its_label() {
        let file = write_model_file(&bias_only_artifact(3, 2, Some(&["yes", "no", "hello"])));
        let model = Arc::new(GestureModel::load(file.path()));
        let extractor = Arc::new(LandmarkExtractor::new(Box::new(
            ScriptedTracker::with_hands(vec![uniform_landmarks(0.2)]),
        )));
        let service = GestureService::new(Arc::new(GestureRecognizer::new(model, extractor)));

        let response = service
            .oneshot(GestureRequest {
                frame: Some(open_palm_payload()),
            })
            .await
            .unwrap();
        assert_eq!(response.text.as_deref(), Some("hello"));
    }
}
