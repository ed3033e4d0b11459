pub mod config;
pub mod coordinator;
pub mod error;
pub mod pipeline;
pub mod protocol;

pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder, GestureHandle};
pub use error::AppError;
pub use pipeline::{GestureRecognizer, GestureService};
pub use protocol::{GestureRequest, GestureResponse};
