pub mod flatten;
pub mod handler;

pub use crate::domain::model::{BreedsPayload, ErrorResult, HandlerResponse, SuccessResult};
pub use crate::domain::ports::{BreedSource, ConfigProvider};
pub use crate::utils::error::Result;
