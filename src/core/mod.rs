pub mod etl;
pub mod pipeline;
pub mod reader;

pub use crate::domain::model::{RawRecord, Workout, WorkoutDate, WorkoutLog};
pub use crate::domain::ports::{ConfigProvider, DocumentStore, Pipeline};
pub use crate::utils::error::Result;
