pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, schema::SourceSchema, CliConfig};
pub use core::{etl::ConvertEngine, pipeline::ConvertPipeline};
pub use domain::model::{RawRecord, Workout, WorkoutLog};
pub use utils::error::{ConvertError, Result};
