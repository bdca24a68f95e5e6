use crate::config::schema::SourceSchema;
use crate::core::reader::RowReader;
use crate::core::{ConfigProvider, DocumentStore, Pipeline, RawRecord, Workout, WorkoutLog};
use crate::domain::services;
use crate::utils::error::{ConvertError, Result};

/// Name of the JSON document written under the configured output path.
pub const OUTPUT_FILE: &str = "actividades.json";

pub struct ConvertPipeline<S: DocumentStore, C: ConfigProvider> {
    storage: S,
    config: C,
    schema: SourceSchema,
}

impl<S: DocumentStore, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C, schema: SourceSchema) -> Self {
        Self {
            storage,
            config,
            schema,
        }
    }

    fn field<'a>(&self, row: &'a RawRecord, column: &str) -> Result<&'a str> {
        row.field(column)
            .ok_or_else(|| ConvertError::MissingColumnError {
                column: column.to_string(),
            })
    }

    fn assemble(&self, id: u64, row: &RawRecord) -> Result<Workout> {
        let columns = &self.schema.columns;

        let date = services::parse_date(self.field(row, &columns.date)?)?;
        let distance = services::parse_distance(self.field(row, &columns.distance)?)?;
        let seconds_used = services::parse_duration(self.field(row, &columns.time)?)?;
        let pool = services::is_pool_activity(
            self.field(row, &columns.activity_type)?,
            &self.schema.classification.pool_keywords,
        );

        Ok(Workout {
            id,
            year: date.year,
            // nadamillas counts months from zero
            month: date.month - 1,
            day: date.day,
            distance,
            seconds_used,
            pool,
        })
    }
}

#[async_trait::async_trait]
impl<S: DocumentStore, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Reading rows from: {}", self.config.input_file());

        let reader = RowReader::new(self.config.input_file());
        let mut rows = Vec::new();
        for row in reader.rows()? {
            rows.push(row?);
        }

        tracing::debug!("Read {} data rows", rows.len());
        Ok(rows)
    }

    async fn transform(&self, rows: Vec<RawRecord>) -> Result<WorkoutLog> {
        let mut workouts = Vec::with_capacity(rows.len());
        let mut id = self.config.start_id();

        for (index, row) in rows.iter().enumerate() {
            let workout = self.assemble(id, row).map_err(|source| ConvertError::RowError {
                row: index + 1,
                source: Box::new(source),
            })?;

            println!("Writing record #{}: {}", id, workout.summary());
            workouts.push(workout);
            id += 1;
        }

        Ok(WorkoutLog { workouts })
    }

    async fn load(&self, log: WorkoutLog) -> Result<String> {
        let data = serde_json::to_vec(&log)?;

        tracing::debug!("Writing {} bytes to {}", data.len(), OUTPUT_FILE);
        self.storage.write_document(OUTPUT_FILE, &data).await
    }
}
