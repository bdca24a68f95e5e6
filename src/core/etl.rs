use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the three stages in order. Any stage error aborts the run
    /// before the output file is touched.
    pub async fn run(&self) -> Result<String> {
        // Extract
        println!("Reading rows...");
        let rows = self.pipeline.extract().await?;
        println!("Read {} rows", rows.len());

        // Transform
        let log = self.pipeline.transform(rows).await?;
        println!("Converted {} workouts", log.workouts.len());

        // Load
        let output_path = self.pipeline.load(log).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
