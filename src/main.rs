use clap::Parser;
use nadamillas_convert::utils::{logger, validation::Validate};
use nadamillas_convert::{
    CliConfig, ConvertEngine, ConvertError, ConvertPipeline, LocalStorage, SourceSchema,
};

fn fail(error: ConvertError) -> ! {
    tracing::error!("Conversion failed: {}", error);
    eprintln!("❌ {}", error);
    std::process::exit(error.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nadamillas-convert");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    let schema = match &config.schema_file {
        Some(path) => {
            tracing::debug!("Loading source schema from: {}", path);
            match SourceSchema::from_file(path) {
                Ok(schema) => schema,
                Err(e) => fail(e),
            }
        }
        None => SourceSchema::default(),
    };
    if let Err(e) = schema.validate() {
        fail(e);
    }

    println!("Converting: {}, id #{}", config.input_file, config.start_id);

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ConvertPipeline::new(storage, config, schema);
    let engine = ConvertEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Conversion completed, output at {}", output_path);
            println!("✅ Finished.");
        }
        Err(e) => fail(e),
    }
}
