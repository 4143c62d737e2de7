use lambda_runtime::{run, service_fn, Error};
use object_metadata::{function_handler, Config, MetadataReporter, TracingSink};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Config::from_env().init_tracing();

    let reporter = MetadataReporter::new(TracingSink);
    run(service_fn(|event| function_handler(event, &reporter))).await
}
