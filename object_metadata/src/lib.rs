pub mod config;
pub mod error;
pub mod event;
pub mod reporter;
pub mod sink;

use lambda_runtime::{Error, LambdaEvent};
use tracing::info_span;

pub use config::{Config, LogFormat};
pub use error::{ExtractionError, SinkError};
pub use event::{Payload, StorageEvent};
pub use reporter::MetadataReporter;
pub use sink::{LogSink, MemorySink, TracingSink};

pub async fn function_handler<S: LogSink>(
    event: LambdaEvent<StorageEvent>,
    reporter: &MetadataReporter<S>,
) -> Result<(), Error> {
    let payload = event.payload;
    let span = info_span!(
        "storage_event",
        event_id = payload.id().unwrap_or_default(),
        request_id = %event.context.request_id,
        source = payload.source().unwrap_or_default(),
        subject = payload.subject().unwrap_or_default(),
    );
    span.in_scope(|| reporter.handle(&payload))?;
    Ok(())
}
