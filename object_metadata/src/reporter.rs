use tracing::Level;

use crate::error::ExtractionError;
use crate::event::{StorageEvent, BUCKET, CONTENT_TYPE, METAGENERATION, NAME, SIZE, TIME_CREATED, UPDATED};
use crate::sink::LogSink;

pub const ERROR_PREFIX: &str = "Error procesando el archivo";

/// Writes the metadata of one finalized object as nine log lines.
#[derive(Debug, Default)]
pub struct MetadataReporter<S> {
    sink: S,
}

impl<S: LogSink> MetadataReporter<S> {
    pub fn new(sink: S) -> Self {
        MetadataReporter { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Reports `event`. On failure one error line is recorded and the
    /// error is returned unchanged, even if that error line is lost too.
    pub fn handle(&self, event: &StorageEvent) -> Result<(), ExtractionError> {
        self.report(event).map_err(|e| {
            let _ = self.sink.record(Level::ERROR, &format!("{}: {}", ERROR_PREFIX, e));
            e
        })
    }

    fn report(&self, event: &StorageEvent) -> Result<(), ExtractionError> {
        let event_id = event.id()?;
        let event_type = event.event_type()?;
        let data = event.payload()?;

        let lines = [
            format!("Event ID: {}", event_id),
            format!("Event type: {}", event_type),
            format!("Bucket: {}", data.render(BUCKET)),
            format!("File: {}", data.render(NAME)),
            format!("Metageneration: {}", data.render(METAGENERATION)),
            format!("Size: {} bytes", data.render(SIZE)),
            format!("Content type: {}", data.render(CONTENT_TYPE)),
            format!("Created: {}", data.render(TIME_CREATED)),
            format!("Updated: {}", data.render(UPDATED)),
        ];
        for line in &lines {
            self.sink.record(Level::INFO, line)?;
        }
        Ok(())
    }
}
