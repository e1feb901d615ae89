use crate::domain::command::Command;
use crate::error::{GameError, Result};
use std::io::Read;

/// Reads session commands from a CSV source.
///
/// Wraps `csv::Reader` and yields `Result<Command>` lazily, so long
/// scripts stream without being loaded whole. Whitespace is trimmed and
/// short records (e.g. a `launch` row with no card) are accepted.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GameError::from))
    }
}
