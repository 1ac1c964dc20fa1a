use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use async_trait::async_trait;
use serde_json::de::IoRead;
use serde_json::error::Category;
use serde_json::{Deserializer, StreamDeserializer};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::tx::sources::transaction_source::TransactionSource;
use crate::tx::types::result::{TxError, TxResult};
use crate::tx::types::tx_data::TxData;

type RecordStream<R> = StreamDeserializer<'static, IoRead<R>, TxData>;

enum SourceState<R>
where
    R: Read,
{
    Open(RecordStream<R>),
    Exhausted,
    Failed(TxError),
}

/// Reads archived transactions from a stream of JSON records that are concatenated without any
/// enclosing array. Whitespace between and after records is accepted, anything else that is not
/// a complete record is a decode error.
///
/// Once the stream is exhausted or a record failed to decode, the source stays in that state and
/// answers every further read the same way. A new source is needed to start over.
pub struct StandardTransactionSource<R>
where
    R: Read,
{
    state: SourceState<R>,
    records_read: u64,
    byte_offset: usize,
}

impl StandardTransactionSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> TxResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Self::open_error(path, e))?;
        let metadata = file.metadata().map_err(|e| Self::open_error(path, e))?;

        if metadata.is_dir() {
            return Err(TxError::InvalidArgument(format!(
                "Expected [{}] to be a file, but it is a directory.",
                path.display()
            )));
        }

        debug!(path = %path.display(), "Opened standard transaction source.");

        Ok(Self::from_reader(BufReader::new(file)))
    }

    fn open_error(path: &Path, error: std::io::Error) -> TxError {
        TxError::IoError(format!(
            "Unable to open source file [{}]: {}",
            path.display(),
            error
        ))
    }
}

impl<R> StandardTransactionSource<R>
where
    R: Read,
{
    pub fn from_reader(source: R) -> Self {
        Self {
            state: SourceState::Open(Deserializer::from_reader(source).into_iter()),
            records_read: 0,
            byte_offset: 0,
        }
    }

    /// Number of records handed out so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Offset of the first byte after the last record handed out.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    fn decode_next(&mut self) -> TxResult<Option<TxData>> {
        let stream = match &mut self.state {
            SourceState::Open(stream) => stream,
            SourceState::Exhausted => return Ok(None),
            SourceState::Failed(error) => return Err(error.clone()),
        };

        match stream.next() {
            Some(Ok(record)) => {
                self.byte_offset = stream.byte_offset();
                self.records_read += 1;
                trace!(
                    record = self.records_read,
                    block_num = record.block_num(),
                    "Decoded archived transaction."
                );
                Ok(Some(record))
            }
            Some(Err(e)) => {
                let error = self.decode_error(e);
                warn!(%error, "Standard transaction source failed.");
                self.state = SourceState::Failed(error.clone());
                Err(error)
            }
            None => {
                debug!(
                    records = self.records_read,
                    byte = self.byte_offset,
                    "Standard transaction source exhausted."
                );
                self.state = SourceState::Exhausted;
                Ok(None)
            }
        }
    }

    fn decode_error(&self, error: serde_json::Error) -> TxError {
        let message = format!(
            "Could not decode record [{}]: {} ({}).",
            self.records_read + 1,
            error,
            self.position_to_string()
        );

        match error.classify() {
            Category::Io => TxError::IoError(message),
            Category::Syntax | Category::Data | Category::Eof => TxError::DecodeError(message),
        }
    }

    fn cancelled_error(&self) -> TxError {
        TxError::Cancelled(format!(
            "Read was cancelled before decoding ({}).",
            self.position_to_string()
        ))
    }

    fn position_to_string(&self) -> String {
        format!(
            "records read: {}, byte: {}",
            self.records_read, self.byte_offset
        )
    }
}

#[async_trait]
impl<R> TransactionSource for StandardTransactionSource<R>
where
    R: Read + Send,
{
    async fn read(&mut self, cancel: &CancellationToken) -> TxResult<Option<TxData>> {
        if cancel.is_cancelled() {
            return Err(self.cancelled_error());
        }

        self.decode_next()
    }
}
