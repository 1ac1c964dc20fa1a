use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::tx::types::result::TxResult;
use crate::tx::types::tx_data::TxData;

#[async_trait]
pub trait TransactionSource {
    /// Reads the next archived transaction from the source. `None` is returned once the source
    /// is exhausted, and all successive calls will also return `None`.
    ///
    /// Cancellation is only checked when the call starts. A token that is already cancelled
    /// yields [`TxError::Cancelled`](crate::tx::types::result::TxError::Cancelled) without any
    /// read taking place, and the source stays where it was. A read that is already underway
    /// is not interrupted, which is fine for local files but not for sources with slow reads.
    ///
    /// The standard file backend reads synchronously and blocks the calling task while a single
    /// record is read and decoded.
    async fn read(&mut self, cancel: &CancellationToken) -> TxResult<Option<TxData>>;
}
