use std::fmt::{Display, Formatter};

use crate::tx::sources::standard_transaction_source::StandardTransactionSource;
use crate::tx::sources::transaction_source::TransactionSource;
use crate::tx::types::result::TxResult;

/// The backends a restore run can pull transactions from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SourceKind {
    /// A local archive file of concatenated JSON records.
    Standard,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Standard => write!(f, "standard"),
        }
    }
}

/// Opens the backend selected by `kind`. The meaning of `identifier` depends on the backend,
/// for [`SourceKind::Standard`] it is a file path.
pub fn open_source(
    kind: SourceKind,
    identifier: &str,
) -> TxResult<Box<dyn TransactionSource + Send>> {
    match kind {
        SourceKind::Standard => Ok(Box::new(StandardTransactionSource::open(identifier)?)),
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::sync::CancellationToken;

    use crate::test_resource_path;
    use crate::tx::sources::source_kind::{open_source, SourceKind};
    use crate::tx::sources::transaction_source::TransactionSource;
    use crate::tx::types::result::TxError;

    #[tokio::test]
    async fn test_opens_standard_source() {
        let mut source = open_source(
            SourceKind::Standard,
            test_resource_path!("sources/valid/single.json"),
        )
        .unwrap();
        let cancel = CancellationToken::new();

        let record = source.read(&cancel).await.unwrap().unwrap();
        assert_eq!(record.tx().memo(), "example tx");
        assert_eq!(record.block_num(), 10);
        assert!(source.read(&cancel).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_standard_source_fails_fast() {
        let error = open_source(SourceKind::Standard, "./dummy-file.txt")
            .err()
            .unwrap();

        assert!(matches!(error, TxError::IoError(_)), "{:?}", error);
    }

    #[test]
    fn test_display() {
        assert_eq!(SourceKind::Standard.to_string(), "standard");
    }
}
