use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed transaction envelope as archived from the chain. Only the memo is interpreted,
/// everything else is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tx {
    #[serde(rename = "msg", default)]
    messages: Option<Vec<Value>>,
    // `Null` when the envelope carries no fee
    #[serde(default)]
    fee: Value,
    #[serde(default)]
    signatures: Option<Vec<Value>>,
    #[serde(default)]
    memo: String,
}

impl Tx {
    pub fn new(
        messages: Vec<Value>,
        fee: Option<Value>,
        signatures: Vec<Value>,
        memo: impl Into<String>,
    ) -> Self {
        Tx {
            messages: Some(messages),
            fee: fee.unwrap_or(Value::Null),
            signatures: Some(signatures),
            memo: memo.into(),
        }
    }

    pub fn with_memo(memo: impl Into<String>) -> Self {
        Tx {
            memo: memo.into(),
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[Value] {
        self.messages.as_deref().unwrap_or_default()
    }

    pub fn fee(&self) -> Option<&Value> {
        Some(&self.fee).filter(|fee| !fee.is_null())
    }

    pub fn signatures(&self) -> &[Value] {
        self.signatures.as_deref().unwrap_or_default()
    }

    pub fn memo(&self) -> &str {
        self.memo.as_str()
    }
}

/// A single archived transaction together with the height of the block it was included in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxData {
    tx: Tx,
    #[serde(rename = "blocknum")]
    block_num: u64,
}

impl TxData {
    pub fn new(tx: Tx, block_num: u64) -> Self {
        TxData { tx, block_num }
    }

    pub fn tx(&self) -> &Tx {
        &self.tx
    }

    pub fn block_num(&self) -> u64 {
        self.block_num
    }

    pub fn into_tx(self) -> Tx {
        self.tx
    }
}
