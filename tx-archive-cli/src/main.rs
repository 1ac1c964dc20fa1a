use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tx_archive::tx::sources::source_kind::{open_source, SourceKind};
use tx_archive::tx::sources::transaction_source::TransactionSource;
use tx_archive::tx::types::result::{TxError, TxResult};

/// Reads every transaction from an archive in order and prints one JSON record per line.
#[derive(Debug, Parser)]
#[command(name = "tx-archive", version)]
struct Cli {
    /// Path to the archive to read.
    path: String,

    /// Format of the archive.
    #[arg(long, value_enum, default_value = "standard")]
    source: SourceFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SourceFormat {
    Standard,
}

impl From<SourceFormat> for SourceKind {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Standard => SourceKind::Standard,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cancel = CancellationToken::new();

    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current record.");
            ctrl_c_cancel.cancel();
        }
    });

    match run(cli.source.into(), cli.path.as_str(), stdout().lock(), &cancel).await {
        Ok((_, records)) => {
            info!(records, path = %cli.path, "Archive read completely.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, path = %cli.path, "Unable to read archive.");
            ExitCode::FAILURE
        }
    }
}

async fn run<W>(
    kind: SourceKind,
    path: &str,
    mut output_sink: W,
    cancel: &CancellationToken,
) -> TxResult<(W, u64)>
where
    W: Write,
{
    let mut source = open_source(kind, path)?;
    let mut records = 0u64;

    while let Some(record) = source.read(cancel).await? {
        serde_json::to_writer(&mut output_sink, &record).map_err(output_error)?;
        output_sink.write_all(b"\n").map_err(output_error)?;
        records += 1;
    }

    output_sink.flush().map_err(output_error)?;

    Ok((output_sink, records))
}

fn output_error<E: std::fmt::Display>(error: E) -> TxError {
    TxError::IoError(format!("Unable to write record to output: {}", error))
}
