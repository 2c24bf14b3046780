//! Replay driver: feeds JSON-lines client events from stdin (or a file)
//! through one table and prints every server message as a JSON line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use judgment_engine::realtime::protocol::ErrorMsg;
use judgment_engine::{telemetry, AppError, ClientMsg, EngineConfig, GameHub, ServerMsg};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "judgment-replay")]
#[command(about = "Replay a script of client events against a judgment table")]
struct Args {
    /// Script of JSON-lines client events; stdin when omitted
    script: Option<PathBuf>,

    /// Shuffle seed (overrides JUDGMENT_RNG_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a final snapshot of the table after the script ends
    #[arg(long)]
    snapshot: bool,

    /// Stop at the first rejected event
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, code = e.code(), "Replay failed");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let mut config = EngineConfig::from_env()?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let hub = GameHub::new(&config);

    let input: Box<dyn AsyncBufRead + Unpin> = match &args.script {
        Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let mut lines = input.lines();
    let mut stdout = tokio::io::stdout();
    let mut events = 0usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        events += 1;

        let outcome = ClientMsg::from_json(line).and_then(|msg| hub.dispatch(msg));
        let replies: Vec<ServerMsg> = match outcome {
            Ok(notes) => notes.into_iter().map(ServerMsg::from).collect(),
            Err(e) if args.strict => return Err(e),
            Err(e) => vec![ServerMsg::Error(ErrorMsg::from(&e))],
        };
        for reply in replies {
            stdout.write_all(reply.to_json()?.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
    }

    if args.snapshot {
        let snapshot = serde_json::to_string_pretty(&hub.snapshot())
            .map_err(|e| AppError::protocol("Failed to serialize snapshot", e))?;
        stdout.write_all(snapshot.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;

    info!(events, "Replay finished");
    Ok(())
}
