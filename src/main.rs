use clap::Parser;
use miette::{IntoDiagnostic, Result};
use perya::application::engine::{GameEngine, Outcome};
use perya::domain::ports::{DialogueSourceBox, RegistryStoreBox};
use perya::infrastructure::barker::CannedBarker;
use perya::infrastructure::in_memory::InMemoryRegistry;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input session script CSV file
    input: PathBuf,

    /// Player name the session is recorded under
    #[arg(long, default_value = "guest")]
    player: String,

    /// Seed for the launch PRNG; omit for entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Path to persistent player registry (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let registry: RegistryStoreBox = match cli.db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(db_path) => Box::new(
            perya::infrastructure::rocksdb::RocksDbRegistry::open(db_path).into_diagnostic()?,
        ),
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            return Err(miette::miette!(
                "--db-path requires building with the storage-rocksdb feature"
            ));
        }
        None => Box::new(InMemoryRegistry::new()),
    };
    let barker: DialogueSourceBox = Box::new(CannedBarker::new());

    let mut engine = GameEngine::open(&cli.player, registry, barker)
        .await
        .into_diagnostic()?;
    if let Some(seed) = cli.seed {
        engine.set_seed(seed);
    }

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = perya::interfaces::csv::command_reader::CommandReader::new(file);
    for cmd_result in reader.commands() {
        match cmd_result {
            Ok(cmd) => match engine.process_command(cmd).await {
                Ok(Outcome::Round { result, barker }) => {
                    let landings: Vec<String> =
                        result.landings.iter().map(|c| c.to_string()).collect();
                    eprintln!(
                        "[round] power={} landings={} matches={} payout={} barker=\"{}\"",
                        result.power,
                        landings.join(" "),
                        result.matches,
                        result.payout,
                        barker
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error processing command: {}", e);
                }
            },
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    let players = engine.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer =
        perya::interfaces::csv::summary_writer::SummaryWriter::new(stdout.lock());
    writer.write_players(players).into_diagnostic()?;

    Ok(())
}
