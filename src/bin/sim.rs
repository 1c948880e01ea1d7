use log::LevelFilter;
use seabattle::{init_logging, run_batch, BatchSummary, Difficulty};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Error);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    // one blocking task per difficulty; batches share nothing
    let handles: Vec<_> = Difficulty::ALL
        .into_iter()
        .map(|difficulty| tokio::task::spawn_blocking(move || run_batch(difficulty, games, seed)))
        .collect();

    let mut summaries: Vec<BatchSummary> = Vec::with_capacity(handles.len());
    for handle in handles {
        summaries.push(handle.await?.map_err(|e| anyhow::anyhow!(e))?);
    }

    let result = json!({
        "games": games,
        "seed": seed,
        "results": summaries,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
