//! Replay a scenario file and print one JSON report per rendered frame.

use snapline_replay::{Replay, ReplayError, ReplayResult, load_scenario};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

fn run(path: PathBuf) -> ReplayResult<()> {
    let scenario = load_scenario(&path)?;
    log::info!("Replaying {}", path.display());
    let reports = Replay::run(&scenario)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        let line =
            serde_json::to_string(report).map_err(|e| ReplayError::Output(e.to_string()))?;
        writeln!(out, "{line}").map_err(|e| ReplayError::Output(e.to_string()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: snapline-replay <scenario.json>");
        return ExitCode::from(2);
    };
    match run(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Replay failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
