use crate::models::{AppData, Ledger, DEFAULT_GOAL_ML};
use std::collections::BTreeSet;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const LEDGER_FILE: &str = "ledger.json";
pub const GOAL_FILE: &str = "goal.txt";
pub const PRESETS_FILE: &str = "presets.json";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("HYDROFLOW_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

// a missing file is the first-run case; only other failures get logged
async fn read_document(dir: &Path, file: &str) -> Option<String> {
    match fs::read_to_string(dir.join(file)).await {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read {file}: {err}");
            None
        }
    }
}

async fn write_document(dir: &Path, file: &str, payload: String) -> Result<(), std::io::Error> {
    fs::write(dir.join(file), payload).await
}

pub async fn load_ledger(dir: &Path) -> Ledger {
    let Some(raw) = read_document(dir, LEDGER_FILE).await else {
        return Ledger::default();
    };
    match serde_json::from_str(&raw) {
        Ok(ledger) => ledger,
        Err(err) => {
            error!("failed to parse {LEDGER_FILE}, starting empty: {err}");
            Ledger::default()
        }
    }
}

pub async fn load_goal(dir: &Path) -> u64 {
    let Some(raw) = read_document(dir, GOAL_FILE).await else {
        return DEFAULT_GOAL_ML;
    };
    match raw.trim().parse::<u64>().ok().filter(|goal| *goal > 0) {
        Some(goal) => goal,
        None => {
            error!("stored goal {raw:?} is not a positive integer, using default");
            DEFAULT_GOAL_ML
        }
    }
}

pub async fn load_presets(dir: &Path) -> BTreeSet<u64> {
    let Some(raw) = read_document(dir, PRESETS_FILE).await else {
        return BTreeSet::new();
    };
    match serde_json::from_str::<Vec<u64>>(&raw) {
        Ok(presets) => presets.into_iter().filter(|amount| *amount > 0).collect(),
        Err(err) => {
            error!("failed to parse {PRESETS_FILE}, starting empty: {err}");
            BTreeSet::new()
        }
    }
}

pub async fn load_app_data(dir: &Path) -> AppData {
    AppData {
        ledger: load_ledger(dir).await,
        goal: load_goal(dir).await,
        presets: load_presets(dir).await,
    }
}

pub async fn persist_ledger(dir: &Path, ledger: &Ledger) -> Result<(), std::io::Error> {
    let payload = serde_json::to_string_pretty(ledger).map_err(std::io::Error::other)?;
    write_document(dir, LEDGER_FILE, payload).await
}

pub async fn persist_goal(dir: &Path, goal: u64) -> Result<(), std::io::Error> {
    write_document(dir, GOAL_FILE, goal.to_string()).await
}

pub async fn persist_presets(dir: &Path, presets: &BTreeSet<u64>) -> Result<(), std::io::Error> {
    let amounts: Vec<u64> = presets.iter().copied().collect();
    let payload = serde_json::to_string_pretty(&amounts).map_err(std::io::Error::other)?;
    write_document(dir, PRESETS_FILE, payload).await
}
