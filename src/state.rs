use crate::models::{
    parse_positive_ml, AppData, DayRecord, PresetsResponse, BUILTIN_PRESETS_ML,
};
use crate::storage::{persist_goal, persist_ledger, persist_presets};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::error;

// mutations hold the lock across the write-back so persisted snapshots land
// in mutation order; failed writes are logged and swallowed
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn goal(&self) -> u64 {
        self.data.lock().await.goal
    }

    pub async fn add_entry(&self, date_id: &str, amount: u64) -> Option<DayRecord> {
        let mut data = self.data.lock().await;
        let record = data.ledger.add_entry(date_id, amount)?;
        if let Err(err) = persist_ledger(&self.data_dir, &data.ledger).await {
            error!("failed to persist ledger: {err}");
        }
        Some(record)
    }

    pub async fn set_goal(&self, candidate: &str) -> Option<u64> {
        let goal = parse_positive_ml(candidate)?;
        let mut data = self.data.lock().await;
        data.goal = goal;
        if let Err(err) = persist_goal(&self.data_dir, goal).await {
            error!("failed to persist goal: {err}");
        }
        Some(goal)
    }

    // duplicates return the unchanged lists without touching disk
    pub async fn add_preset(&self, candidate: &str) -> Option<PresetsResponse> {
        let amount = parse_positive_ml(candidate)?;
        let mut data = self.data.lock().await;
        if data.add_preset(amount) {
            if let Err(err) = persist_presets(&self.data_dir, &data.presets).await {
                error!("failed to persist presets: {err}");
            }
        }
        Some(preset_lists(&data))
    }

    pub async fn remove_preset(&self, amount: u64) -> PresetsResponse {
        let mut data = self.data.lock().await;
        if data.remove_preset(amount) {
            if let Err(err) = persist_presets(&self.data_dir, &data.presets).await {
                error!("failed to persist presets: {err}");
            }
        }
        preset_lists(&data)
    }
}

pub fn preset_lists(data: &AppData) -> PresetsResponse {
    PresetsResponse {
        defaults: BUILTIN_PRESETS_ML.to_vec(),
        custom: data.presets.iter().copied().collect(),
        merged: data.merged_presets(),
    }
}
