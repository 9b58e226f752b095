use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

pub const DEFAULT_GOAL_ML: u64 = 2500;

// merged with user presets at render time, never persisted
pub const BUILTIN_PRESETS_ML: [u64; 3] = [100, 400, 500];

static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    pub amount: u64,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

impl IntakeEntry {
    pub fn new(amount: u64) -> Self {
        let timestamp = Utc::now();
        let seq = ENTRY_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            amount,
            timestamp,
            id: format!("{}-{seq}", timestamp.timestamp_millis()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayRecord {
    pub total: u64,
    pub entries: Vec<IntakeEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    pub days: BTreeMap<String, DayRecord>,
}

impl Ledger {
    pub fn day(&self, date_id: &str) -> DayRecord {
        self.days.get(date_id).cloned().unwrap_or_default()
    }

    pub fn total_for(&self, date_id: &str) -> u64 {
        self.days.get(date_id).map(|record| record.total).unwrap_or(0)
    }

    pub fn add_entry(&mut self, date_id: &str, amount: u64) -> Option<DayRecord> {
        if amount == 0 {
            return None;
        }
        let record = self.days.entry(date_id.to_string()).or_default();
        record.entries.push(IntakeEntry::new(amount));
        record.total = record.total.saturating_add(amount);
        Some(record.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub ledger: Ledger,
    pub goal: u64,
    pub presets: BTreeSet<u64>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            ledger: Ledger::default(),
            goal: DEFAULT_GOAL_ML,
            presets: BTreeSet::new(),
        }
    }
}

impl AppData {
    pub fn merged_presets(&self) -> Vec<u64> {
        let mut merged: BTreeSet<u64> = BUILTIN_PRESETS_ML.into_iter().collect();
        merged.extend(self.presets.iter().copied());
        merged.into_iter().collect()
    }

    pub fn add_preset(&mut self, amount: u64) -> bool {
        if BUILTIN_PRESETS_ML.contains(&amount) {
            return false;
        }
        self.presets.insert(amount)
    }

    pub fn remove_preset(&mut self, amount: u64) -> bool {
        self.presets.remove(&amount)
    }
}

pub fn parse_positive_ml(candidate: &str) -> Option<u64> {
    candidate.trim().parse::<u64>().ok().filter(|value| *value > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Empty,
    Low,
    Medium,
    High,
    GoalMet,
}

#[derive(Debug, Deserialize)]
pub struct DrinkRequest {
    pub date: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub goal: String,
}

#[derive(Debug, Deserialize)]
pub struct PresetRequest {
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub total: u64,
    pub goal: u64,
    pub percent: u8,
    pub goal_met: bool,
    pub entries: Vec<IntakeEntry>,
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub goal: u64,
}

#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub defaults: Vec<u64>,
    pub custom: Vec<u64>,
    pub merged: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct CalendarCell {
    pub date: String,
    pub day: u32,
    pub total: u64,
    pub tier: Tier,
    pub today: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<CalendarCell>>,
}
