use chrono::{Datelike, Local, NaiveDate};

use crate::models::{CalendarCell, CalendarResponse, Ledger, Tier};

pub const HIGH_TIER_ML: u64 = 1_500;
pub const MEDIUM_TIER_ML: u64 = 1_000;

pub fn date_id(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// canonical form only: parsing then re-formatting must reproduce the input
pub fn parse_date_id(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    (date_id(date) == raw).then_some(date)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    Some(first_of_next_month(year, month)?.pred_opt()?.day())
}

// Sunday-first grid: leading blanks up to the first weekday, no trailing
// padding after the last day
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Option<NaiveDate>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let count = days_in_month(year, month)?;

    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
    for day in 1..=count {
        cells.push(NaiveDate::from_ymd_opt(year, month, day));
    }
    Some(cells)
}

// goal-met wins over the volume buckets; the thresholds are strict
pub fn day_tier(total: u64, goal: u64) -> Tier {
    if total == 0 {
        Tier::Empty
    } else if total >= goal {
        Tier::GoalMet
    } else if total > HIGH_TIER_ML {
        Tier::High
    } else if total > MEDIUM_TIER_ML {
        Tier::Medium
    } else {
        Tier::Low
    }
}

pub fn progress_percent(total: u64, goal: u64) -> u8 {
    let ratio = total as f64 / goal.max(1) as f64;
    (ratio * 100.0).clamp(0.0, 100.0).round() as u8
}

pub fn build_month(
    year: i32,
    month: u32,
    ledger: &Ledger,
    goal: u64,
) -> Option<CalendarResponse> {
    build_month_at(today(), year, month, ledger, goal)
}

fn build_month_at(
    today: NaiveDate,
    year: i32,
    month: u32,
    ledger: &Ledger,
    goal: u64,
) -> Option<CalendarResponse> {
    let cells = month_grid(year, month)?
        .into_iter()
        .map(|slot| {
            slot.map(|date| {
                let id = date_id(date);
                let total = ledger.total_for(&id);
                CalendarCell {
                    day: date.day(),
                    total,
                    tier: day_tier(total, goal),
                    today: date == today,
                    date: id,
                }
            })
        })
        .collect();

    Some(CalendarResponse { year, month, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn date_ids_are_zero_padded() {
        assert_eq!(date_id(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(date_id(date(2024, 11, 28)), "2024-11-28");
    }

    #[test]
    fn instants_share_their_local_day_id() {
        // at UTC-7 the late instant falls on the next UTC day
        let tz = FixedOffset::west_opt(7 * 3600).unwrap();
        let morning = tz.with_ymd_and_hms(2024, 3, 5, 0, 5, 0).unwrap();
        let night = tz.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();
        assert_eq!(date_id(morning.date_naive()), "2024-03-05");
        assert_eq!(date_id(night.date_naive()), "2024-03-05");
    }

    #[test]
    fn parse_accepts_only_canonical_ids() {
        assert_eq!(parse_date_id("2024-03-05"), Some(date(2024, 3, 5)));
        assert_eq!(parse_date_id("2024-3-5"), None);
        assert_eq!(parse_date_id("2024-02-30"), None);
        assert_eq!(parse_date_id("2024-13-01"), None);
        assert_eq!(parse_date_id("not-a-date"), None);
        assert_eq!(parse_date_id(""), None);
    }

    #[test]
    fn month_lengths_cover_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn grid_leads_with_blanks_up_to_the_first_weekday() {
        // March 2024 starts on a Friday
        let grid = month_grid(2024, 3).unwrap();
        assert_eq!(grid.len(), 36);
        assert!(grid[..5].iter().all(|slot| slot.is_none()));
        assert_eq!(grid[5], Some(date(2024, 3, 1)));
        assert_eq!(grid[35], Some(date(2024, 3, 31)));
    }

    #[test]
    fn sunday_start_means_no_leading_blanks() {
        // February 2026 starts on a Sunday
        let grid = month_grid(2026, 2).unwrap();
        assert_eq!(grid.len(), 28);
        assert_eq!(grid[0], Some(date(2026, 2, 1)));
        assert_eq!(grid[27], Some(date(2026, 2, 28)));
    }

    #[test]
    fn tiers_use_strict_thresholds_with_goal_precedence() {
        assert_eq!(day_tier(0, 2500), Tier::Empty);
        assert_eq!(day_tier(1000, 2500), Tier::Low);
        assert_eq!(day_tier(1001, 2500), Tier::Medium);
        assert_eq!(day_tier(1500, 2500), Tier::Medium);
        assert_eq!(day_tier(1501, 2500), Tier::High);
        assert_eq!(day_tier(2499, 2500), Tier::High);
        assert_eq!(day_tier(2500, 2500), Tier::GoalMet);

        // goal-met outranks the volume buckets under a low goal
        assert_eq!(day_tier(1200, 1000), Tier::GoalMet);
        assert_eq!(day_tier(2000, 2000), Tier::GoalMet);
        assert_eq!(day_tier(2001, 2000), Tier::GoalMet);
    }

    #[test]
    fn percent_rounds_and_caps() {
        assert_eq!(progress_percent(0, 2500), 0);
        assert_eq!(progress_percent(900, 2500), 36);
        assert_eq!(progress_percent(1250, 2500), 50);
        assert_eq!(progress_percent(2500, 2500), 100);
        assert_eq!(progress_percent(9999, 2500), 100);
        assert_eq!(progress_percent(1, 2500), 0);
    }

    #[test]
    fn build_month_tints_days_from_the_ledger() {
        let mut ledger = Ledger::default();
        ledger.add_entry("2024-03-01", 900).unwrap();
        ledger.add_entry("2024-03-15", 2600).unwrap();

        let month = build_month_at(date(2024, 3, 15), 2024, 3, &ledger, 2500).unwrap();
        assert_eq!(month.year, 2024);
        assert_eq!(month.month, 3);
        assert_eq!(month.cells.len(), 36);
        assert!(month.cells[..5].iter().all(|slot| slot.is_none()));

        let first = month.cells[5].as_ref().unwrap();
        assert_eq!(first.date, "2024-03-01");
        assert_eq!(first.day, 1);
        assert_eq!(first.total, 900);
        assert_eq!(first.tier, Tier::Low);
        assert!(!first.today);

        let fifteenth = month.cells[19].as_ref().unwrap();
        assert_eq!(fifteenth.day, 15);
        assert_eq!(fifteenth.total, 2600);
        assert_eq!(fifteenth.tier, Tier::GoalMet);
        assert!(fifteenth.today);

        let second = month.cells[6].as_ref().unwrap();
        assert_eq!(second.total, 0);
        assert_eq!(second.tier, Tier::Empty);
    }

    #[test]
    fn build_month_rejects_impossible_months() {
        let ledger = Ledger::default();
        assert!(build_month_at(date(2024, 3, 15), 2024, 13, &ledger, 2500).is_none());
        assert!(build_month_at(date(2024, 3, 15), 2024, 0, &ledger, 2500).is_none());
    }
}
