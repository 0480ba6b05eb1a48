use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ReviewLog;
use crate::store::DataStore;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub total_decks: usize,
    pub total_cards: usize,
    pub due_now: usize,
    pub total_reviews: u64,
    /// One entry per day, oldest first, ending today. Days without reviews count 0.
    pub history: Vec<ReviewLog>,
}

pub fn run<S: DataStore>(store: &S, days: usize, now: DateTime<Utc>) -> Result<CmdResult> {
    let decks = store.list_decks()?;
    let logs = store.review_logs()?;
    let today = now.date_naive();

    let history = (0..days as i64)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            logs.iter()
                .find(|log| log.date == date)
                .copied()
                .unwrap_or_else(|| ReviewLog::new(date))
        })
        .collect();

    let report = StatsReport {
        total_decks: decks.len(),
        total_cards: decks.iter().map(|d| d.cards.len()).sum(),
        due_now: decks.iter().map(|d| d.due_count(now)).sum(),
        total_reviews: logs.iter().map(|log| u64::from(log.count)).sum(),
        history,
    };
    Ok(CmdResult::default().with_stats(report))
}
