use chrono::{DateTime, Utc};
use colored::Colorize;
use flashdeck::api::{CmdMessage, DeckSummary, MessageLevel, StatsReport};
use flashdeck::config::FlashdeckConfig;
use flashdeck::model::Card;
use flashdeck::scheduler::format_interval;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const FRONT_WIDTH: usize = 48;
const BAR_WIDTH: usize = 40;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_decks(decks: &[DeckSummary]) {
    if decks.is_empty() {
        println!("No decks found. Import one with `flashdeck import <file.json>`.");
        return;
    }

    let name_width = LINE_WIDTH.saturating_sub(30);
    for deck in decks {
        let idx = format!("{:>3}. ", deck.index);
        let name = truncate_to_width(&deck.name, name_width);
        let padding = name_width.saturating_sub(name.width());
        let due = format!("{} due", deck.due);
        let due = if deck.due > 0 {
            due.cyan().bold()
        } else {
            due.dimmed()
        };
        println!(
            "{}{}{}  {:>6} cards  {}",
            idx.yellow(),
            name,
            " ".repeat(padding),
            deck.total,
            due
        );
    }
}

pub fn print_cards(cards: &[Card], now: DateTime<Utc>) {
    if cards.is_empty() {
        println!("This deck has no cards.");
        return;
    }

    for card in cards {
        let front = truncate_to_width(&card.front.replace('\n', " "), FRONT_WIDTH);
        let padding = FRONT_WIDTH.saturating_sub(front.width());
        let due = if card.is_due(now) {
            "due".cyan().bold()
        } else {
            let days = (card.next_review - now).num_days();
            format!("in {}", format_interval(days.max(1))).normal()
        };
        let last = match card.last_reviewed {
            Some(at) => format_time_ago(at, now),
            None => "new".to_string(),
        };
        println!(
            "  {}{}  {:>7.1}d  ease {:.2}  {:>8}  {}",
            front,
            " ".repeat(padding),
            card.interval,
            card.ease_factor,
            due,
            last.dimmed()
        );
    }
}

pub fn print_stats(stats: &StatsReport) {
    println!("{:>14} {}", "Decks:".bold(), stats.total_decks);
    println!("{:>14} {}", "Cards:".bold(), stats.total_cards);
    println!("{:>14} {}", "Due now:".bold(), stats.due_now);
    println!("{:>14} {}", "Reviews:".bold(), stats.total_reviews);
    println!();

    let max = stats.history.iter().map(|log| log.count).max().unwrap_or(0);
    for log in &stats.history {
        let bar_len = if max == 0 {
            0
        } else {
            (log.count as usize * BAR_WIDTH).div_ceil(max as usize)
        };
        println!(
            "  {}  {} {}",
            log.date.format("%a %m-%d").to_string().dimmed(),
            "█".repeat(bar_len).green(),
            log.count
        );
    }
}

pub fn print_config(config: &FlashdeckConfig) {
    println!("stats-days = {}", config.stats_days);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
