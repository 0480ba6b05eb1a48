//! Terminal reviewer.
//!
//! On a terminal, single keys drive the session: space or enter reveals, `1`-`4` (or
//! `a`/`h`/`g`/`e`) rate, `q` quits. When stdin is not a terminal the same choices are read one
//! line at a time, which is how scripts and tests feed a session. End of input quits.

use colored::Colorize;
use console::{Key, Term};
use flashdeck::error::Result;
use flashdeck::model::{Card, Rating};
use flashdeck::scheduler::{format_interval, preview_intervals};
use flashdeck::session::{BackAction, FrontAction, Progress, Reviewer};
use std::io::{BufRead, IsTerminal};

pub struct TerminalReviewer {
    term: Term,
    interactive: bool,
}

impl Default for TerminalReviewer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalReviewer {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && std::io::stdin().is_terminal();
        Self { term, interactive }
    }

    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn rating_hint(card: &Card) -> String {
    let previews = preview_intervals(card);
    Rating::ALL
        .iter()
        .zip(previews)
        .map(|(rating, days)| {
            format!(
                "[{}] {} ({})",
                rating.key(),
                rating,
                format_interval(days)
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

impl Reviewer for TerminalReviewer {
    fn front(&mut self, card: &Card, progress: Progress) -> Result<FrontAction> {
        println!();
        println!(
            "{}",
            format!("{} / {}", progress.position, progress.total).dimmed()
        );
        println!("{}", card.front.bold());

        if !self.interactive {
            return Ok(match self.read_line()? {
                None => FrontAction::Quit,
                Some(line) if line.eq_ignore_ascii_case("q") => FrontAction::Quit,
                Some(_) => FrontAction::Reveal,
            });
        }

        println!("{}", "[space] show answer  [q] quit".dimmed());
        loop {
            match self.term.read_key()? {
                Key::Char(' ') | Key::Enter => return Ok(FrontAction::Reveal),
                Key::Char('q') | Key::Escape => return Ok(FrontAction::Quit),
                _ => {}
            }
        }
    }

    fn back(&mut self, card: &Card, _progress: Progress) -> Result<BackAction> {
        println!("{}", "─".repeat(32).dimmed());
        println!("{}", card.back);
        println!("{}", rating_hint(card).dimmed());

        if !self.interactive {
            loop {
                let Some(line) = self.read_line()? else {
                    return Ok(BackAction::Quit);
                };
                if line.eq_ignore_ascii_case("q") {
                    return Ok(BackAction::Quit);
                }
                match line.parse::<Rating>() {
                    Ok(rating) => return Ok(BackAction::Rate(rating)),
                    Err(e) => println!("{}", e.to_string().yellow()),
                }
            }
        }

        loop {
            match self.term.read_key()? {
                Key::Char('q') | Key::Escape => return Ok(BackAction::Quit),
                Key::Char(c) => {
                    if let Some(rating) = Rating::from_key(c) {
                        return Ok(BackAction::Rate(rating));
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn default_matches_new() {
        let (default, new) = (TerminalReviewer::default(), TerminalReviewer::new());
        assert_eq!(default.interactive, new.interactive);
    }

    #[test]
    fn hint_labels_each_rating_for_a_new_card() {
        let card = Card::new("perro".into(), "dog".into(), Utc::now());
        assert_eq!(
            rating_hint(&card),
            "[1] again (1d)  [2] hard (1d)  [3] good (3d)  [4] easy (1w)"
        );
    }
}
