use std::io::Write;

use crate::domain::Report;
use crate::error::Result;
use crate::port::Presenter;

const INDENT: &str = "   ";
const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Indented console layout, one line per node:
///
/// ```text
///    Football, Premier League
///       Arsenal - Chelsea, 2024-08-10 16:00 UTC, 12345
///          Match Odds
///             Arsenal, 1.50, 1001
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        for sport in &report.sports {
            for league in &sport.leagues {
                writeln!(out, "{INDENT}{}, {}", sport.name, league.name)?;
                for event in &league.events {
                    writeln!(
                        out,
                        "{}{}, {}, {}",
                        INDENT.repeat(2),
                        event.name,
                        event.kickoff.format(KICKOFF_FORMAT),
                        event.id
                    )?;
                    for market in &event.markets {
                        writeln!(out, "{}{}", INDENT.repeat(3), market.name)?;
                        for runner in &market.runners {
                            writeln!(
                                out,
                                "{}{}, {}, {}",
                                INDENT.repeat(4),
                                runner.name,
                                runner.price,
                                runner.id
                            )?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
