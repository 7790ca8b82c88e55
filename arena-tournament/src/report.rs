//! Text leaderboards
//!
//! Level 4 - Utilities

use std::fmt::Write;

use crate::tournament::{RoundReport, TournamentResult};

const WIDTH: usize = 40;

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(WIDTH);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:^width$}", title, width = WIDTH);
    let _ = writeln!(out, "{}", rule);
}

fn footer(out: &mut String) {
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out);
}

/// Round leaderboard: rank, name and round score, best first
pub fn format_leaderboard(report: &RoundReport) -> String {
    let mut out = String::new();
    banner(&mut out, "Leaderboard");
    for (rank, standing) in report.leaderboard().iter().enumerate() {
        let _ = writeln!(out, "{:2}. {:<30} {:>5}", rank + 1, standing.name, standing.score);
    }
    footer(&mut out);
    out
}

/// Final ranking, tournament winner first
pub fn format_final_leaderboard(result: &TournamentResult) -> String {
    let mut out = String::new();
    banner(&mut out, "Final Leaderboard");
    for (rank, name) in result.ranking().iter().enumerate() {
        let _ = writeln!(out, "{:2}. {:<30}", rank + 1, name);
    }
    footer(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::Standing;

    fn report() -> RoundReport {
        RoundReport {
            round: 1,
            standings: vec![
                Standing { name: "alice".into(), score: 2.0 },
                Standing { name: "bob".into(), score: -4.0 },
                Standing { name: "carol".into(), score: 2.0 },
            ],
            pairings: Vec::new(),
            eliminated: "bob".into(),
        }
    }

    #[test]
    fn test_leaderboard_layout() {
        let text = format_leaderboard(&report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(40));
        assert_eq!(lines[2].trim(), "Leaderboard");
        assert_eq!(lines[2].len(), 40);
        assert_eq!(lines[4], format!(" 1. {:<30}     2", "alice"));
        assert_eq!(lines[5], format!(" 2. {:<30}     2", "carol"));
        assert_eq!(lines[6], format!(" 3. {:<30}    -4", "bob"));
        assert_eq!(lines[7], "=".repeat(40));
    }

    #[test]
    fn test_final_leaderboard_puts_winner_first() {
        let result = TournamentResult {
            rounds: vec![report()],
            elimination_order: vec!["bob".into(), "carol".into(), "alice".into()],
        };
        let text = format_final_leaderboard(&result);

        assert!(text.contains("Final Leaderboard"));
        let ranked: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with(' '))
            .filter(|l| l.contains('.'))
            .collect();
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].starts_with(" 1. alice"));
        assert!(ranked[2].starts_with(" 3. bob"));
    }
}
