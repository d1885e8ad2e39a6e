use std::fmt::Write;

use crate::score::Ranking;

/// Default first line of the shared results message.
pub const SHARE_HEADER: &str = "Bull’s Dare Eye — Results:";

/// Shown in place of the winner's name when nobody played.
pub const NO_WINNER: &str = "-";

/// Render a ranking as plain text: one `"<rank>. <name> — <points>"` line
/// per player, then a `Winner:` line.
pub fn format_ranking(ranking: &Ranking) -> String {
    let mut out = String::new();
    for (i, entry) in ranking.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}. {} — {}", i + 1, entry.name, entry.points);
    }
    let winner = ranking.winner().map(|w| w.name.as_str()).unwrap_or(NO_WINNER);
    let _ = write!(out, "Winner: {winner}");
    out
}

/// The text handed to the share target.
pub fn share_message(ranking: &Ranking, header: &str) -> String {
    format!("{header}\n{}", format_ranking(ranking))
}
