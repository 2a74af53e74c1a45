//! Output formatting for CLI

use crate::coordinator::{GameMode, Session};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the running statistics and the recent-game history
pub fn print_session(session: &Session, mode: GameMode) {
    if mode == GameMode::HumanVsAi {
        let stats = session.stats();
        print_subsection("Statistics");
        print_kv("Wins", &stats.wins.to_string());
        print_kv("Losses", &stats.losses.to_string());
        print_kv("Draws", &stats.draws.to_string());
        print_kv("Current streak", &stats.current_streak.to_string());
        print_kv("Best streak", &stats.max_streak.to_string());
    }

    print_subsection("Recent games");
    for record in session.history() {
        println!(
            "  {}  {:10} {:16} {} moves",
            record.finished_at.format("%H:%M:%S"),
            record.result,
            record.difficulty,
            record.moves
        );
    }
}
