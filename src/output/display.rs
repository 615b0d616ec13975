//! Display functions for command results

use super::formatters::{bracket_notation, colored_guess, create_progress_bar};
use crate::commands::{AnalysisResult, CheckResult, FilterResult};
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the feedback for one guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_yellow().bold(),
        result.secret.text().bright_yellow().bold()
    );
    println!("   {}", colored_guess(&result.guess, &result.feedback));
    println!("   {}", result.feedback.to_emoji());
    println!("   {}", bracket_notation(&result.guess, &result.feedback));

    if result.feedback.is_solved() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print the words left after filtering, at most `limit` of them
pub fn print_filter_result(result: &FilterResult, limit: usize) {
    print_header("CANDIDATES");

    println!();
    for observation in &result.observations {
        println!(
            "   {}  {}",
            colored_guess(&observation.guess, &observation.feedback),
            observation.feedback.to_emoji()
        );
    }

    let constraints = &result.constraints;
    let pattern: String = (0..constraints.word_length())
        .map(|pos| constraints.required_at(pos).map_or('_', char::from))
        .collect();
    println!("\n🔒 Known positions: {}", pattern.bright_green().bold());
    println!(
        "🔎 In word:         {}",
        constraints.present_letters().to_string().yellow()
    );
    println!(
        "🚫 Not in word:     {}",
        constraints.absent_letters().to_string().bright_black()
    );

    let count = result.candidates.len();
    let bar = create_progress_bar(count as f64, result.total_words as f64, 30);
    println!(
        "\n📊 {} of {} words remain  [{}]",
        count.to_string().bright_yellow().bold(),
        result.total_words,
        bar.green()
    );

    if count == 0 {
        println!("\n{}", "No word matches these observations".red());
        return;
    }

    println!();
    for chunk in result.candidates.iter().take(limit).collect::<Vec<_>>().chunks(8) {
        let line: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
        println!("   {}", line.join("  "));
    }
    if count > limit {
        println!("   {}", format!("... and {} more", count - limit).bright_black());
    }
}

/// Print aggregate statistics for a sequence of opening guesses
pub fn print_analysis_result(result: &AnalysisResult) {
    let openers: Vec<&str> = result.openers.iter().map(|w| w.text()).collect();
    print_header(&format!("OPENER ANALYSIS: {}", openers.join(" → ")));

    println!("\n📊 Against {} secrets:", result.total_secrets);
    for (word, average) in result.openers.iter().zip(&result.average_remaining) {
        let bar = create_progress_bar(*average, result.total_secrets as f64, 30);
        println!(
            "   after {}:  [{}] {}",
            word,
            bar.green(),
            format!("{average:.1} candidates").bright_yellow()
        );
    }

    println!(
        "\n   Narrowed to one:  {}",
        format!("{}", result.solved).green()
    );
    if let Some((word, count)) = &result.worst {
        println!(
            "   Worst case:       {} ({} candidates)",
            word.text().yellow(),
            count
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Final candidates:".bright_cyan().bold());
    for (&remaining, &secrets) in result.distribution.iter().take(10) {
        let pct = if result.total_secrets == 0 {
            0.0
        } else {
            (secrets as f64 / result.total_secrets as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {remaining:4}: {} {secrets:5} ({pct:5.1}%)", bar.green());
    }
    if result.distribution.len() > 10 {
        println!("   {}", "...".bright_black());
    }

    if !result.unsound.is_empty() {
        let words: Vec<&str> = result.unsound.iter().map(|w| w.text()).collect();
        println!(
            "\n{} {}",
            "❌ Secrets rejected by their own constraints:".red().bold(),
            words.join(", ")
        );
    }
}
