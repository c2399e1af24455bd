//! Display functions for command results

use super::formatters::{colored_pattern, create_progress_bar};
use crate::commands::{BenchmarkResult, RankResult, SolveResult};
use crate::solver::{Outcome, ScoringPass};
use colored::Colorize;

/// Print the transcript of a solved (or failed) game
///
/// With `passes` present, each turn also shows its scoring time.
pub fn print_solve_result(result: &SolveResult, verbose: bool, passes: &[ScoringPass]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Simulation: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_dictionary {
        println!(
            "{}",
            "⚠ Target word not in dictionary list. Proceeding anyway.".yellow()
        );
    }

    for record in &result.transcript.records {
        match &record.play {
            Some(play) => {
                println!(
                    "\nTurn {}: Guess = `{}` → Feedback = `{}` {}",
                    record.turn,
                    play.guess,
                    colored_pattern(&play.feedback),
                    play.feedback.to_emoji()
                );
                if verbose {
                    println!("  Candidates: {}", play.candidates);
                    println!("  Score:      {:.3}", play.score);
                }
            }
            None => println!(
                "\nTurn {}: {} → {}",
                record.turn,
                "No guess".red(),
                "No words left".red()
            ),
        }

        if verbose
            && let Some(pass) = passes.iter().find(|p| p.turn == record.turn)
        {
            println!(
                "  Scoring:    {:.3}ms",
                pass.elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    println!();
    let turns = result.transcript.turns();
    match result.transcript.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("✅ Game finished in {turns} turns.").green().bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ No words left to guess after {turns} turns. Game failed.")
                .red()
                .bold()
        ),
        Outcome::TurnLimit => println!(
            "{}",
            format!("❌ Turn limit reached after {turns} turns. Game failed.")
                .red()
                .bold()
        ),
    }
}

/// Print the best-ranked guesses of a dictionary
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words (selection: {}) ",
        "RANKING".bright_cyan().bold(),
        result.total_candidates,
        result.selection
    );
    println!("{}", "═".repeat(60).cyan());

    if result.entries.is_empty() {
        println!("\n   No words to rank.");
        return;
    }

    println!();
    for (i, entry) in result.entries.iter().enumerate() {
        println!(
            "   {:>3}. {}  {}",
            i + 1,
            entry.word.text().to_uppercase().bright_white().bold(),
            format!("{:.3}", entry.score).bright_yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.exhausted > 0 {
        println!(
            "   No words left:    {}",
            format!("{}", result.exhausted).red()
        );
    }
    if result.turn_limited > 0 {
        println!(
            "   Turn limit:       {}",
            format!("{}", result.turn_limited).red()
        );
    }
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let mut turns: Vec<_> = result.distribution.iter().collect();
        turns.sort_unstable();
        for (&turn_count, &count) in turns {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {turn_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Hardest targets:".bright_cyan().bold());
        for (word, turns) in &result.hardest {
            println!("   {} ({turns} turns)", word.to_uppercase());
        }
    }
}
