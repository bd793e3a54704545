//! Display functions for command results

use super::formatters::{columns, meaning_heading, order_label};
use crate::commands::{LookupResult, SubwordsResult, SuggestResult};
use crate::core::WordEntry;
use colored::Colorize;

/// How much of a subword search to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubwordsView {
    /// Count only
    Count,
    /// Count and the words in columns
    #[default]
    Words,
    /// Count and each word with its meanings
    Meanings,
}

/// Print a subword search in the requested `view`
pub fn print_subwords_result(result: &SubwordsResult<'_>, view: SubwordsView) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Subwords of {}: {}",
        result.query.to_uppercase().bright_yellow().bold(),
        result.count().to_string().green().bold()
    );

    if view == SubwordsView::Count || result.solutions.is_empty() {
        return;
    }

    println!("{}", format!("Sorted by {}", order_label(&result.order)).bright_black());
    println!("{}", "─".repeat(60).cyan());

    if view == SubwordsView::Meanings {
        for entry in &result.solutions {
            println!("\n{}", entry.word.bright_yellow().bold());
            print_entry_details(entry);
        }
        return;
    }

    let width = result
        .solutions
        .iter()
        .map(|e| e.char_len())
        .max()
        .unwrap_or(0)
        + 2;
    let per_line = (60 / width).max(1);
    let words: Vec<&str> = result.solutions.iter().map(|e| e.word.as_str()).collect();
    for line in columns(&words, width, per_line) {
        println!("  {line}");
    }
}

/// Print a lookup answer with meanings and the dictionary link
pub fn print_lookup_result(result: &LookupResult<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(entry) = result.entry {
        println!("{} {}", "✅ Yes!".green().bold(), entry.word.bright_yellow().bold());
        print_entry_details(entry);
        println!("\nMore: {}", result.reference_url.underline());
    } else {
        println!(
            "{} '{}' is not in the word list",
            "❌ No!".red().bold(),
            result.query
        );
        println!("Check: {}", result.reference_url.underline());
    }
}

/// Print a suggestion draw
pub fn print_suggest_result(result: &SuggestResult<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Difficulty: {} (count {})",
        result.tier_name.bright_cyan().bold(),
        result.range
    );
    if !result.letters.is_empty() {
        println!("Containing:  {}", result.letters.to_uppercase());
    }
    println!("Candidates:  {}", result.eligible);

    match result.suggestion {
        Some(entry) => {
            println!(
                "\n🎲 {}",
                entry.word.to_uppercase().bright_yellow().bold()
            );
            print_entry_details(entry);
        }
        None => println!("\n{}", "No word matches.".red()),
    }
}

fn print_entry_details(entry: &WordEntry) {
    println!("   Frequency: {}", entry.count);
    for meaning in &entry.meanings {
        println!("   {}", meaning_heading(meaning).cyan());
        if !meaning.description.is_empty() {
            println!("      {}", meaning.description);
        }
    }
}
