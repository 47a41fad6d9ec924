//! Sentiment dataset commands: group listing and per-group breakdowns.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use hub_core::sentiment::{SentimentCategory, sentiment_store};

const BAR_WIDTH: f64 = 40.0;

pub fn groups(json: bool) -> Result<()> {
    let groups = sentiment_store().groups();
    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }
    for group in &groups {
        println!("{group}");
    }
    println!("{}", format!("{} groups", groups.len()).dimmed());
    Ok(())
}

pub fn breakdown(group: &str, json: bool) -> Result<()> {
    let slices = sentiment_store().breakdown(group);
    if json {
        println!("{}", serde_json::to_string_pretty(&slices)?);
        return Ok(());
    }

    if slices.is_empty() {
        println!("No sentiment data to display for this group.");
        return Ok(());
    }

    println!("{}", group.bold());
    for slice in &slices {
        let bar = "█".repeat((slice.share * BAR_WIDTH).round() as usize);
        println!(
            "{:<10} {:>5.1}% {}",
            slice.category.label(),
            slice.share * 100.0,
            colorize(slice.category, &bar)
        );
    }
    Ok(())
}

fn colorize(category: SentimentCategory, text: &str) -> ColoredString {
    match category {
        SentimentCategory::Positive => text.green(),
        SentimentCategory::Negative => text.red(),
        SentimentCategory::Neutral => text.blue(),
        SentimentCategory::Irrelevant => text.magenta(),
    }
}
