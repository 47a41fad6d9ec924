//! Ad-hoc sentiment analysis via the external AI service.

use anyhow::{Result, bail};
use colored::Colorize;
use hub_core::HubError;
use hub_core::post::{seed_post, seed_posts};
use hub_core::sentiment::SentimentCategory;
use hub_interaction::{AnalysisError, GeminiSentimentAgent, SentimentAnalyzer, SentimentVerdict};

pub fn posts(json: bool) -> Result<()> {
    let posts = seed_posts();
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }
    for post in posts {
        let origin = match (&post.country, post.year) {
            (Some(country), Some(year)) => format!(" ({country}, {year})"),
            (Some(country), None) => format!(" ({country})"),
            _ => String::new(),
        };
        println!("{}{} {}", post.id.bold(), origin.dimmed(), post.text);
    }
    Ok(())
}

pub async fn run(text: Option<&str>, post_id: Option<&str>, json: bool) -> Result<()> {
    let text = match (text, post_id) {
        (Some(text), _) => text.to_string(),
        (None, Some(id)) => match seed_post(id) {
            Some(post) => post.text.clone(),
            None => return Err(HubError::not_found("seed post", id).into()),
        },
        (None, None) => {
            return Err(HubError::validation("provide post text or --post <id>").into());
        }
    };

    let agent = GeminiSentimentAgent::try_from_env()?;

    match agent.analyze(&text).await {
        Ok(verdict) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                render_verdict(&verdict);
            }
            Ok(())
        }
        Err(AnalysisError::InvalidInput(_)) => {
            bail!("Please enter some text to analyze.")
        }
        Err(err) => {
            tracing::error!("sentiment analysis failed: {err}");
            bail!("Failed to analyze sentiment. Please try again.")
        }
    }
}

fn render_verdict(verdict: &SentimentVerdict) {
    let label = verdict.sentiment_label.to_lowercase();
    let badge = match verdict.category() {
        Some(SentimentCategory::Positive) => label.green().bold(),
        Some(SentimentCategory::Negative) => label.red().bold(),
        Some(SentimentCategory::Neutral) => label.blue().bold(),
        Some(SentimentCategory::Irrelevant) => label.magenta().bold(),
        None => label.bold(),
    };
    println!("Sentiment: {badge}");
    println!("Score:     {:.2}", verdict.sentiment_score);
    println!("Summary:   {}", verdict.summary);
}
