//! Survey browsing commands: listings, filtering, and the spotlight view.

use anyhow::Result;
use colored::Colorize;
use hub_core::survey::{FilterState, survey_store};

pub fn countries(json: bool) -> Result<()> {
    let countries = survey_store().countries();
    if json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
        return Ok(());
    }
    for country in &countries {
        println!("{country}");
    }
    println!("{}", format!("{} countries", countries.len()).dimmed());
    Ok(())
}

pub fn years(json: bool) -> Result<()> {
    let years = survey_store().year_options();
    if json {
        println!("{}", serde_json::to_string_pretty(&years)?);
        return Ok(());
    }
    for year in &years {
        println!("{year}");
    }
    Ok(())
}

pub fn filter(filter: &FilterState, json: bool) -> Result<()> {
    let records = survey_store().evaluate(filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No happiness data available for the selected criteria.");
        return Ok(());
    }

    let mut header = format!("{:<34} {:>5} {:>7}", "country", "year", "score");
    for determinant in &filter.selected_determinants {
        header.push_str(&format!(" {:>25}", determinant.info().key));
    }
    println!("{}", header.bold());

    for record in &records {
        let mut line = format!(
            "{:<34} {:>5} {:>7.3}",
            record.country, record.year, record.happiness_score
        );
        for determinant in &filter.selected_determinants {
            line.push_str(&format!(" {:>25.2}", determinant.value_of(record)));
        }
        println!("{line}");
    }
    println!("{}", format!("{} records", records.len()).dimmed());
    Ok(())
}

pub fn spotlight(filter: &FilterState, json: bool) -> Result<()> {
    let spotlight = survey_store().resolve_spotlight(filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&spotlight)?);
        return Ok(());
    }

    match spotlight {
        Some(record) => {
            println!(
                "{}",
                format!("{:.3}", record.happiness_score).green().bold()
            );
            println!("For {} ({})", record.country, record.year);
        }
        None => println!("{}", spotlight_message(filter)),
    }
    Ok(())
}

/// Guidance shown when no spotlight record resolves, mirroring the filter
/// state the user would have to change.
fn spotlight_message(filter: &FilterState) -> String {
    if filter.countries.is_empty() && filter.year.is_all() {
        return "Select a single country and a specific year to display its happiness score."
            .to_string();
    }
    if filter.countries.is_empty() {
        return "Select a single country to display its happiness score.".to_string();
    }
    if filter.countries.len() > 1 {
        return "Multiple countries selected. Please select a single country to see its specific happiness score."
            .to_string();
    }
    if filter.year.is_all() {
        return format!(
            "Select a specific year for {} to display its happiness score.",
            filter.countries[0]
        );
    }
    format!(
        "No happiness data available for {} in {}.",
        filter.countries[0], filter.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::survey::YearSelection;

    #[test]
    fn test_spotlight_message_per_filter_shape() {
        let base = FilterState::default();
        assert!(spotlight_message(&base).starts_with("Select a single country and a specific year"));

        let year_only = FilterState {
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert_eq!(
            spotlight_message(&year_only),
            "Select a single country to display its happiness score."
        );

        let two_countries = FilterState {
            countries: vec!["Finland".to_string(), "Denmark".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert!(spotlight_message(&two_countries).starts_with("Multiple countries selected."));

        let all_years = FilterState {
            countries: vec!["Finland".to_string()],
            ..FilterState::default()
        };
        assert_eq!(
            spotlight_message(&all_years),
            "Select a specific year for Finland to display its happiness score."
        );

        let no_match = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(1990),
            ..FilterState::default()
        };
        assert_eq!(
            spotlight_message(&no_match),
            "No happiness data available for Finland in 1990."
        );
    }
}
