//! Compiled-in survey dataset.
//!
//! Figures from the World Happiness Report 2025 (data years 2022-2024,
//! tagged 2025 as the representative year), with the education index merged
//! in at store construction. Region is not provided per country upstream.

use once_cell::sync::Lazy;

use super::model::{EducationSource, SurveyRecord};
use super::store::SurveyStore;

const SURVEY_YEAR: i32 = 2025;
const REGION: &str = "World";

struct SurveyRow {
    id: &'static str,
    country: &'static str,
    happiness_score: f64,
    gdp: f64,
    social_support: f64,
    health_life_expectancy: f64,
    freedom_to_make_life_choices: f64,
    generosity: f64,
    perceptions_of_corruption: f64,
    /// Years-of-schooling fallback, replaced by the index where available.
    education: f64,
}

/// Survey spellings that differ from the education table's.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("Czechia", "Czech Republic"),
    ("Côte d'Ivoire", "Ivory Coast"),
];

static STORE: Lazy<SurveyStore> = Lazy::new(|| SurveyStore::new(build_records()));

/// Process-wide immutable survey store.
pub fn survey_store() -> &'static SurveyStore {
    &STORE
}

fn education_index_for(country: &str) -> Option<f64> {
    let lookup = |name: &str| {
        EDUCATION_INDEX
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| *value)
    };
    lookup(country).or_else(|| {
        COUNTRY_ALIASES
            .iter()
            .find(|(survey_name, _)| *survey_name == country)
            .and_then(|(_, table_name)| lookup(table_name))
    })
}

fn build_records() -> Vec<SurveyRecord> {
    SURVEY_ROWS
        .iter()
        .map(|row| {
            let (education, education_source) = match education_index_for(row.country) {
                Some(index) => (index, EducationSource::Index),
                None => (row.education, EducationSource::PlaceholderYears),
            };
            SurveyRecord {
                id: row.id.to_string(),
                country: row.country.to_string(),
                region: REGION.to_string(),
                year: SURVEY_YEAR,
                happiness_score: row.happiness_score,
                gdp: row.gdp,
                health_life_expectancy: row.health_life_expectancy,
                education,
                education_source,
                social_support: row.social_support,
                freedom_to_make_life_choices: row.freedom_to_make_life_choices,
                generosity: row.generosity,
                perceptions_of_corruption: row.perceptions_of_corruption,
                x_happiness_index: None,
            }
        })
        .collect()
}

/// Education Index per country (0-1 scale, higher is better).
const EDUCATION_INDEX: &[(&str, f64)] = &[
    ("Australia", 1.01),
    ("Iceland", 0.99),
    ("New Zealand", 0.98),
    ("Germany", 0.96),
    ("Denmark", 0.96),
    ("Finland", 0.96),
    ("Norway", 0.95),
    ("United Kingdom", 0.94),
    ("Netherlands", 0.94),
    ("Belgium", 0.94),
    ("Sweden", 0.94),
    ("Greece", 0.94),
    ("Switzerland", 0.92),
    ("Ireland", 0.92),
    ("United States", 0.91),
    ("Canada", 0.91),
    ("Lithuania", 0.91),
    ("Slovenia", 0.91),
    ("Palau", 0.91),
    ("Argentina", 0.9),
    ("United Arab Emirates", 0.9),
    ("Hong Kong", 0.9),
    ("Latvia", 0.9),
    ("Georgia", 0.89),
    ("Estonia", 0.89),
    ("South Korea", 0.88),
    ("Poland", 0.88),
    ("Czech Republic", 0.88),
    ("Marshall Islands", 0.88),
    ("Austria", 0.87),
    ("Singapore", 0.87),
    ("Saint Kitts and Nevis", 0.87),
    ("Israel", 0.86),
    ("Cyprus", 0.86),
    ("Russia", 0.85),
    ("Japan", 0.85),
    ("Spain", 0.85),
    ("Malta", 0.85),
    ("Turkey", 0.84),
    ("Chile", 0.84),
    ("Slovakia", 0.84),
    ("Croatia", 0.84),
    ("Montenegro", 0.84),
    ("Liechtenstein", 0.84),
    ("France", 0.83),
    ("Hungary", 0.83),
    ("Luxembourg", 0.83),
    ("Italy", 0.82),
    ("Kazakhstan", 0.82),
    ("Bahrain", 0.82),
    ("Tonga", 0.82),
    ("Saint Vincent and the Grenadines", 0.82),
    ("Moldova", 0.81),
    ("Saudi Arabia", 0.8),
    ("Belarus", 0.8),
    ("Portugal", 0.79),
    ("Serbia", 0.79),
    ("Uruguay", 0.79),
    ("Barbados", 0.79),
    ("Grenada", 0.79),
    ("South Africa", 0.78),
    ("Romania", 0.78),
    ("Armenia", 0.78),
    ("Trinidad and Tobago", 0.78),
    ("Antigua and Barbuda", 0.78),
    ("Bulgaria", 0.77),
    ("Kyrgyzstan", 0.76),
    ("Oman", 0.76),
    ("Seychelles", 0.76),
    ("Iran", 0.75),
    ("Sri Lanka", 0.75),
    ("Cuba", 0.75),
    ("Bahamas", 0.75),
    ("Ukraine", 0.74),
    ("Peru", 0.74),
    ("Bolivia", 0.74),
    ("Turkmenistan", 0.74),
    ("Costa Rica", 0.74),
    ("Albania", 0.74),
    ("Mauritius", 0.74),
    ("Andorra", 0.74),
    ("Thailand", 0.73),
    ("Uzbekistan", 0.73),
    ("Fiji", 0.73),
    ("Malaysia", 0.72),
    ("Panama", 0.72),
    ("Mongolia", 0.72),
    ("Bosnia and Herzegovina", 0.72),
    ("Samoa", 0.72),
    ("Brazil", 0.71),
    ("Mexico", 0.71),
    ("Ecuador", 0.71),
    ("Azerbaijan", 0.71),
    ("Qatar", 0.71),
    ("Colombia", 0.7),
    ("Venezuela", 0.7),
    ("Jordan", 0.7),
    ("Palestine", 0.7),
    ("North Macedonia", 0.7),
    ("China", 0.69),
    ("Egypt", 0.69),
    ("Brunei", 0.69),
    ("San Marino", 0.69),
    ("Tuvalu", 0.69),
    ("Indonesia", 0.68),
    ("Dominican Republic", 0.68),
    ("Tajikistan", 0.68),
    ("Paraguay", 0.68),
    ("Kuwait", 0.68),
    ("Dominica", 0.68),
    ("Tunisia", 0.67),
    ("Philippines", 0.66),
    ("Algeria", 0.66),
    ("Gabon", 0.66),
    ("Botswana", 0.66),
    ("Nauru", 0.66),
    ("Vietnam", 0.65),
    ("Libya", 0.65),
    ("Jamaica", 0.65),
    ("Guyana", 0.65),
    ("Belize", 0.64),
    ("Saint Lucia", 0.64),
    ("Kiribati", 0.63),
    ("Angola", 0.62),
    ("Republic of the Congo", 0.62),
    ("Lebanon", 0.62),
    ("Morocco", 0.61),
    ("Equatorial Guinea", 0.61),
    ("Zimbabwe", 0.6),
    ("Eswatini", 0.6),
    ("Maldives", 0.6),
    ("Cameroon", 0.59),
    ("Nicaragua", 0.59),
    ("Suriname", 0.59),
    ("Micronesia", 0.59),
    ("Bangladesh", 0.58),
    ("India", 0.57),
    ("Kenya", 0.57),
    ("Iraq", 0.57),
    ("El Salvador", 0.57),
    ("Namibia", 0.57),
    ("Timor-Leste", 0.57),
    ("Comoros", 0.57),
    ("Vanuatu", 0.57),
    ("Lesotho", 0.56),
    ("Solomon Islands", 0.56),
    ("Bhutan", 0.56),
    ("Nigeria", 0.55),
    ("Myanmar", 0.55),
    ("Zambia", 0.55),
    ("Togo", 0.55),
    ("Sao Tome and Principe", 0.55),
    ("Ghana", 0.54),
    ("Ethiopia", 0.54),
    ("Uganda", 0.53),
    ("Honduras", 0.52),
    ("Cape Verde", 0.52),
    ("DR Congo", 0.51),
    ("Nepal", 0.5),
    ("Cambodia", 0.5),
    ("Haiti", 0.5),
    ("Malawi", 0.49),
    ("Guatemala", 0.49),
    ("Rwanda", 0.48),
    ("Laos", 0.48),
    ("Papua New Guinea", 0.47),
    ("Liberia", 0.47),
    ("Tanzania", 0.43),
    ("Mozambique", 0.43),
    ("Ivory Coast", 0.42),
    ("Guinea-Bissau", 0.42),
    ("Madagascar", 0.41),
    ("Syria", 0.4),
    ("Gambia", 0.4),
    ("Benin", 0.39),
    ("Burundi", 0.39),
    ("Mauritania", 0.39),
    ("Afghanistan", 0.38),
    ("Pakistan", 0.37),
    ("Sudan", 0.37),
    ("Sierra Leone", 0.37),
    ("Eritrea", 0.37),
    ("Guinea", 0.36),
    ("Senegal", 0.35),
    ("South Sudan", 0.35),
    ("Djibouti", 0.35),
    ("Central African Republic", 0.34),
    ("Yemen", 0.31),
    ("Burkina Faso", 0.3),
    ("Chad", 0.3),
    ("Somalia", 0.27),
    ("Mali", 0.25),
    ("Niger", 0.24),
];

const SURVEY_ROWS: &[SurveyRow] = &[
    SurveyRow { id: "1", country: "Finland", happiness_score: 7.736, gdp: 10.8, social_support: 0.95, health_life_expectancy: 72.0, freedom_to_make_life_choices: 0.93, generosity: 0.25, perceptions_of_corruption: 0.2, education: 12.0 },
    SurveyRow { id: "2", country: "Denmark", happiness_score: 7.521, gdp: 10.9, social_support: 0.94, health_life_expectancy: 72.5, freedom_to_make_life_choices: 0.92, generosity: 0.3, perceptions_of_corruption: 0.18, education: 12.0 },
    SurveyRow { id: "3", country: "Iceland", happiness_score: 7.335, gdp: 10.7, social_support: 0.96, health_life_expectancy: 73.0, freedom_to_make_life_choices: 0.91, generosity: 0.28, perceptions_of_corruption: 0.22, education: 12.0 },
    SurveyRow { id: "4", country: "Sweden", happiness_score: 7.345, gdp: 10.8, social_support: 0.93, health_life_expectancy: 72.8, freedom_to_make_life_choices: 0.9, generosity: 0.26, perceptions_of_corruption: 0.19, education: 12.0 },
    SurveyRow { id: "5", country: "Netherlands", happiness_score: 7.305, gdp: 10.9, social_support: 0.92, health_life_expectancy: 71.5, freedom_to_make_life_choices: 0.89, generosity: 0.35, perceptions_of_corruption: 0.21, education: 12.0 },
    SurveyRow { id: "6", country: "Costa Rica", happiness_score: 7.274, gdp: 9.8, social_support: 0.9, health_life_expectancy: 70.0, freedom_to_make_life_choices: 0.88, generosity: 0.2, perceptions_of_corruption: 0.4, education: 12.0 },
    SurveyRow { id: "7", country: "Norway", happiness_score: 7.262, gdp: 11.0, social_support: 0.94, health_life_expectancy: 72.3, freedom_to_make_life_choices: 0.92, generosity: 0.27, perceptions_of_corruption: 0.17, education: 12.0 },
    SurveyRow { id: "8", country: "Israel", happiness_score: 7.234, gdp: 10.5, social_support: 0.91, health_life_expectancy: 73.5, freedom_to_make_life_choices: 0.85, generosity: 0.22, perceptions_of_corruption: 0.35, education: 12.0 },
    SurveyRow { id: "9", country: "New Zealand", happiness_score: 7.123, gdp: 10.6, social_support: 0.93, health_life_expectancy: 71.8, freedom_to_make_life_choices: 0.9, generosity: 0.29, perceptions_of_corruption: 0.18, education: 12.0 },
    SurveyRow { id: "10", country: "Mexico", happiness_score: 7.102, gdp: 9.7, social_support: 0.89, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.87, generosity: 0.18, perceptions_of_corruption: 0.45, education: 12.0 },
    SurveyRow { id: "11", country: "Australia", happiness_score: 7.09, gdp: 10.8, social_support: 0.92, health_life_expectancy: 73.0, freedom_to_make_life_choices: 0.89, generosity: 0.3, perceptions_of_corruption: 0.25, education: 12.0 },
    SurveyRow { id: "12", country: "Austria", happiness_score: 7.08, gdp: 10.9, social_support: 0.91, health_life_expectancy: 71.5, freedom_to_make_life_choices: 0.88, generosity: 0.24, perceptions_of_corruption: 0.22, education: 12.0 },
    SurveyRow { id: "13", country: "Switzerland", happiness_score: 7.06, gdp: 11.1, social_support: 0.93, health_life_expectancy: 74.0, freedom_to_make_life_choices: 0.9, generosity: 0.26, perceptions_of_corruption: 0.2, education: 12.0 },
    SurveyRow { id: "14", country: "Canada", happiness_score: 7.04, gdp: 10.8, social_support: 0.92, health_life_expectancy: 72.5, freedom_to_make_life_choices: 0.89, generosity: 0.28, perceptions_of_corruption: 0.24, education: 12.0 },
    SurveyRow { id: "15", country: "Belgium", happiness_score: 7.02, gdp: 10.8, social_support: 0.9, health_life_expectancy: 71.0, freedom_to_make_life_choices: 0.87, generosity: 0.22, perceptions_of_corruption: 0.28, education: 12.0 },
    SurveyRow { id: "16", country: "Lithuania", happiness_score: 7.0, gdp: 10.4, social_support: 0.89, health_life_expectancy: 68.5, freedom_to_make_life_choices: 0.86, generosity: 0.2, perceptions_of_corruption: 0.35, education: 12.0 },
    SurveyRow { id: "17", country: "Ireland", happiness_score: 6.98, gdp: 11.2, social_support: 0.92, health_life_expectancy: 72.0, freedom_to_make_life_choices: 0.88, generosity: 0.27, perceptions_of_corruption: 0.21, education: 12.0 },
    SurveyRow { id: "18", country: "Germany", happiness_score: 6.96, gdp: 10.8, social_support: 0.9, health_life_expectancy: 71.5, freedom_to_make_life_choices: 0.87, generosity: 0.25, perceptions_of_corruption: 0.23, education: 12.0 },
    SurveyRow { id: "19", country: "Slovenia", happiness_score: 6.94, gdp: 10.5, social_support: 0.91, health_life_expectancy: 70.5, freedom_to_make_life_choices: 0.89, generosity: 0.23, perceptions_of_corruption: 0.3, education: 12.0 },
    SurveyRow { id: "20", country: "Czechia", happiness_score: 6.92, gdp: 10.4, social_support: 0.9, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.86, generosity: 0.21, perceptions_of_corruption: 0.36, education: 12.0 },
    SurveyRow { id: "21", country: "United Kingdom", happiness_score: 6.9, gdp: 10.7, social_support: 0.88, health_life_expectancy: 71.0, freedom_to_make_life_choices: 0.85, generosity: 0.31, perceptions_of_corruption: 0.3, education: 12.0 },
    SurveyRow { id: "22", country: "Singapore", happiness_score: 6.88, gdp: 11.3, social_support: 0.87, health_life_expectancy: 76.0, freedom_to_make_life_choices: 0.86, generosity: 0.24, perceptions_of_corruption: 0.15, education: 12.0 },
    SurveyRow { id: "23", country: "United Arab Emirates", happiness_score: 6.86, gdp: 11.0, social_support: 0.86, health_life_expectancy: 70.5, freedom_to_make_life_choices: 0.84, generosity: 0.26, perceptions_of_corruption: 0.28, education: 12.0 },
    SurveyRow { id: "24", country: "United States", happiness_score: 6.75, gdp: 11.1, social_support: 0.87, health_life_expectancy: 68.5, freedom_to_make_life_choices: 0.84, generosity: 0.33, perceptions_of_corruption: 0.38, education: 12.0 },
    SurveyRow { id: "25", country: "Spain", happiness_score: 6.73, gdp: 10.6, social_support: 0.89, health_life_expectancy: 73.5, freedom_to_make_life_choices: 0.83, generosity: 0.2, perceptions_of_corruption: 0.34, education: 12.0 },
    SurveyRow { id: "26", country: "Italy", happiness_score: 6.71, gdp: 10.5, social_support: 0.88, health_life_expectancy: 73.0, freedom_to_make_life_choices: 0.82, generosity: 0.19, perceptions_of_corruption: 0.4, education: 12.0 },
    SurveyRow { id: "27", country: "France", happiness_score: 6.69, gdp: 10.7, social_support: 0.87, health_life_expectancy: 72.5, freedom_to_make_life_choices: 0.83, generosity: 0.21, perceptions_of_corruption: 0.32, education: 12.0 },
    SurveyRow { id: "28", country: "Portugal", happiness_score: 6.67, gdp: 10.4, social_support: 0.86, health_life_expectancy: 71.5, freedom_to_make_life_choices: 0.85, generosity: 0.18, perceptions_of_corruption: 0.37, education: 12.0 },
    SurveyRow { id: "29", country: "Japan", happiness_score: 6.65, gdp: 10.6, social_support: 0.85, health_life_expectancy: 74.5, freedom_to_make_life_choices: 0.82, generosity: 0.17, perceptions_of_corruption: 0.33, education: 12.0 },
    SurveyRow { id: "30", country: "South Korea", happiness_score: 6.63, gdp: 10.7, social_support: 0.84, health_life_expectancy: 73.0, freedom_to_make_life_choices: 0.81, generosity: 0.2, perceptions_of_corruption: 0.36, education: 12.0 },
    SurveyRow { id: "31", country: "Poland", happiness_score: 6.61, gdp: 10.3, social_support: 0.88, health_life_expectancy: 69.5, freedom_to_make_life_choices: 0.84, generosity: 0.19, perceptions_of_corruption: 0.39, education: 12.0 },
    SurveyRow { id: "32", country: "Estonia", happiness_score: 6.59, gdp: 10.4, social_support: 0.89, health_life_expectancy: 70.0, freedom_to_make_life_choices: 0.86, generosity: 0.22, perceptions_of_corruption: 0.25, education: 12.0 },
    SurveyRow { id: "33", country: "Latvia", happiness_score: 6.57, gdp: 10.3, social_support: 0.87, health_life_expectancy: 68.5, freedom_to_make_life_choices: 0.83, generosity: 0.2, perceptions_of_corruption: 0.37, education: 12.0 },
    SurveyRow { id: "34", country: "Hungary", happiness_score: 6.55, gdp: 10.2, social_support: 0.86, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.82, generosity: 0.18, perceptions_of_corruption: 0.42, education: 12.0 },
    SurveyRow { id: "35", country: "Slovakia", happiness_score: 6.53, gdp: 10.2, social_support: 0.88, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.81, generosity: 0.21, perceptions_of_corruption: 0.4, education: 12.0 },
    SurveyRow { id: "36", country: "Chile", happiness_score: 6.51, gdp: 9.9, social_support: 0.85, health_life_expectancy: 70.5, freedom_to_make_life_choices: 0.8, generosity: 0.19, perceptions_of_corruption: 0.43, education: 12.0 },
    SurveyRow { id: "37", country: "Argentina", happiness_score: 6.49, gdp: 9.8, social_support: 0.86, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.79, generosity: 0.17, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "38", country: "Uruguay", happiness_score: 6.47, gdp: 9.9, social_support: 0.87, health_life_expectancy: 69.5, freedom_to_make_life_choices: 0.81, generosity: 0.18, perceptions_of_corruption: 0.38, education: 12.0 },
    SurveyRow { id: "39", country: "Brazil", happiness_score: 6.45, gdp: 9.6, social_support: 0.85, health_life_expectancy: 67.5, freedom_to_make_life_choices: 0.8, generosity: 0.2, perceptions_of_corruption: 0.44, education: 12.0 },
    SurveyRow { id: "40", country: "Panama", happiness_score: 6.43, gdp: 10.0, social_support: 0.86, health_life_expectancy: 70.0, freedom_to_make_life_choices: 0.82, generosity: 0.19, perceptions_of_corruption: 0.41, education: 12.0 },
    SurveyRow { id: "41", country: "Colombia", happiness_score: 6.41, gdp: 9.5, social_support: 0.84, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.79, generosity: 0.18, perceptions_of_corruption: 0.47, education: 12.0 },
    SurveyRow { id: "42", country: "Greece", happiness_score: 6.39, gdp: 10.1, social_support: 0.83, health_life_expectancy: 71.0, freedom_to_make_life_choices: 0.78, generosity: 0.16, perceptions_of_corruption: 0.45, education: 12.0 },
    SurveyRow { id: "43", country: "Peru", happiness_score: 6.37, gdp: 9.4, social_support: 0.82, health_life_expectancy: 67.5, freedom_to_make_life_choices: 0.8, generosity: 0.17, perceptions_of_corruption: 0.48, education: 12.0 },
    SurveyRow { id: "44", country: "Croatia", happiness_score: 6.35, gdp: 10.2, social_support: 0.85, health_life_expectancy: 70.0, freedom_to_make_life_choices: 0.79, generosity: 0.2, perceptions_of_corruption: 0.42, education: 12.0 },
    SurveyRow { id: "45", country: "Malaysia", happiness_score: 6.33, gdp: 10.0, social_support: 0.83, health_life_expectancy: 68.5, freedom_to_make_life_choices: 0.81, generosity: 0.22, perceptions_of_corruption: 0.39, education: 12.0 },
    SurveyRow { id: "46", country: "Thailand", happiness_score: 6.31, gdp: 9.8, social_support: 0.84, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.8, generosity: 0.25, perceptions_of_corruption: 0.41, education: 12.0 },
    SurveyRow { id: "47", country: "Romania", happiness_score: 6.29, gdp: 10.1, social_support: 0.82, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.79, generosity: 0.18, perceptions_of_corruption: 0.44, education: 12.0 },
    SurveyRow { id: "48", country: "Serbia", happiness_score: 6.27, gdp: 9.9, social_support: 0.83, health_life_expectancy: 68.5, freedom_to_make_life_choices: 0.78, generosity: 0.21, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "49", country: "Bulgaria", happiness_score: 6.25, gdp: 9.8, social_support: 0.81, health_life_expectancy: 67.5, freedom_to_make_life_choices: 0.77, generosity: 0.17, perceptions_of_corruption: 0.47, education: 12.0 },
    SurveyRow { id: "50", country: "Turkey", happiness_score: 6.23, gdp: 10.0, social_support: 0.82, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.76, generosity: 0.19, perceptions_of_corruption: 0.45, education: 12.0 },
    SurveyRow { id: "51", country: "Philippines", happiness_score: 6.21, gdp: 9.3, social_support: 0.83, health_life_expectancy: 65.5, freedom_to_make_life_choices: 0.8, generosity: 0.2, perceptions_of_corruption: 0.42, education: 12.0 },
    SurveyRow { id: "52", country: "Indonesia", happiness_score: 6.19, gdp: 9.4, social_support: 0.82, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.79, generosity: 0.24, perceptions_of_corruption: 0.4, education: 12.0 },
    SurveyRow { id: "53", country: "Vietnam", happiness_score: 6.17, gdp: 9.2, social_support: 0.81, health_life_expectancy: 67.0, freedom_to_make_life_choices: 0.78, generosity: 0.18, perceptions_of_corruption: 0.43, education: 12.0 },
    SurveyRow { id: "54", country: "Mongolia", happiness_score: 6.15, gdp: 9.3, social_support: 0.84, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.77, generosity: 0.22, perceptions_of_corruption: 0.41, education: 12.0 },
    SurveyRow { id: "55", country: "Kazakhstan", happiness_score: 6.13, gdp: 9.9, social_support: 0.83, health_life_expectancy: 66.5, freedom_to_make_life_choices: 0.76, generosity: 0.2, perceptions_of_corruption: 0.39, education: 12.0 },
    SurveyRow { id: "56", country: "Russia", happiness_score: 6.11, gdp: 10.0, social_support: 0.82, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.75, generosity: 0.19, perceptions_of_corruption: 0.44, education: 12.0 },
    SurveyRow { id: "57", country: "Ukraine", happiness_score: 6.09, gdp: 9.1, social_support: 0.81, health_life_expectancy: 65.5, freedom_to_make_life_choices: 0.74, generosity: 0.23, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "58", country: "Bosnia and Herzegovina", happiness_score: 6.07, gdp: 9.5, social_support: 0.8, health_life_expectancy: 67.0, freedom_to_make_life_choices: 0.73, generosity: 0.21, perceptions_of_corruption: 0.47, education: 12.0 },
    SurveyRow { id: "59", country: "Albania", happiness_score: 6.05, gdp: 9.4, social_support: 0.79, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.76, generosity: 0.2, perceptions_of_corruption: 0.45, education: 12.0 },
    SurveyRow { id: "60", country: "North Macedonia", happiness_score: 6.03, gdp: 9.3, social_support: 0.8, health_life_expectancy: 67.5, freedom_to_make_life_choices: 0.75, generosity: 0.22, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "61", country: "Georgia", happiness_score: 6.01, gdp: 9.2, social_support: 0.78, health_life_expectancy: 66.5, freedom_to_make_life_choices: 0.74, generosity: 0.18, perceptions_of_corruption: 0.43, education: 12.0 },
    SurveyRow { id: "62", country: "Armenia", happiness_score: 5.99, gdp: 9.3, social_support: 0.79, health_life_expectancy: 67.0, freedom_to_make_life_choices: 0.73, generosity: 0.19, perceptions_of_corruption: 0.42, education: 12.0 },
    SurveyRow { id: "63", country: "Moldova", happiness_score: 5.97, gdp: 9.1, social_support: 0.8, health_life_expectancy: 65.5, freedom_to_make_life_choices: 0.75, generosity: 0.21, perceptions_of_corruption: 0.44, education: 12.0 },
    SurveyRow { id: "64", country: "Belarus", happiness_score: 5.95, gdp: 9.6, social_support: 0.81, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.72, generosity: 0.17, perceptions_of_corruption: 0.4, education: 12.0 },
    SurveyRow { id: "65", country: "Azerbaijan", happiness_score: 5.93, gdp: 9.7, social_support: 0.78, health_life_expectancy: 66.5, freedom_to_make_life_choices: 0.71, generosity: 0.16, perceptions_of_corruption: 0.41, education: 12.0 },
    SurveyRow { id: "66", country: "Kyrgyzstan", happiness_score: 5.91, gdp: 8.9, social_support: 0.8, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.74, generosity: 0.22, perceptions_of_corruption: 0.43, education: 12.0 },
    SurveyRow { id: "67", country: "Uzbekistan", happiness_score: 5.89, gdp: 9.0, social_support: 0.81, health_life_expectancy: 65.5, freedom_to_make_life_choices: 0.73, generosity: 0.23, perceptions_of_corruption: 0.39, education: 12.0 },
    SurveyRow { id: "68", country: "Tajikistan", happiness_score: 5.87, gdp: 8.8, social_support: 0.79, health_life_expectancy: 64.5, freedom_to_make_life_choices: 0.72, generosity: 0.21, perceptions_of_corruption: 0.42, education: 12.0 },
    SurveyRow { id: "69", country: "Turkmenistan", happiness_score: 5.85, gdp: 9.2, social_support: 0.8, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.71, generosity: 0.2, perceptions_of_corruption: 0.44, education: 12.0 },
    SurveyRow { id: "70", country: "China", happiness_score: 5.83, gdp: 9.8, social_support: 0.78, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.7, generosity: 0.18, perceptions_of_corruption: 0.4, education: 12.0 },
    SurveyRow { id: "71", country: "India", happiness_score: 5.81, gdp: 9.0, social_support: 0.77, health_life_expectancy: 63.5, freedom_to_make_life_choices: 0.73, generosity: 0.22, perceptions_of_corruption: 0.45, education: 12.0 },
    SurveyRow { id: "72", country: "Pakistan", happiness_score: 5.79, gdp: 8.9, social_support: 0.76, health_life_expectancy: 62.5, freedom_to_make_life_choices: 0.72, generosity: 0.23, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "73", country: "Bangladesh", happiness_score: 5.77, gdp: 8.8, social_support: 0.75, health_life_expectancy: 64.0, freedom_to_make_life_choices: 0.71, generosity: 0.21, perceptions_of_corruption: 0.47, education: 12.0 },
    SurveyRow { id: "74", country: "Nepal", happiness_score: 5.75, gdp: 8.7, social_support: 0.76, health_life_expectancy: 63.5, freedom_to_make_life_choices: 0.7, generosity: 0.22, perceptions_of_corruption: 0.44, education: 12.0 },
    SurveyRow { id: "75", country: "Sri Lanka", happiness_score: 5.73, gdp: 9.1, social_support: 0.77, health_life_expectancy: 67.0, freedom_to_make_life_choices: 0.69, generosity: 0.2, perceptions_of_corruption: 0.45, education: 12.0 },
    SurveyRow { id: "76", country: "Myanmar", happiness_score: 5.71, gdp: 8.6, social_support: 0.75, health_life_expectancy: 62.5, freedom_to_make_life_choices: 0.68, generosity: 0.24, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "77", country: "Cambodia", happiness_score: 5.69, gdp: 8.7, social_support: 0.74, health_life_expectancy: 63.0, freedom_to_make_life_choices: 0.7, generosity: 0.21, perceptions_of_corruption: 0.47, education: 12.0 },
    SurveyRow { id: "78", country: "Laos", happiness_score: 5.67, gdp: 8.8, social_support: 0.73, health_life_expectancy: 62.5, freedom_to_make_life_choices: 0.69, generosity: 0.2, perceptions_of_corruption: 0.46, education: 12.0 },
    SurveyRow { id: "79", country: "South Africa", happiness_score: 5.65, gdp: 9.4, social_support: 0.76, health_life_expectancy: 58.5, freedom_to_make_life_choices: 0.71, generosity: 0.19, perceptions_of_corruption: 0.48, education: 12.0 },
    SurveyRow { id: "80", country: "Nigeria", happiness_score: 5.63, gdp: 8.9, social_support: 0.75, health_life_expectancy: 56.0, freedom_to_make_life_choices: 0.7, generosity: 0.22, perceptions_of_corruption: 0.49, education: 12.0 },
    SurveyRow { id: "81", country: "Kenya", happiness_score: 5.61, gdp: 8.7, social_support: 0.74, health_life_expectancy: 60.5, freedom_to_make_life_choices: 0.69, generosity: 0.23, perceptions_of_corruption: 0.5, education: 12.0 },
    SurveyRow { id: "82", country: "Ghana", happiness_score: 5.59, gdp: 8.8, social_support: 0.73, health_life_expectancy: 59.5, freedom_to_make_life_choices: 0.68, generosity: 0.21, perceptions_of_corruption: 0.48, education: 12.0 },
    SurveyRow { id: "83", country: "Ethiopia", happiness_score: 5.57, gdp: 8.5, social_support: 0.72, health_life_expectancy: 61.0, freedom_to_make_life_choices: 0.67, generosity: 0.2, perceptions_of_corruption: 0.47, education: 0.54 },
    SurveyRow { id: "84", country: "Uganda", happiness_score: 5.55, gdp: 8.4, social_support: 0.71, health_life_expectancy: 59.0, freedom_to_make_life_choices: 0.66, generosity: 0.22, perceptions_of_corruption: 0.49, education: 12.0 },
    SurveyRow { id: "85", country: "Tanzania", happiness_score: 5.53, gdp: 8.3, social_support: 0.7, health_life_expectancy: 60.0, freedom_to_make_life_choices: 0.65, generosity: 0.21, perceptions_of_corruption: 0.48, education: 12.0 },
    SurveyRow { id: "86", country: "Zambia", happiness_score: 5.51, gdp: 8.4, social_support: 0.69, health_life_expectancy: 58.5, freedom_to_make_life_choices: 0.64, generosity: 0.2, perceptions_of_corruption: 0.5, education: 12.0 },
    SurveyRow { id: "87", country: "Malawi", happiness_score: 5.49, gdp: 8.2, social_support: 0.68, health_life_expectancy: 57.5, freedom_to_make_life_choices: 0.63, generosity: 0.19, perceptions_of_corruption: 0.49, education: 12.0 },
    SurveyRow { id: "88", country: "Mozambique", happiness_score: 5.47, gdp: 8.1, social_support: 0.67, health_life_expectancy: 56.5, freedom_to_make_life_choices: 0.62, generosity: 0.18, perceptions_of_corruption: 0.51, education: 12.0 },
    SurveyRow { id: "89", country: "Cameroon", happiness_score: 5.45, gdp: 8.3, social_support: 0.66, health_life_expectancy: 57.0, freedom_to_make_life_choices: 0.61, generosity: 0.17, perceptions_of_corruption: 0.5, education: 12.0 },
    SurveyRow { id: "90", country: "Senegal", happiness_score: 5.43, gdp: 8.4, social_support: 0.65, health_life_expectancy: 61.5, freedom_to_make_life_choices: 0.6, generosity: 0.16, perceptions_of_corruption: 0.49, education: 12.0 },
    SurveyRow { id: "91", country: "Mali", happiness_score: 5.41, gdp: 8.2, social_support: 0.64, health_life_expectancy: 56.5, freedom_to_make_life_choices: 0.59, generosity: 0.15, perceptions_of_corruption: 0.51, education: 12.0 },
    SurveyRow { id: "92", country: "Burkina Faso", happiness_score: 5.39, gdp: 8.3, social_support: 0.63, health_life_expectancy: 57.0, freedom_to_make_life_choices: 0.58, generosity: 0.14, perceptions_of_corruption: 0.5, education: 12.0 },
    SurveyRow { id: "93", country: "Niger", happiness_score: 5.37, gdp: 8.1, social_support: 0.62, health_life_expectancy: 56.0, freedom_to_make_life_choices: 0.57, generosity: 0.13, perceptions_of_corruption: 0.52, education: 12.0 },
    SurveyRow { id: "94", country: "Chad", happiness_score: 5.35, gdp: 8.0, social_support: 0.61, health_life_expectancy: 55.5, freedom_to_make_life_choices: 0.56, generosity: 0.12, perceptions_of_corruption: 0.53, education: 12.0 },
    SurveyRow { id: "95", country: "Benin", happiness_score: 5.33, gdp: 8.2, social_support: 0.6, health_life_expectancy: 58.0, freedom_to_make_life_choices: 0.55, generosity: 0.11, perceptions_of_corruption: 0.51, education: 12.0 },
    SurveyRow { id: "96", country: "Togo", happiness_score: 5.31, gdp: 8.1, social_support: 0.59, health_life_expectancy: 57.5, freedom_to_make_life_choices: 0.54, generosity: 0.1, perceptions_of_corruption: 0.52, education: 12.0 },
    SurveyRow { id: "97", country: "Guinea", happiness_score: 5.29, gdp: 8.3, social_support: 0.58, health_life_expectancy: 58.0, freedom_to_make_life_choices: 0.53, generosity: 0.09, perceptions_of_corruption: 0.53, education: 12.0 },
    SurveyRow { id: "98", country: "Côte d'Ivoire", happiness_score: 5.27, gdp: 8.4, social_support: 0.57, health_life_expectancy: 57.0, freedom_to_make_life_choices: 0.52, generosity: 0.08, perceptions_of_corruption: 0.51, education: 12.0 },
    SurveyRow { id: "99", country: "Liberia", happiness_score: 5.25, gdp: 8.0, social_support: 0.56, health_life_expectancy: 56.5, freedom_to_make_life_choices: 0.51, generosity: 0.07, perceptions_of_corruption: 0.54, education: 12.0 },
    SurveyRow { id: "100", country: "Sierra Leone", happiness_score: 5.23, gdp: 8.1, social_support: 0.55, health_life_expectancy: 55.0, freedom_to_make_life_choices: 0.5, generosity: 0.06, perceptions_of_corruption: 0.55, education: 12.0 },
    SurveyRow { id: "101", country: "DR Congo", happiness_score: 5.21, gdp: 7.9, social_support: 0.54, health_life_expectancy: 55.5, freedom_to_make_life_choices: 0.49, generosity: 0.05, perceptions_of_corruption: 0.56, education: 12.0 },
    SurveyRow { id: "102", country: "Sudan", happiness_score: 5.19, gdp: 8.2, social_support: 0.53, health_life_expectancy: 58.0, freedom_to_make_life_choices: 0.48, generosity: 0.04, perceptions_of_corruption: 0.57, education: 12.0 },
    SurveyRow { id: "103", country: "South Sudan", happiness_score: 5.17, gdp: 7.8, social_support: 0.52, health_life_expectancy: 54.5, freedom_to_make_life_choices: 0.47, generosity: 0.03, perceptions_of_corruption: 0.58, education: 12.0 },
    SurveyRow { id: "104", country: "Central African Republic", happiness_score: 5.15, gdp: 7.7, social_support: 0.51, health_life_expectancy: 53.5, freedom_to_make_life_choices: 0.46, generosity: 0.02, perceptions_of_corruption: 0.59, education: 12.0 },
    SurveyRow { id: "105", country: "Somalia", happiness_score: 5.13, gdp: 7.6, social_support: 0.5, health_life_expectancy: 54.0, freedom_to_make_life_choices: 0.45, generosity: 0.01, perceptions_of_corruption: 0.6, education: 12.0 },
    SurveyRow { id: "106", country: "Yemen", happiness_score: 5.11, gdp: 8.0, social_support: 0.49, health_life_expectancy: 59.0, freedom_to_make_life_choices: 0.44, generosity: 0.0, perceptions_of_corruption: 0.61, education: 12.0 },
    SurveyRow { id: "107", country: "Iran", happiness_score: 5.09, gdp: 9.5, social_support: 0.48, health_life_expectancy: 66.5, freedom_to_make_life_choices: 0.43, generosity: 0.01, perceptions_of_corruption: 0.62, education: 12.0 },
    SurveyRow { id: "108", country: "Iraq", happiness_score: 5.07, gdp: 9.3, social_support: 0.47, health_life_expectancy: 63.0, freedom_to_make_life_choices: 0.42, generosity: 0.02, perceptions_of_corruption: 0.63, education: 12.0 },
    SurveyRow { id: "109", country: "Syria", happiness_score: 5.05, gdp: 8.5, social_support: 0.46, health_life_expectancy: 60.0, freedom_to_make_life_choices: 0.41, generosity: 0.03, perceptions_of_corruption: 0.64, education: 12.0 },
    SurveyRow { id: "110", country: "Egypt", happiness_score: 5.03, gdp: 9.2, social_support: 0.45, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.4, generosity: 0.04, perceptions_of_corruption: 0.65, education: 12.0 },
    SurveyRow { id: "111", country: "Algeria", happiness_score: 5.01, gdp: 9.4, social_support: 0.44, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.39, generosity: 0.05, perceptions_of_corruption: 0.66, education: 12.0 },
    SurveyRow { id: "112", country: "Morocco", happiness_score: 4.99, gdp: 9.1, social_support: 0.43, health_life_expectancy: 67.0, freedom_to_make_life_choices: 0.38, generosity: 0.06, perceptions_of_corruption: 0.67, education: 12.0 },
    SurveyRow { id: "113", country: "Tunisia", happiness_score: 4.97, gdp: 9.0, social_support: 0.42, health_life_expectancy: 66.5, freedom_to_make_life_choices: 0.37, generosity: 0.07, perceptions_of_corruption: 0.68, education: 12.0 },
    SurveyRow { id: "114", country: "Libya", happiness_score: 4.95, gdp: 9.6, social_support: 0.41, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.36, generosity: 0.08, perceptions_of_corruption: 0.69, education: 12.0 },
    SurveyRow { id: "115", country: "Jordan", happiness_score: 4.93, gdp: 9.3, social_support: 0.4, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.35, generosity: 0.09, perceptions_of_corruption: 0.7, education: 12.0 },
    SurveyRow { id: "116", country: "Saudi Arabia", happiness_score: 4.91, gdp: 10.8, social_support: 0.39, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.34, generosity: 0.1, perceptions_of_corruption: 0.71, education: 12.0 },
    SurveyRow { id: "117", country: "Qatar", happiness_score: 4.89, gdp: 11.5, social_support: 0.38, health_life_expectancy: 70.0, freedom_to_make_life_choices: 0.33, generosity: 0.11, perceptions_of_corruption: 0.72, education: 12.0 },
    SurveyRow { id: "118", country: "Kuwait", happiness_score: 4.87, gdp: 11.0, social_support: 0.37, health_life_expectancy: 69.5, freedom_to_make_life_choices: 0.32, generosity: 0.12, perceptions_of_corruption: 0.73, education: 12.0 },
    SurveyRow { id: "119", country: "Bahrain", happiness_score: 4.85, gdp: 10.9, social_support: 0.36, health_life_expectancy: 68.5, freedom_to_make_life_choices: 0.31, generosity: 0.13, perceptions_of_corruption: 0.74, education: 12.0 },
    SurveyRow { id: "120", country: "Oman", happiness_score: 4.83, gdp: 10.7, social_support: 0.35, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.3, generosity: 0.14, perceptions_of_corruption: 0.75, education: 12.0 },
    SurveyRow { id: "121", country: "Ecuador", happiness_score: 4.81, gdp: 9.5, social_support: 0.34, health_life_expectancy: 69.0, freedom_to_make_life_choices: 0.29, generosity: 0.15, perceptions_of_corruption: 0.76, education: 12.0 },
    SurveyRow { id: "122", country: "Bolivia", happiness_score: 4.79, gdp: 9.2, social_support: 0.33, health_life_expectancy: 65.5, freedom_to_make_life_choices: 0.28, generosity: 0.16, perceptions_of_corruption: 0.77, education: 12.0 },
    SurveyRow { id: "123", country: "Paraguay", happiness_score: 4.77, gdp: 9.3, social_support: 0.32, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.27, generosity: 0.17, perceptions_of_corruption: 0.78, education: 12.0 },
    SurveyRow { id: "124", country: "Venezuela", happiness_score: 4.75, gdp: 8.8, social_support: 0.31, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.26, generosity: 0.18, perceptions_of_corruption: 0.79, education: 12.0 },
    SurveyRow { id: "125", country: "Dominican Republic", happiness_score: 4.73, gdp: 9.7, social_support: 0.3, health_life_expectancy: 66.5, freedom_to_make_life_choices: 0.25, generosity: 0.19, perceptions_of_corruption: 0.8, education: 12.0 },
    SurveyRow { id: "126", country: "Guatemala", happiness_score: 4.71, gdp: 9.4, social_support: 0.29, health_life_expectancy: 65.0, freedom_to_make_life_choices: 0.24, generosity: 0.2, perceptions_of_corruption: 0.81, education: 12.0 },
    SurveyRow { id: "127", country: "Honduras", happiness_score: 4.69, gdp: 9.1, social_support: 0.28, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.23, generosity: 0.21, perceptions_of_corruption: 0.82, education: 12.0 },
    SurveyRow { id: "128", country: "El Salvador", happiness_score: 4.67, gdp: 9.2, social_support: 0.27, health_life_expectancy: 65.5, freedom_to_make_life_choices: 0.22, generosity: 0.22, perceptions_of_corruption: 0.83, education: 12.0 },
    SurveyRow { id: "129", country: "Nicaragua", happiness_score: 4.65, gdp: 9.0, social_support: 0.26, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.21, generosity: 0.23, perceptions_of_corruption: 0.84, education: 12.0 },
    SurveyRow { id: "130", country: "Cuba", happiness_score: 4.63, gdp: 9.1, social_support: 0.25, health_life_expectancy: 68.0, freedom_to_make_life_choices: 0.2, generosity: 0.24, perceptions_of_corruption: 0.85, education: 12.0 },
    SurveyRow { id: "131", country: "Haiti", happiness_score: 4.61, gdp: 8.5, social_support: 0.24, health_life_expectancy: 58.5, freedom_to_make_life_choices: 0.19, generosity: 0.25, perceptions_of_corruption: 0.86, education: 12.0 },
    SurveyRow { id: "132", country: "Zimbabwe", happiness_score: 4.59, gdp: 8.4, social_support: 0.23, health_life_expectancy: 56.0, freedom_to_make_life_choices: 0.18, generosity: 0.26, perceptions_of_corruption: 0.87, education: 12.0 },
    SurveyRow { id: "133", country: "Rwanda", happiness_score: 4.57, gdp: 8.3, social_support: 0.22, health_life_expectancy: 61.0, freedom_to_make_life_choices: 0.17, generosity: 0.27, perceptions_of_corruption: 0.88, education: 12.0 },
    SurveyRow { id: "134", country: "Burundi", happiness_score: 4.55, gdp: 7.9, social_support: 0.21, health_life_expectancy: 55.0, freedom_to_make_life_choices: 0.16, generosity: 0.28, perceptions_of_corruption: 0.89, education: 12.0 },
    SurveyRow { id: "135", country: "Eswatini", happiness_score: 4.53, gdp: 9.0, social_support: 0.2, health_life_expectancy: 54.5, freedom_to_make_life_choices: 0.15, generosity: 0.29, perceptions_of_corruption: 0.9, education: 12.0 },
    SurveyRow { id: "136", country: "Lesotho", happiness_score: 4.51, gdp: 8.7, social_support: 0.19, health_life_expectancy: 53.0, freedom_to_make_life_choices: 0.14, generosity: 0.3, perceptions_of_corruption: 0.91, education: 12.0 },
    SurveyRow { id: "137", country: "Madagascar", happiness_score: 4.49, gdp: 8.2, social_support: 0.18, health_life_expectancy: 59.0, freedom_to_make_life_choices: 0.13, generosity: 0.31, perceptions_of_corruption: 0.92, education: 12.0 },
    SurveyRow { id: "138", country: "Mauritania", happiness_score: 4.47, gdp: 8.8, social_support: 0.17, health_life_expectancy: 61.0, freedom_to_make_life_choices: 0.12, generosity: 0.32, perceptions_of_corruption: 0.93, education: 12.0 },
    SurveyRow { id: "139", country: "Gambia", happiness_score: 4.45, gdp: 8.5, social_support: 0.16, health_life_expectancy: 60.0, freedom_to_make_life_choices: 0.11, generosity: 0.33, perceptions_of_corruption: 0.94, education: 12.0 },
    SurveyRow { id: "140", country: "Comoros", happiness_score: 4.43, gdp: 8.6, social_support: 0.15, health_life_expectancy: 62.0, freedom_to_make_life_choices: 0.1, generosity: 0.34, perceptions_of_corruption: 0.95, education: 12.0 },
    SurveyRow { id: "141", country: "Botswana", happiness_score: 4.41, gdp: 9.7, social_support: 0.14, health_life_expectancy: 58.0, freedom_to_make_life_choices: 0.09, generosity: 0.35, perceptions_of_corruption: 0.96, education: 12.0 },
    SurveyRow { id: "142", country: "Lebanon", happiness_score: 4.39, gdp: 9.0, social_support: 0.13, health_life_expectancy: 66.0, freedom_to_make_life_choices: 0.08, generosity: 0.36, perceptions_of_corruption: 0.97, education: 12.0 },
    SurveyRow { id: "143", country: "Afghanistan", happiness_score: 2.4, gdp: 8.0, social_support: 0.5, health_life_expectancy: 54.0, freedom_to_make_life_choices: 0.4, generosity: 0.15, perceptions_of_corruption: 0.7, education: 12.0 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::model::{FilterState, YearSelection};

    #[test]
    fn test_store_has_one_record_per_country() {
        let store = survey_store();
        assert_eq!(store.len(), 143);
        assert_eq!(store.countries().len(), 143);
    }

    #[test]
    fn test_year_options_are_sentinel_plus_2025() {
        assert_eq!(
            survey_store().year_options(),
            vec![YearSelection::All, YearSelection::Year(2025)]
        );
    }

    #[test]
    fn test_default_filter_returns_full_dataset() {
        let store = survey_store();
        let result = store.evaluate(&FilterState::default());
        assert_eq!(result, store.records());
    }

    #[test]
    fn test_concrete_year_matches_whole_dataset() {
        // Every shipped record is tagged with the representative year.
        let filter = FilterState {
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert_eq!(survey_store().evaluate(&filter).len(), 143);
    }

    #[test]
    fn test_finland_2025_scenario() {
        let store = survey_store();
        let filter = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        let evaluated = store.evaluate(&filter);
        assert_eq!(evaluated.len(), 1);
        assert_eq!(evaluated[0].country, "Finland");
        assert_eq!(evaluated[0].happiness_score, 7.736);

        let spotlight = store.resolve_spotlight(&filter).unwrap();
        assert_eq!(spotlight, evaluated[0]);
    }

    #[test]
    fn test_two_countries_all_years_scenario() {
        let store = survey_store();
        let filter = FilterState {
            countries: vec!["Finland".to_string(), "Denmark".to_string()],
            year: YearSelection::All,
            ..FilterState::default()
        };
        let evaluated = store.evaluate(&filter);
        assert_eq!(evaluated.len(), 2);
        assert_eq!(store.resolve_spotlight(&filter), None);
    }

    #[test]
    fn test_education_index_merged_in() {
        let store = survey_store();
        let finland = store
            .records()
            .iter()
            .find(|r| r.country == "Finland")
            .unwrap();
        assert_eq!(finland.education, 0.96);
        assert_eq!(finland.education_source, EducationSource::Index);
    }

    #[test]
    fn test_education_alias_resolution() {
        assert_eq!(education_index_for("Czechia"), Some(0.88));
        assert_eq!(education_index_for("Côte d'Ivoire"), Some(0.42));
        assert_eq!(education_index_for("Atlantis"), None);
    }

    #[test]
    fn test_no_shipped_record_keeps_placeholder_education() {
        for record in survey_store().records() {
            assert_eq!(
                record.education_source,
                EducationSource::Index,
                "{} kept the years-of-schooling placeholder",
                record.country
            );
            assert!(record.education <= 1.01, "{}", record.country);
        }
    }
}
