// src/data.rs

use crate::error::QuizError;
use crate::model::Country;

/// Loads the country catalog from the embedded YAML.
pub fn read_countries_embedded() -> Result<Vec<Country>, QuizError> {
    let file_content = include_str!("data/countries.yaml");
    read_countries(file_content)
}

pub fn read_countries(yaml: &str) -> Result<Vec<Country>, QuizError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Country identifiers in catalog order, the pool a round shuffles.
pub fn country_pool(countries: &[Country]) -> Vec<String> {
    countries.iter().map(|c| c.name.clone()).collect()
}
