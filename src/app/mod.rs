use crate::data::{country_pool, read_countries_embedded};
use crate::error::QuizError;
use crate::game::Round;
use crate::model::Country;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submodules
pub mod actions;
pub mod view_models;

pub use crate::view_models::QuizView;

pub struct FlagQuizApp {
    pub countries: Vec<Country>,
    pub round: Round,
    rng: StdRng,
}

impl FlagQuizApp {
    /// Embedded catalog, entropy-seeded shuffles.
    pub fn try_new() -> Result<Self, QuizError> {
        let countries = read_countries_embedded()?;
        Self::with_rng(countries, StdRng::from_entropy())
    }

    pub fn with_rng(countries: Vec<Country>, mut rng: StdRng) -> Result<Self, QuizError> {
        let round = Round::new(country_pool(&countries), &mut rng)?;
        log::info!("New round with {} countries", countries.len());
        Ok(Self {
            countries,
            round,
            rng,
        })
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn country_by_image(&self, image: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.image() == image)
    }
}
