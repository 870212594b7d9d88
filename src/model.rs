use serde::{Deserialize, Serialize};

/// Questions per round.
pub const ROUND_LENGTH: u32 = 8;
/// Flags shown per question.
pub const CANDIDATES_PER_QUESTION: usize = 3;

pub type Rgb = [u8; 3];

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Country {
    pub name: String,
    // Asset name, falls back to the country name
    #[serde(default)]
    pub image: Option<String>,
    pub flag: FlagDesign,
}

impl Country {
    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StripePattern {
    Horizontal,
    Vertical,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlagDesign {
    pub pattern: StripePattern,
    pub stripes: Vec<Rgb>,
    /// Relative stripe sizes, one per stripe. Equal when absent.
    #[serde(default)]
    pub weights: Option<Vec<f32>>,
    #[serde(default)]
    pub canton: Option<Canton>,
    #[serde(default)]
    pub crosses: Vec<Band>,
    #[serde(default)]
    pub saltires: Vec<Band>,
}

impl FlagDesign {
    /// Stripe sizes normalised to sum 1.
    pub fn stripe_fractions(&self) -> Vec<f32> {
        let weights = match &self.weights {
            Some(w) if w.len() == self.stripes.len() => w.clone(),
            _ => vec![1.0; self.stripes.len()],
        };
        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return vec![0.0; weights.len()];
        }
        weights.iter().map(|w| w / total).collect()
    }
}

/// Top-left rectangle, sizes as fractions of the flag.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Canton {
    pub color: Rgb,
    pub width: f32,
    pub height: f32,
}

/// Band thickness as a fraction of the flag height.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Band {
    pub color: Rgb,
    pub thickness: f32,
}
