pub mod alerts;
pub mod quiz;
