use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Selection {index} is not one of the displayed flags")]
    InvalidSelection { index: usize },
    #[error("The round is over, start a new one to keep playing")]
    RoundOver,
    #[error("This question was already answered")]
    AlreadyAnswered,
    #[error("Country pool has {found} entries, at least {required} are needed")]
    PoolTooSmall { found: usize, required: usize },
    #[error("Could not parse the country catalog:")]
    Catalog {
        #[from]
        source: serde_yaml::Error,
    },
}
