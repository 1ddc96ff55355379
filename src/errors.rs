use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReddModelsError {
    #[error("Malformed {0} payload: `data` is missing or not an object")]
    MalformedData(&'static str),
    #[error("Could not parse JSON payload")]
    JsonError(#[from] serde_json::Error),
    #[error("Could not read payload")]
    IoError(#[from] std::io::Error),
    #[error("Could not parse transport status")]
    ParsingIntError(#[from] std::num::ParseIntError),
}
