use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Restart {0} has incorrect format, should be mode[:max_retry]")]
    MalformedRestart(String),

    #[error("Docker error: {0}")]
    Engine(#[from] docker_api::Error),

    #[error("Container discovery failed: {0}")]
    Discovery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
