use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read source file {path:?}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read from stdin")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },
}
