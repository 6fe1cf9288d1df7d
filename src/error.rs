use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JavafyError {
    #[error("Error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}
