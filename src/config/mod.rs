//! Configuration for the diagnostic commands.
//!
//! There is no config file format of its own: settings come from the process
//! environment, with a `.env` file as fallback for the connection string.
//!
//! - [`env_file`] - `.env` parsing
//! - [`settings`] - settings resolution for each command

pub mod env_file;
pub mod settings;

pub use env_file::EnvFileParser;
pub use settings::{
    find_env_file, CheckSettings, ProbeSettings, UriSource, DEFAULT_PYTHON, ENV_FILE_NAME, MONGO_URI_VAR,
    PYTHON_VAR,
};
