use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Document root element is unavailable")]
    MissingRoot,

    #[error("Failed to update class list: {0}")]
    ClassList(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Leptos configuration error: {0}")]
    Leptos(String),
}
