use thiserror::Error;

/// Convenient result alias for the skyroutes library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a query references an airport code absent from the graph.
    #[error("unknown airport code: {code}")]
    UnknownAirport { code: String },

    /// Raised when no route exists between two airports that are both in the
    /// graph. Distinct from [`Error::UnknownAirport`].
    #[error("no route found between {origin} and {destination}")]
    NoRoute { origin: String, destination: String },
}
