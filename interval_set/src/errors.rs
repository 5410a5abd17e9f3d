/// Which end of a range an extremum refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Infimum,
    Supremum,
}

impl ::core::fmt::Display for Extremum {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Extremum::Infimum => write!(f, "infimum"),
            Extremum::Supremum => write!(f, "supremum"),
        }
    }
}

/// All failures are caller contract violations: nothing is retried and no
/// partial result is ever returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("illegal interval configuration: {0}")]
    IllegalConfiguration(String),

    #[error("ranges were built with incompatible orderings")]
    IncompatibleOrdering,

    #[error("range has no {0}")]
    NoSuchExtremum(Extremum),

    #[error("{0}")]
    UnsupportedOperation(String),

    #[error("intervals are not connected: {0}")]
    NotConnected(String),

    #[error("illegal cursor state: {0}")]
    IllegalState(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
