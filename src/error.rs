use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("jaw outline must have exactly {expected} points, got {actual}")]
    JawPointCount { expected: usize, actual: usize },

    #[error("{region} must have at least {min} point(s), got {actual}")]
    RegionTooSmall {
        region: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("expected a 68-point landmark array, got {0} points")]
    WrongLandmarkCount(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
