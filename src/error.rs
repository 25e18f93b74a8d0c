use thiserror::Error;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("slide index out of range: index={index}, slide_count={slide_count}")]
    SlideOutOfRange { index: usize, slide_count: usize },

    #[error("period index out of range: index={index}, period_count={period_count}")]
    PeriodOutOfRange { index: usize, period_count: usize },

    #[error("series for `{competitor}` has {actual} periods, expected {expected}")]
    SeriesLengthMismatch {
        competitor: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown competitor: {0}")]
    UnknownCompetitor(String),
}
