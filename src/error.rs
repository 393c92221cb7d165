//! Domain errors for the diary screen

use thiserror::Error;

use crate::screen::SLOT_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiaryError {
    /// A slot index outside `0..SLOT_COUNT` was addressed
    #[error("slot index {index} out of range (expected 0..{max})", max = SLOT_COUNT)]
    SlotOutOfRange { index: usize },

    /// Locale name we have no date pattern for
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

pub type DiaryResult<T> = std::result::Result<T, DiaryError>;
