use thiserror::Error;

/// A track index outside `0..count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Index cannot be negative: {0}")]
    Negative(isize),
    #[error("Index is too large: {0}")]
    TooLarge(isize),
}

/// Validate `index` against a collection of `len` items.
pub(super) fn check_index(index: isize, len: usize) -> Result<usize, IndexError> {
    let i = usize::try_from(index).map_err(|_| IndexError::Negative(index))?;
    if i >= len {
        return Err(IndexError::TooLarge(index));
    }
    Ok(i)
}
