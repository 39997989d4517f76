//! Element-type-changing operations over a [`SequenceWrapper`].

use crate::SequenceWrapper;

/// Builds a new wrapper whose `i`-th element is `mapper` applied to the
/// `i`-th element of `source`. `source` is left unchanged.
pub fn transform<T, U, F>(source: &SequenceWrapper<T>, mapper: F) -> SequenceWrapper<U>
where
    F: FnMut(&T) -> U,
{
    let mapped: Vec<U> = source.iter().map(mapper).collect();
    tracing::trace!(len = mapped.len(), "transform");
    SequenceWrapper::new(mapped)
}

/// Like [`transform`], but stops at the first error returned by `mapper`.
pub fn try_transform<T, U, E, F>(
    source: &SequenceWrapper<T>,
    mapper: F,
) -> Result<SequenceWrapper<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mapped = source.iter().map(mapper).collect::<Result<Vec<U>, E>>()?;
    tracing::trace!(len = mapped.len(), "try_transform");
    Ok(SequenceWrapper::new(mapped))
}
