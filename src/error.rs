#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    #[error("Index {index} out of bounds for sequence of length {len}.")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_index_and_len() {
        let err = SequenceError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 out of bounds for sequence of length 3."
        );
    }
}
