use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("cannot perform operation on an empty matrix")]
    EmptyMatrix,
    #[error("size mismatch: [{m}x{k}] * [{k2}x{n}]")]
    SizeMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("bad dimension index {dim}: valid dimensions are 0 (rows) and 1 (columns)")]
    BadDimension { dim: usize },
    #[error("index ({i}, {j}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    },
    #[error("buffer length {len} does not match shape {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
