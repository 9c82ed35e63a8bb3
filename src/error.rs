#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("truncated file: need {need} bytes, have {have}")]
    TruncatedFile { need: usize, have: usize },

    #[error("invalid run-length control byte {control:#04x} at offset {offset}")]
    InvalidRunControl { offset: usize, control: u8 },

    #[error("run-length span at offset {offset} overruns input: need {need} bytes, have {have}")]
    RunSpanOverrun { offset: usize, need: usize, have: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
