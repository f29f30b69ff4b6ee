#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidDifficulty(i32),
    NoAvailableCell,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidDifficulty(code) => {
                write!(f, "Unsupported difficulty code: {}", code)
            }
            EngineError::NoAvailableCell => {
                write!(f, "No available cell: board is full or the game is over")
            }
        }
    }
}

impl std::error::Error for EngineError {}
