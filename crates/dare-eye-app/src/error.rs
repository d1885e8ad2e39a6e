use dare_eye_core::DareError;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Scores(String),
    Core(DareError),
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(m) => write!(f, "config: {m}"),
            Self::Scores(m) => write!(f, "scores: {m}"),
            Self::Core(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(_) | Self::Scores(_) => None,
        }
    }
}

impl From<DareError> for AppError {
    fn from(e: DareError) -> Self {
        Self::Core(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
