pub type Result<T> = std::result::Result<T, GeminiError>;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned no completion text")]
    EmptyCompletion,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
