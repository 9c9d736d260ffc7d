use thiserror::Error;

/// Failure taxonomy for the roast pipeline.
///
/// The two classified variants carry an HTTP-style status and a localized
/// user-facing message; everything else propagates unmodified as a generic
/// upstream failure. Nothing in the pipeline retries.
#[derive(Debug, Error)]
pub enum RoastError {
    /// Page fetch yielded no content.
    #[error("Failed to retrieve Threads user information")]
    RetrievalFailed,

    /// Page content matched the "unavailable page" marker.
    #[error("Akun pengguna tidak ditemukan")]
    AccountNotFound,

    /// Page content matched the "private profile" marker.
    #[error("Tidak dapat melakukan roasting pada akun private")]
    AccountPrivate,

    /// Browser, generation API, or storage failure, passed through as-is.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl RoastError {
    /// HTTP-style status classification.
    pub fn status(&self) -> u16 {
        match self {
            RoastError::AccountNotFound => 404,
            RoastError::AccountPrivate => 403,
            RoastError::RetrievalFailed | RoastError::Upstream(_) => 500,
        }
    }

    /// Localized message safe to surface to the caller.
    pub fn user_message(&self) -> &'static str {
        match self {
            RoastError::AccountNotFound => "Akun pengguna tidak ditemukan",
            RoastError::AccountPrivate => "Tidak dapat melakukan roasting pada akun private",
            RoastError::RetrievalFailed | RoastError::Upstream(_) => {
                "Terjadi kesalahan saat membuat roasting"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_errors_carry_http_statuses() {
        assert_eq!(RoastError::AccountNotFound.status(), 404);
        assert_eq!(RoastError::AccountPrivate.status(), 403);
        assert_eq!(RoastError::RetrievalFailed.status(), 500);
        assert_eq!(RoastError::Upstream(anyhow::anyhow!("boom")).status(), 500);
    }

    #[test]
    fn user_messages_are_localized() {
        assert_eq!(
            RoastError::AccountNotFound.user_message(),
            "Akun pengguna tidak ditemukan"
        );
        assert_eq!(
            RoastError::AccountPrivate.user_message(),
            "Tidak dapat melakukan roasting pada akun private"
        );
    }
}
