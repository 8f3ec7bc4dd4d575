use std::fmt;

/// The single fetch failure kind surfaced to users. `stage` tells where the
/// attempt broke (`transport`, `http`, `body`, `decode`); `detail` is the
/// message shown verbatim in the error view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub stage: &'static str,
    pub detail: String,
}

impl FetchError {
    pub fn new(stage: &'static str, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

impl std::error::Error for FetchError {}
