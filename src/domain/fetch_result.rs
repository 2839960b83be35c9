use serde::Serialize;

/// Outcome of one asynchronous fetch as seen by a rendering layer.
///
/// `Loading` is the placeholder a caller holds before the call settles; the
/// repository only ever returns `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchResult<T> {
    Success { data: T },
    Error { message: String },
    Loading,
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        FetchResult::Loading
    }
}

impl<T> FetchResult<T> {
    pub fn success(data: T) -> Self {
        FetchResult::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        FetchResult::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchResult::Error { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchResult::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchResult::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FetchResult::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            FetchResult::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchResult<U> {
        match self {
            FetchResult::Success { data } => FetchResult::Success { data: f(data) },
            FetchResult::Error { message } => FetchResult::Error { message },
            FetchResult::Loading => FetchResult::Loading,
        }
    }
}
