//! Fetch state shared by every resource hook.
//!
//! A [`Loadable`] moves `loading -> settled` on each fetch. Success replaces
//! the data and clears the error; failure records the error and keeps the
//! previous (now stale) data.

use crate::api::RequestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadable<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for Loadable<T> {
    /// Hooks start out loading: the mount-time fetch is always issued.
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a fetch. Returns `true` when the data was replaced.
    pub fn settle(&mut self, outcome: Result<T, RequestError>) -> bool {
        self.loading = false;
        match outcome {
            Ok(data) => {
                self.data = data;
                self.error = None;
                true
            }
            Err(err) => {
                self.fail(&err);
                false
            }
        }
    }

    /// Records a failed fetch without consuming the error.
    pub fn fail(&mut self, err: &RequestError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl<T> Loadable<Vec<T>> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Which state a section renders.
    ///
    /// Placeholders are only shown while nothing has been fetched. Once there
    /// is data, a refresh or a failed refresh keeps it on screen; see
    /// [`Loadable::stale_error`].
    pub fn status(&self) -> Status<'_, Vec<T>> {
        if !self.data.is_empty() {
            Status::Ready(&self.data)
        } else if let Some(message) = &self.error {
            Status::Failed(message)
        } else if self.loading {
            Status::Loading
        } else {
            Status::Empty
        }
    }

    /// Error of the last fetch when older data is still being shown.
    pub fn stale_error(&self) -> Option<&str> {
        if self.data.is_empty() {
            None
        } else {
            self.error.as_deref()
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Status<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a T),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> RequestError {
        RequestError::Status {
            status: 500,
            body: "Internal Server Error".to_owned(),
        }
    }

    #[test]
    fn test_starts_loading_with_empty_data() {
        let state = Loadable::<Vec<u32>>::default();
        assert!(state.is_loading());
        assert!(state.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_success_replaces_data_and_clears_error() {
        let mut state = Loadable {
            data: vec![1],
            loading: false,
            error: Some("API error: old".to_owned()),
        };

        state.begin();
        assert!(state.is_loading());
        assert!(state.settle(Ok(vec![3, 4])));

        assert_eq!(state.data, vec![3, 4]);
        assert_eq!(state.error, None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_keeps_stale_data() {
        let mut state = Loadable {
            data: vec![1, 2],
            loading: false,
            error: None,
        };

        state.begin();
        assert!(!state.settle(Err(failure())));

        assert_eq!(state.data, vec![1, 2]);
        assert_eq!(state.error.as_deref(), Some("API error: Internal Server Error"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_status_precedence() {
        let mut state = Loadable::<Vec<u8>>::default();
        assert_eq!(state.status(), Status::Loading);

        state.settle(Ok(Vec::new()));
        assert_eq!(state.status(), Status::Empty);

        state.settle(Ok(vec![1]));
        state.begin();
        assert_eq!(state.status(), Status::Ready(&vec![1]));

        state.settle(Ok(Vec::new()));
        state.begin();
        state.settle(Err(failure()));
        assert_eq!(
            state.status(),
            Status::Failed("API error: Internal Server Error")
        );
        assert_eq!(state.stale_error(), None);
    }

    #[test]
    fn test_failed_refresh_keeps_rendering_data() {
        let mut state = Loadable {
            data: vec![3, 1, 2],
            loading: false,
            error: None,
        };

        state.begin();
        state.settle(Err(RequestError::Status {
            status: 503,
            body: "down".to_owned(),
        }));

        assert_eq!(state.status(), Status::Ready(&vec![3, 1, 2]));
        assert_eq!(state.stale_error(), Some("API error: down"));

        state.settle(Ok(vec![3, 1, 2]));
        assert_eq!(state.stale_error(), None);
    }

    #[test]
    fn test_repeated_success_is_idempotent() {
        let mut state = Loadable::<Vec<&str>>::default();
        state.settle(Ok(vec!["a", "b"]));
        let first = state.clone();

        state.begin();
        state.settle(Ok(vec!["a", "b"]));
        assert_eq!(state, first);
    }
}
