//! Reactive resource hooks.
//!
//! An [`ApiResource`] exposes `{data, loading, error}` for one API read plus a
//! `refresh` action. The first fetch is issued once the owning view is mounted
//! in the browser; after that only `refresh` fetches again. Hook instances do
//! not share a cache, so two sections reading the same collection issue two
//! requests.

use std::sync::Arc;

use futures_util::future::{FutureExt as _, LocalBoxFuture};
use leptos::{logging, prelude::*, task::spawn_local};

use crate::api::{ApiClient, RequestError};
use crate::config::SiteConfig;
use crate::resource::Loadable;
use crate::types::{Resource, Resume};

type Fetcher<T> = Arc<dyn Fn() -> LocalBoxFuture<'static, Result<T, RequestError>> + Send + Sync>;

pub struct ApiResource<T: Send + Sync + 'static> {
    label: &'static str,
    state: RwSignal<Loadable<T>>,
    fetch: Fetcher<T>,
}

impl<T: Send + Sync + 'static> Clone for ApiResource<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            state: self.state,
            fetch: Arc::clone(&self.fetch),
        }
    }
}

impl<T> ApiResource<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    /// A resource in its initial loading state. Nothing is fetched until
    /// [`refresh`](Self::refresh) or [`reload`](Self::reload) is called.
    pub fn new<F, Fut>(label: &'static str, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, RequestError>> + 'static,
    {
        Self {
            label,
            state: RwSignal::new(Loadable::default()),
            fetch: Arc::new(move || fetch().boxed_local()),
        }
    }

    pub fn data(&self) -> T {
        self.state.with(|state| state.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(Loadable::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    /// Tracked read of the whole fetch state.
    pub fn with<U>(&self, read: impl FnOnce(&Loadable<T>) -> U) -> U {
        self.state.with(read)
    }

    /// Fetches once and applies the outcome, returning it to the caller.
    ///
    /// A failure is logged and recorded in `error`; the previous data stays.
    pub async fn refetch(&self) -> Result<T, RequestError> {
        self.state.try_update(Loadable::begin);
        let outcome = (self.fetch)().await;
        match &outcome {
            Ok(data) => {
                self.state.try_update(|state| state.settle(Ok(data.clone())));
            }
            Err(err) => {
                logging::error!("Failed to load {}: {err}", self.label);
                self.state.try_update(|state| state.fail(err));
            }
        }
        outcome
    }

    /// Re-fetches the canonical state. Returns `true` when the data was replaced.
    pub async fn refresh(&self) -> bool {
        self.refetch().await.is_ok()
    }

    /// Fire-and-forget [`refresh`](Self::refresh) for event handlers.
    pub fn reload(&self) {
        let resource = self.clone();
        spawn_local(async move {
            resource.refresh().await;
        });
    }
}

/// Creates a resource and schedules its first fetch for when the view mounts.
pub fn use_api_resource<T, F, Fut>(label: &'static str, fetch: F) -> ApiResource<T>
where
    T: Clone + Default + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, RequestError>> + 'static,
{
    let resource = ApiResource::new(label, fetch);
    let mounted = resource.clone();
    Effect::new(move |_| mounted.reload());
    resource
}

/// Client for the configured API, falling back to the default configuration
/// outside of the app root.
pub fn use_api_client() -> ApiClient {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    ApiClient::new(&config.api_base_url)
}

/// The whole collection of `T`, in server order.
pub fn use_collection<T>() -> ApiResource<Vec<T>>
where
    T: Resource + Clone + Send + Sync,
{
    let client = use_api_client();
    use_api_resource(T::COLLECTION, move || {
        let client = client.clone();
        async move { client.list::<T>().await }
    })
}

pub fn use_latest_resume() -> ApiResource<Option<Resume>> {
    let client = use_api_client();
    use_api_resource("/resume/latest", move || {
        let client = client.clone();
        async move { client.latest_resume().await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Signals need a reactive owner; keep the returned one alive for the test.
    fn root_owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    /// Resource whose fetches pop canned responses, counting every call.
    fn scripted(
        responses: Vec<Result<Vec<u32>, RequestError>>,
    ) -> (ApiResource<Vec<u32>>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let queue = Arc::new(Mutex::new(responses));
        let counter = Arc::clone(&calls);
        let resource = ApiResource::new("numbers", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let next = queue.lock().unwrap().remove(0);
            async move { next }
        });
        (resource, calls)
    }

    fn unavailable() -> RequestError {
        RequestError::Status {
            status: 503,
            body: "Service Unavailable".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_refresh_twice_yields_same_data() {
        let _owner = root_owner();
        let (resource, calls) = scripted(vec![Ok(vec![1, 2, 3]), Ok(vec![1, 2, 3])]);
        assert!(resource.loading());

        assert!(resource.refresh().await);
        let first = resource.data();
        assert!(resource.refresh().await);

        assert_eq!(resource.data(), first);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!resource.loading());
        assert_eq!(resource.error(), None);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_data() {
        let _owner = root_owner();
        let (resource, _) = scripted(vec![Ok(vec![7]), Err(unavailable())]);
        resource.refresh().await;

        assert!(!resource.refresh().await);

        assert_eq!(resource.data(), vec![7]);
        assert_eq!(resource.error().as_deref(), Some("API error: Service Unavailable"));
        assert!(!resource.loading());
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let _owner = root_owner();
        let (resource, _) = scripted(vec![Err(unavailable()), Ok(vec![4, 5])]);
        resource.refresh().await;
        assert!(resource.error().is_some());

        let fetched = resource.refetch().await.unwrap();

        assert_eq!(fetched, vec![4, 5]);
        assert_eq!(resource.with(|state| state.data.clone()), vec![4, 5]);
        assert_eq!(resource.error(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let _owner = root_owner();
        let (resource, _) = scripted(vec![Ok(vec![9])]);
        let other = resource.clone();
        tokio_test::block_on(other.refresh());
        assert_eq!(resource.data(), vec![9]);
    }
}
