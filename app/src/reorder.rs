//! Drag-to-reorder over an ordered collection.
//!
//! [`OrderedCollection`] keeps a working copy of the last fetched collection and
//! drives it through `Idle -> Dragging -> Persisting -> Reconciling -> Idle`.
//! A drop applies the new order to the working list immediately, then every
//! record is written with its new 0-based position. The batch is joined: only
//! when all writes succeed is the collection reloaded from the server; if any
//! write fails the working list snaps back to the order held before the drop,
//! or to a collection fetched while the writes were in flight, and no reload
//! is attempted.
//!
//! Only one batch may be in flight per collection. A drag started while a
//! batch is persisting or reconciling is rejected with [`ReorderError::InFlight`].

use futures_util::future::join_all;
use leptos::logging;
use thiserror::Error;

use crate::api::{ApiClient, RequestError};
use crate::types::{EntityId, OrderUpdate, Ordered, Resource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    #[error("a reorder is already being saved")]
    InFlight,
    #[error("no drag in progress")]
    NotDragging,
    #[error("item {0} is not in this collection")]
    UnknownItem(EntityId),
    #[error("fewer than two items; nothing to reorder")]
    NothingToReorder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderPhase<T> {
    Idle,
    Dragging { active: EntityId },
    /// Writes are in flight. On failure the working list falls back to
    /// `fetched`, the newest collection seen meanwhile, or else to `previous`.
    Persisting {
        previous: Vec<T>,
        fetched: Option<Vec<T>>,
    },
    Reconciling,
}

/// Absolute positions to write, one per record, in the new visual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderPlan {
    pub assignments: Vec<(EntityId, usize)>,
}

/// What to do once every write of a batch has settled.
#[derive(Debug)]
pub enum AfterPersist {
    Reconcile,
    Reverted(RequestError),
}

#[derive(Debug)]
pub enum ReorderOutcome {
    /// The item was dropped onto itself: nothing changed, nothing was sent.
    Unchanged,
    /// All writes succeeded and the collection was reloaded.
    Reconciled,
    /// All writes succeeded but the reload failed; the optimistic order stays.
    ReloadFailed(RequestError),
    /// At least one write failed; the pre-drop order was restored.
    Reverted(RequestError),
}

/// Persistence seam for reordering: single-record position writes plus a full
/// reload of the canonical collection.
#[allow(async_fn_in_trait)]
pub trait OrderPersistence<T> {
    async fn persist_position(&self, id: EntityId, order_index: usize)
    -> Result<(), RequestError>;

    async fn reload(&self) -> Result<Vec<T>, RequestError>;
}

impl<T> OrderPersistence<T> for ApiClient
where
    T: Resource + Ordered,
{
    async fn persist_position(
        &self,
        id: EntityId,
        order_index: usize,
    ) -> Result<(), RequestError> {
        // The updated record in the response is not needed; the reload that
        // follows a successful batch is the source of truth.
        self.send::<_, serde_json::Value>(
            reqwest::Method::PUT,
            &T::member_path(id),
            Some(&OrderUpdate { order_index }),
        )
        .await
        .map(|_| ())
    }

    async fn reload(&self) -> Result<Vec<T>, RequestError> {
        self.list::<T>().await
    }
}

/// Issues every write of `plan` concurrently and waits for all of them.
///
/// Writes are not cancelled when a sibling fails; the first error in plan
/// order is returned once the whole batch has settled.
pub async fn persist_plan<T, P>(persistence: &P, plan: &ReorderPlan) -> Result<(), RequestError>
where
    P: OrderPersistence<T>,
{
    let writes = plan
        .assignments
        .iter()
        .map(|&(id, order_index)| persistence.persist_position(id, order_index));

    join_all(writes)
        .await
        .into_iter()
        .find_map(Result::err)
        .map_or(Ok(()), Err)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedCollection<T> {
    working: Vec<T>,
    phase: ReorderPhase<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self {
            working: Vec::new(),
            phase: ReorderPhase::Idle,
        }
    }
}

impl<T: Ordered + Clone> OrderedCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            working: items,
            phase: ReorderPhase::Idle,
        }
    }

    /// The working list, in display order.
    pub fn items(&self) -> &[T] {
        &self.working
    }

    pub fn phase(&self) -> &ReorderPhase<T> {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, ReorderPhase::Idle)
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            ReorderPhase::Persisting { .. } | ReorderPhase::Reconciling
        )
    }

    pub fn dragging(&self) -> Option<EntityId> {
        match self.phase {
            ReorderPhase::Dragging { active } => Some(active),
            _ => None,
        }
    }

    /// Whether a drag gesture has anything to be dropped against.
    pub fn can_reorder(&self) -> bool {
        self.working.len() > 1
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.working.iter().position(|item| item.id() == id)
    }

    /// Replaces the working list with a freshly fetched collection.
    ///
    /// While a batch is persisting the optimistic order is kept and the
    /// collection is held back for a revert; the outcome of that batch decides
    /// what is shown next.
    pub fn sync(&mut self, fetched: Vec<T>) {
        match &mut self.phase {
            ReorderPhase::Persisting { fetched: latest, .. } => *latest = Some(fetched),
            ReorderPhase::Reconciling => {
                self.working = fetched;
                self.phase = ReorderPhase::Idle;
            }
            ReorderPhase::Dragging { active } => {
                let active = *active;
                self.working = fetched;
                if self.position(active).is_none() {
                    self.phase = ReorderPhase::Idle;
                }
            }
            ReorderPhase::Idle => self.working = fetched,
        }
    }

    pub fn begin_drag(&mut self, id: EntityId) -> Result<(), ReorderError> {
        if self.is_busy() {
            return Err(ReorderError::InFlight);
        }
        if !self.can_reorder() {
            return Err(ReorderError::NothingToReorder);
        }
        if self.position(id).is_none() {
            return Err(ReorderError::UnknownItem(id));
        }
        self.phase = ReorderPhase::Dragging { active: id };
        Ok(())
    }

    pub fn cancel_drag(&mut self) {
        if matches!(self.phase, ReorderPhase::Dragging { .. }) {
            self.phase = ReorderPhase::Idle;
        }
    }

    /// Completes the gesture over `target`.
    ///
    /// Dropping onto the dragged item itself is a no-op and returns `Ok(None)`.
    /// Otherwise the working list is reordered in place and the plan of writes
    /// to persist is returned.
    pub fn drop_on(&mut self, target: EntityId) -> Result<Option<ReorderPlan>, ReorderError> {
        let ReorderPhase::Dragging { active } = self.phase else {
            return Err(if self.is_busy() {
                ReorderError::InFlight
            } else {
                ReorderError::NotDragging
            });
        };

        if active == target {
            self.phase = ReorderPhase::Idle;
            return Ok(None);
        }

        let from = self.position(active).ok_or(ReorderError::UnknownItem(active))?;
        let to = self.position(target).ok_or(ReorderError::UnknownItem(target))?;

        let previous = self.working.clone();
        let moved = self.working.remove(from);
        self.working.insert(to, moved);

        let assignments = self
            .working
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id(), index))
            .collect();

        self.phase = ReorderPhase::Persisting {
            previous,
            fetched: None,
        };
        Ok(Some(ReorderPlan { assignments }))
    }

    /// Applies the joined outcome of a batch of writes.
    pub fn persisted(&mut self, outcome: Result<(), RequestError>) -> AfterPersist {
        let restore = match std::mem::replace(&mut self.phase, ReorderPhase::Idle) {
            ReorderPhase::Persisting { previous, fetched } => fetched.unwrap_or(previous),
            other => {
                self.phase = other;
                return match outcome {
                    Ok(()) => AfterPersist::Reconcile,
                    Err(err) => AfterPersist::Reverted(err),
                };
            }
        };

        match outcome {
            Ok(()) => {
                self.phase = ReorderPhase::Reconciling;
                AfterPersist::Reconcile
            }
            Err(err) => {
                logging::warn!("Failed to save new order, reverting: {err}");
                self.working = restore;
                AfterPersist::Reverted(err)
            }
        }
    }

    /// Applies the reload that follows a fully persisted batch.
    pub fn reconciled(&mut self, reloaded: Result<Vec<T>, RequestError>) -> ReorderOutcome {
        self.phase = ReorderPhase::Idle;
        match reloaded {
            Ok(items) => {
                self.working = items;
                ReorderOutcome::Reconciled
            }
            Err(err) => {
                logging::warn!("Order saved but reload failed: {err}");
                ReorderOutcome::ReloadFailed(err)
            }
        }
    }

    /// Runs a whole reorder of `active` onto `target` against `persistence`.
    pub async fn move_item<P>(
        &mut self,
        persistence: &P,
        active: EntityId,
        target: EntityId,
    ) -> Result<ReorderOutcome, ReorderError>
    where
        P: OrderPersistence<T>,
    {
        self.begin_drag(active)?;
        let Some(plan) = self.drop_on(target)? else {
            return Ok(ReorderOutcome::Unchanged);
        };

        let written = persist_plan::<T, P>(persistence, &plan).await;
        match self.persisted(written) {
            AfterPersist::Reverted(err) => Ok(ReorderOutcome::Reverted(err)),
            AfterPersist::Reconcile => {
                let reloaded = persistence.reload().await;
                Ok(self.reconciled(reloaded))
            }
        }
    }
}

/// Whether `items` carry exactly the positions `0..len` in slice order.
pub fn is_contiguous<T: Ordered>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| usize::try_from(item.order_index()) == Ok(index))
}
