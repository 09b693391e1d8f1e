//! Wraps a single fallible async unit of work and tracks its lifecycle so
//! callers can poll `loading`/`success`/`result`/`error` instead of handling
//! futures themselves.

use {
    futures::future::BoxFuture,
    std::sync::{Arc, Mutex},
    tokio::task::JoinHandle,
};

/// The lifecycle of one operation. Exactly one variant is active at a time:
/// `Idle` until the first trigger, `Loading` while an invocation is in
/// flight, then one terminal variant per settled invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OperationState<T, E> {
    Idle,
    Loading,
    Success(T),
    Error(E),
}

/// A retriggerable async unit of work.
///
/// `call()` starts a new invocation and moves the state to `Loading`
/// immediately, clearing any stale terminal state. Invocations are neither
/// cancelled nor sequenced: when calls overlap, every invocation runs to
/// completion and the one that settles *last* owns the visible state,
/// regardless of call order. Failures of the work are captured into the
/// `Error` state, never rethrown.
pub struct AsyncOperation<T, E> {
    work: Arc<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>,
    state: Arc<Mutex<OperationState<T, E>>>,
}

impl<T, E> AsyncOperation<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub fn new(
        work: impl Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            work: Arc::new(work),
            state: Arc::new(Mutex::new(OperationState::Idle)),
        }
    }

    /// Triggers one invocation of the work on the current runtime. The
    /// returned handle settles together with the invocation; state updates
    /// happen regardless of whether the handle is awaited.
    pub fn call(&self) -> JoinHandle<()> {
        *self.state.lock().unwrap() = OperationState::Loading;
        let future = (self.work)();
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let outcome = future.await;
            let mut state = state.lock().unwrap();
            *state = match outcome {
                Ok(result) => {
                    tracing::debug!("operation settled successfully");
                    OperationState::Success(result)
                }
                Err(error) => {
                    tracing::debug!("operation settled with an error");
                    OperationState::Error(error)
                }
            };
        })
    }

    pub fn loading(&self) -> bool {
        matches!(*self.state.lock().unwrap(), OperationState::Loading)
    }

    pub fn success(&self) -> bool {
        matches!(*self.state.lock().unwrap(), OperationState::Success(_))
    }

    /// The result of the most recently settled invocation, if it succeeded.
    pub fn result(&self) -> Option<T> {
        match &*self.state.lock().unwrap() {
            OperationState::Success(result) => Some(result.clone()),
            _ => None,
        }
    }

    /// The error of the most recently settled invocation, if it failed.
    pub fn error(&self) -> Option<E> {
        match &*self.state.lock().unwrap() {
            OperationState::Error(error) => Some(error.clone()),
            _ => None,
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> OperationState<T, E> {
        self.state.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        futures::FutureExt,
        std::{collections::VecDeque, sync::Mutex},
        tokio::sync::oneshot,
    };

    /// An operation whose invocations settle when the matching sender is
    /// resolved, so tests control settle order explicitly.
    fn controlled(
        outcomes: Vec<oneshot::Receiver<Result<u32, String>>>,
    ) -> AsyncOperation<u32, String> {
        let pending = Mutex::new(VecDeque::from(outcomes));
        AsyncOperation::new(move || {
            let rx = pending.lock().unwrap().pop_front().unwrap();
            async move { rx.await.unwrap() }.boxed()
        })
    }

    #[tokio::test]
    async fn starts_idle_and_stores_success() {
        let op: AsyncOperation<u32, String> =
            AsyncOperation::new(|| futures::future::ready(Ok(42)).boxed());
        assert_eq!(op.state(), OperationState::Idle);
        assert!(!op.loading());

        op.call().await.unwrap();
        assert!(op.success());
        assert_eq!(op.result(), Some(42));
        assert_eq!(op.error(), None);
    }

    #[tokio::test]
    async fn captures_errors_instead_of_rethrowing() {
        let op: AsyncOperation<u32, String> =
            AsyncOperation::new(|| futures::future::ready(Err("boom".to_string())).boxed());
        op.call().await.unwrap();
        assert!(!op.success());
        assert_eq!(op.error(), Some("boom".to_string()));
        assert_eq!(op.result(), None);
    }

    #[tokio::test]
    async fn retrigger_clears_stale_terminal_state() {
        let (_tx, rx) = oneshot::channel();
        let (tx_failed, rx_failed) = oneshot::channel();
        let op = controlled(vec![rx_failed, rx]);

        tx_failed.send(Err("expired".to_string())).unwrap();
        op.call().await.unwrap();
        assert_eq!(op.error(), Some("expired".to_string()));

        // The second invocation never settles; the error must already be
        // gone while it is in flight.
        op.call();
        assert!(op.loading());
        assert_eq!(op.error(), None);
        assert_eq!(op.result(), None);
    }

    #[tokio::test]
    async fn last_settled_invocation_wins() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let op = controlled(vec![rx_first, rx_second]);

        let first = op.call();
        let second = op.call();
        assert!(op.loading());

        // The second invocation settles before the first.
        tx_second.send(Ok(2)).unwrap();
        second.await.unwrap();
        assert_eq!(op.result(), Some(2));

        // When the first invocation settles later it overwrites the state:
        // the visible outcome follows settle order, not call order.
        tx_first.send(Ok(1)).unwrap();
        first.await.unwrap();
        assert_eq!(op.result(), Some(1));
    }
}
