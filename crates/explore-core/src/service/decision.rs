//! Decision service.
//!
//! Orchestrates [`DecisionStore`] calls per use case: listing who liked a
//! user (all, or only not-yet-seen), counting likes, and recording a decision
//! while detecting a mutual match.
//!
//! Listing has one side effect: once a page has been read, every like the
//! recipient received before the call started is marked as seen. That update
//! runs on a detached task with its own timeout, so the caller never waits
//! for it and dropping the request does not abort it.

use std::sync::Arc;
use std::time::Duration;

use explore_types::decision::{
    CountLikedYouResponse, Decision, DecisionFilter, Liker, ListLikedYouResponse,
    PutDecisionRequest, PutDecisionResponse,
};
use explore_types::error::{DecisionError, RepositoryError};
use tokio_util::task::TaskTracker;

use crate::repository::decision::DecisionStore;

/// Default timeout for the detached seen-marking task.
pub const DEFAULT_MARK_SEEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of "now" in unix seconds.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Service implementing the four decision use cases.
///
/// Generic over the store trait to maintain clean architecture --
/// explore-core never depends on explore-infra.
pub struct DecisionService<S: DecisionStore + 'static> {
    store: Arc<S>,
    clock: Clock,
    mark_seen_timeout: Duration,
    background: TaskTracker,
}

impl<S: DecisionStore + 'static> DecisionService<S> {
    /// Create a new DecisionService using the system clock.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(system_clock),
            mark_seen_timeout: DEFAULT_MARK_SEEN_TIMEOUT,
            background: TaskTracker::new(),
        }
    }

    /// Replace the clock used to stamp decisions and seen thresholds.
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Override the timeout applied to the detached seen-marking task.
    pub fn with_mark_seen_timeout(mut self, timeout: Duration) -> Self {
        self.mark_seen_timeout = timeout;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List everyone who liked `recipient_user_id`, one page at a time.
    pub async fn list_liked_you(
        &self,
        recipient_user_id: &str,
        pagination_token: &str,
    ) -> Result<ListLikedYouResponse, DecisionError> {
        let filter = DecisionFilter::likes_for(recipient_user_id);
        self.list_and_mark_seen(recipient_user_id, filter, pagination_token)
            .await
    }

    /// List likes for `recipient_user_id` that have not been shown yet.
    pub async fn list_new_liked_you(
        &self,
        recipient_user_id: &str,
        pagination_token: &str,
    ) -> Result<ListLikedYouResponse, DecisionError> {
        let filter = DecisionFilter::likes_for(recipient_user_id).unseen();
        self.list_and_mark_seen(recipient_user_id, filter, pagination_token)
            .await
    }

    /// Count how many users liked `recipient_user_id`.
    pub async fn count_liked_you(
        &self,
        recipient_user_id: &str,
    ) -> Result<CountLikedYouResponse, DecisionError> {
        require_user_id("recipient_user_id", recipient_user_id)?;

        let count = self
            .store
            .count_decisions(&DecisionFilter::likes_for(recipient_user_id))
            .await
            .map_err(DecisionError::Count)?;

        Ok(CountLikedYouResponse { count })
    }

    /// Record a like/pass and report whether it completes a mutual like.
    ///
    /// The decision replaces any earlier one for the same pair and is stamped
    /// with the current time. If the reverse lookup fails after the decision
    /// was stored, the error is [`DecisionError::MatchCheck`] and still carries
    /// a response with `mutual_likes == false`.
    pub async fn put_decision(
        &self,
        request: &PutDecisionRequest,
    ) -> Result<PutDecisionResponse, DecisionError> {
        require_user_id("actor_user_id", &request.actor_user_id)?;
        require_user_id("recipient_user_id", &request.recipient_user_id)?;

        let decision = Decision::new(
            request.actor_user_id.as_str(),
            request.recipient_user_id.as_str(),
            request.liked_recipient,
            (self.clock)(),
        );
        self.store
            .upsert_decision(&decision)
            .await
            .map_err(DecisionError::Upsert)?;

        let mut response = PutDecisionResponse { mutual_likes: false };
        if !request.liked_recipient {
            return Ok(response);
        }

        let reverse = DecisionFilter {
            actor_user_id: Some(request.recipient_user_id.clone()),
            recipient_user_id: Some(request.actor_user_id.clone()),
            liked_recipient: Some(true),
            ..Default::default()
        };
        match self.store.list_decisions(&reverse, "").await {
            Ok((decisions, _)) => {
                response.mutual_likes = !decisions.is_empty();
                if response.mutual_likes {
                    tracing::debug!(
                        actor = %request.actor_user_id,
                        recipient = %request.recipient_user_id,
                        "mutual like"
                    );
                }
                Ok(response)
            }
            Err(source) => Err(DecisionError::MatchCheck { response, source }),
        }
    }

    /// Wait until every detached seen-marking task spawned so far has finished.
    ///
    /// Used on shutdown to drain outstanding updates. New tasks may still be
    /// spawned afterwards.
    pub async fn wait_for_background(&self) {
        self.background.close();
        self.background.wait().await;
        self.background.reopen();
    }

    async fn list_and_mark_seen(
        &self,
        recipient_user_id: &str,
        filter: DecisionFilter,
        pagination_token: &str,
    ) -> Result<ListLikedYouResponse, DecisionError> {
        require_user_id("recipient_user_id", recipient_user_id)?;

        // Captured before reading so that anything recorded while the page is
        // being built stays unseen.
        let now = (self.clock)();

        let (decisions, next_pagination_token) = self
            .store
            .list_decisions(&filter, pagination_token)
            .await
            .map_err(|e| match e {
                RepositoryError::InvalidPageToken(_) => {
                    DecisionError::InvalidRequest(e.to_string())
                }
                other => DecisionError::List(other),
            })?;

        self.spawn_mark_seen(recipient_user_id.to_string(), now);

        Ok(ListLikedYouResponse {
            likers: decisions.iter().map(Liker::from).collect(),
            next_pagination_token,
        })
    }

    fn spawn_mark_seen(&self, recipient_user_id: String, threshold: i64) {
        let store = Arc::clone(&self.store);
        let timeout = self.mark_seen_timeout;

        self.background.spawn(async move {
            let mark = store.mark_decisions_as_seen(&recipient_user_id, threshold);
            match tokio::time::timeout(timeout, mark).await {
                Ok(Ok(())) => {
                    tracing::trace!(recipient = %recipient_user_id, threshold, "decisions marked as seen");
                }
                Ok(Err(e)) => {
                    tracing::warn!(recipient = %recipient_user_id, error = %e, "failed to mark decisions as seen");
                }
                Err(_) => {
                    tracing::warn!(
                        recipient = %recipient_user_id,
                        timeout_ms = timeout.as_millis() as u64,
                        "timed out marking decisions as seen"
                    );
                }
            }
        });
    }
}

fn require_user_id(field: &str, value: &str) -> Result<(), DecisionError> {
    if value.is_empty() {
        return Err(DecisionError::InvalidRequest(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

    use explore_types::pagination::PageToken;

    use crate::repository::decision::PAGE_LENGTH;

    // --- Mock store for testing ---

    /// In-memory store with the same listing semantics as the SQLite one,
    /// plus failure injection and a record of seen-marking calls.
    #[derive(Default)]
    struct MockStore {
        rows: Mutex<BTreeMap<(String, String), Decision>>,
        marks: Mutex<Vec<(String, i64)>>,
        list_calls: Mutex<Vec<(DecisionFilter, String)>>,
        fail_list: AtomicBool,
        fail_reverse_lookup: AtomicBool,
        fail_count: AtomicBool,
        fail_upsert: AtomicBool,
        fail_mark: AtomicBool,
        mark_delay: Option<Duration>,
    }

    impl MockStore {
        fn with_rows(rows: &[Decision]) -> Self {
            let store = Self::default();
            {
                let mut map = store.rows.lock().unwrap();
                for d in rows {
                    map.insert(
                        (d.actor_user_id.clone(), d.recipient_user_id.clone()),
                        d.clone(),
                    );
                }
            }
            store
        }

        fn get(&self, actor: &str, recipient: &str) -> Option<Decision> {
            self.rows
                .lock()
                .unwrap()
                .get(&(actor.to_string(), recipient.to_string()))
                .cloned()
        }

        fn marks(&self) -> Vec<(String, i64)> {
            self.marks.lock().unwrap().clone()
        }

        fn list_calls(&self) -> Vec<(DecisionFilter, String)> {
            self.list_calls.lock().unwrap().clone()
        }
    }

    fn injected() -> RepositoryError {
        RepositoryError::Query("some error".to_string())
    }

    impl DecisionStore for MockStore {
        async fn list_decisions(
            &self,
            filter: &DecisionFilter,
            page_token: &str,
        ) -> Result<(Vec<Decision>, String), RepositoryError> {
            self.list_calls
                .lock()
                .unwrap()
                .push((filter.clone(), page_token.to_string()));

            if self.fail_list.load(Ordering::SeqCst)
                || (filter.actor_user_id.is_some() && self.fail_reverse_lookup.load(Ordering::SeqCst))
            {
                return Err(injected());
            }

            let after = PageToken::parse_optional(page_token)?;
            let page: Vec<Decision> = self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|d| filter.matches(d))
                .filter(|d| match &after {
                    Some(t) => {
                        d.actor_user_id > t.actor_user_id
                            && d.recipient_user_id > t.recipient_user_id
                    }
                    None => true,
                })
                .take(PAGE_LENGTH)
                .cloned()
                .collect();

            let next = page
                .last()
                .map(|d| PageToken::after(d).to_string())
                .unwrap_or_default();
            Ok((page, next))
        }

        async fn count_decisions(&self, filter: &DecisionFilter) -> Result<u64, RepositoryError> {
            if self.fail_count.load(Ordering::SeqCst) {
                return Err(injected());
            }
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().filter(|d| filter.matches(d)).count() as u64)
        }

        async fn upsert_decision(&self, decision: &Decision) -> Result<(), RepositoryError> {
            if self.fail_upsert.load(Ordering::SeqCst) {
                return Err(injected());
            }
            self.rows.lock().unwrap().insert(
                (
                    decision.actor_user_id.clone(),
                    decision.recipient_user_id.clone(),
                ),
                decision.clone(),
            );
            Ok(())
        }

        async fn mark_decisions_as_seen(
            &self,
            recipient_user_id: &str,
            threshold: i64,
        ) -> Result<(), RepositoryError> {
            if let Some(delay) = self.mark_delay {
                tokio::time::sleep(delay).await;
            }
            self.marks
                .lock()
                .unwrap()
                .push((recipient_user_id.to_string(), threshold));
            if self.fail_mark.load(Ordering::SeqCst) {
                return Err(injected());
            }
            for d in self.rows.lock().unwrap().values_mut() {
                if d.recipient_user_id == recipient_user_id && d.last_modified < threshold {
                    d.seen_by_recipient = true;
                }
            }
            Ok(())
        }
    }

    /// A clock the test can move forward.
    fn manual_clock(start: i64) -> (Arc<AtomicI64>, impl Fn() -> i64 + Send + Sync + 'static) {
        let now = Arc::new(AtomicI64::new(start));
        let handle = Arc::clone(&now);
        (now, move || handle.load(Ordering::SeqCst))
    }

    fn put(actor: &str, recipient: &str, liked: bool) -> PutDecisionRequest {
        PutDecisionRequest {
            actor_user_id: actor.to_string(),
            recipient_user_id: recipient.to_string(),
            liked_recipient: liked,
        }
    }

    fn actor_ids(resp: &ListLikedYouResponse) -> Vec<&str> {
        resp.likers.iter().map(|l| l.actor_id.as_str()).collect()
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_list_liked_you_maps_decisions_to_likers() {
        let store = MockStore::with_rows(&[
            Decision::new("user2", "user1", true, 1),
            Decision::new("user3", "user1", true, 2),
            Decision::new("user4", "user1", true, 3),
            Decision::new("user5", "user1", false, 4),
        ]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.list_liked_you("user1", "").await.unwrap();

        assert_eq!(
            resp.likers,
            vec![
                Liker { actor_id: "user2".into(), unix_timestamp: 1 },
                Liker { actor_id: "user3".into(), unix_timestamp: 2 },
                Liker { actor_id: "user4".into(), unix_timestamp: 3 },
            ]
        );
        assert_eq!(resp.next_pagination_token, "user4##user1");

        let calls = service.store().list_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, DecisionFilter::likes_for("user1"));
        assert_eq!(calls[0].1, "");
    }

    #[tokio::test]
    async fn test_list_liked_you_empty() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        let resp = service.list_liked_you("user1", "").await.unwrap();

        assert!(resp.likers.is_empty());
        assert_eq!(resp.next_pagination_token, "");
    }

    #[tokio::test]
    async fn test_list_liked_you_marks_seen_with_time_captured_at_start() {
        let (now, clock) = manual_clock(100);
        let service = DecisionService::new(MockStore::default()).with_clock(clock);

        service.list_liked_you("user1", "").await.unwrap();
        now.store(200, Ordering::SeqCst);
        service.wait_for_background().await;

        assert_eq!(service.store().marks(), vec![("user1".to_string(), 100)]);
    }

    #[tokio::test]
    async fn test_list_liked_you_passes_token_through() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        service.list_liked_you("user1", "user4##user1").await.unwrap();

        assert_eq!(service.store().list_calls()[0].1, "user4##user1");
    }

    #[tokio::test]
    async fn test_list_liked_you_store_error() {
        let store = MockStore::default();
        store.fail_list.store(true, Ordering::SeqCst);
        let service = DecisionService::new(store).with_clock(|| 10);

        let err = service.list_liked_you("user1", "").await.unwrap_err();
        assert!(matches!(err, DecisionError::List(_)));
        assert_eq!(
            err.to_string(),
            "failed to list decisions: query error: some error"
        );

        // Nothing was read, so nothing is marked.
        service.wait_for_background().await;
        assert!(service.store().marks().is_empty());
    }

    #[tokio::test]
    async fn test_list_liked_you_invalid_token_is_invalid_request() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        let err = service.list_liked_you("user1", "garbage").await.unwrap_err();
        assert!(matches!(err, DecisionError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_list_liked_you_empty_recipient_rejected() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        let err = service.list_liked_you("", "").await.unwrap_err();
        assert!(matches!(err, DecisionError::InvalidRequest(_)));
        assert!(service.store().list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_user_ids_are_accepted() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        service.put_decision(&put(" ", "  ", true)).await.unwrap();
        let resp = service.list_liked_you("  ", "").await.unwrap();
        service.wait_for_background().await;

        assert_eq!(actor_ids(&resp), vec![" "]);
        assert_eq!(service.count_liked_you("  ").await.unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_mark_seen_failure_is_not_surfaced() {
        let store = MockStore::with_rows(&[Decision::new("user2", "user1", true, 1)]);
        store.fail_mark.store(true, Ordering::SeqCst);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.list_liked_you("user1", "").await.unwrap();
        service.wait_for_background().await;

        assert_eq!(actor_ids(&resp), vec!["user2"]);
        assert_eq!(service.store().marks().len(), 1);
        assert!(!service.store().get("user2", "user1").unwrap().seen_by_recipient);
    }

    #[tokio::test]
    async fn test_mark_seen_is_bounded_by_timeout() {
        let store = MockStore {
            mark_delay: Some(Duration::from_secs(30)),
            ..Default::default()
        };
        let service = DecisionService::new(store)
            .with_clock(|| 10)
            .with_mark_seen_timeout(Duration::from_millis(50));

        let started = std::time::Instant::now();
        service.list_liked_you("user1", "").await.unwrap();
        service.wait_for_background().await;

        assert!(started.elapsed() < Duration::from_secs(5));
        // The slow mark was abandoned before it recorded anything.
        assert!(service.store().marks().is_empty());
    }

    #[tokio::test]
    async fn test_response_does_not_wait_for_mark_seen() {
        let store = MockStore {
            mark_delay: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let service = DecisionService::new(store).with_clock(|| 10);

        service.list_liked_you("user1", "").await.unwrap();
        assert!(service.store().marks().is_empty());

        service.wait_for_background().await;
        assert_eq!(service.store().marks().len(), 1);
    }

    #[tokio::test]
    async fn test_mark_seen_survives_aborted_caller() {
        let store = MockStore {
            mark_delay: Some(Duration::from_millis(100)),
            ..MockStore::with_rows(&[Decision::new("user2", "user1", true, 1)])
        };
        let service = Arc::new(DecisionService::new(store).with_clock(|| 10));

        let (listed_tx, listed_rx) = tokio::sync::oneshot::channel();
        let caller = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let resp = service.list_new_liked_you("user1", "").await;
                let _ = listed_tx.send(resp);
                std::future::pending::<()>().await;
            })
        };

        let first = listed_rx.await.unwrap().unwrap();
        assert_eq!(actor_ids(&first), vec!["user2"]);

        caller.abort();
        assert!(caller.await.unwrap_err().is_cancelled());

        service.wait_for_background().await;
        assert_eq!(service.store().marks(), vec![("user1".to_string(), 10)]);

        let second = service.list_new_liked_you("user1", "").await.unwrap();
        assert!(second.likers.is_empty());
    }

    #[tokio::test]
    async fn test_list_new_liked_you_uses_unseen_filter() {
        let mut seen = Decision::new("user3", "user1", true, 2);
        seen.seen_by_recipient = true;
        let store = MockStore::with_rows(&[Decision::new("user2", "user1", true, 1), seen]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.list_new_liked_you("user1", "").await.unwrap();

        assert_eq!(actor_ids(&resp), vec!["user2"]);
        assert_eq!(
            service.store().list_calls()[0].0,
            DecisionFilter::likes_for("user1").unseen()
        );
    }

    #[tokio::test]
    async fn test_list_new_liked_you_drains_after_mark() {
        let store = MockStore::with_rows(&[Decision::new("3", "1", true, 5)]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let first = service.list_new_liked_you("1", "").await.unwrap();
        assert_eq!(actor_ids(&first), vec!["3"]);
        service.wait_for_background().await;

        let second = service.list_new_liked_you("1", "").await.unwrap();
        assert!(second.likers.is_empty());
        assert_eq!(second.next_pagination_token, "");
    }

    #[tokio::test]
    async fn test_list_new_liked_you_keeps_like_recorded_at_snapshot_time() {
        let store = MockStore::with_rows(&[Decision::new("3", "1", true, 10)]);
        let service = DecisionService::new(store).with_clock(|| 10);

        service.list_new_liked_you("1", "").await.unwrap();
        service.wait_for_background().await;

        let again = service.list_new_liked_you("1", "").await.unwrap();
        assert_eq!(actor_ids(&again), vec!["3"]);
    }

    #[tokio::test]
    async fn test_count_liked_you() {
        let store = MockStore::with_rows(&[
            Decision::new("2", "1", true, 1),
            Decision::new("3", "1", true, 1),
            Decision::new("4", "1", false, 1),
            Decision::new("1", "2", true, 1),
        ]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.count_liked_you("1").await.unwrap();
        assert_eq!(resp.count, 2);

        // Pure read: no seen-marking.
        service.wait_for_background().await;
        assert!(service.store().marks().is_empty());
    }

    #[tokio::test]
    async fn test_count_liked_you_store_error() {
        let store = MockStore::default();
        store.fail_count.store(true, Ordering::SeqCst);
        let service = DecisionService::new(store).with_clock(|| 10);

        let err = service.count_liked_you("1").await.unwrap_err();
        assert!(matches!(err, DecisionError::Count(_)));
        assert!(err.to_string().starts_with("failed to count decisions"));
    }

    #[tokio::test]
    async fn test_put_decision_stamps_now_and_resets_seen() {
        let mut old = Decision::new("1", "2", true, 1);
        old.seen_by_recipient = true;
        let store = MockStore::with_rows(&[old]);
        let service = DecisionService::new(store).with_clock(|| 77);

        let resp = service.put_decision(&put("1", "2", false)).await.unwrap();
        assert!(!resp.mutual_likes);

        let stored = service.store().get("1", "2").unwrap();
        assert_eq!(stored, Decision::new("1", "2", false, 77));
    }

    #[tokio::test]
    async fn test_put_decision_pass_skips_reverse_lookup() {
        let store = MockStore::with_rows(&[Decision::new("2", "1", true, 1)]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.put_decision(&put("1", "2", false)).await.unwrap();

        assert!(!resp.mutual_likes);
        assert!(service.store().list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_put_decision_detects_mutual_like() {
        let store = MockStore::with_rows(&[Decision::new("1", "3", true, 1)]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.put_decision(&put("3", "1", true)).await.unwrap();
        assert!(resp.mutual_likes);

        let calls = service.store().list_calls();
        assert_eq!(
            calls[0].0,
            DecisionFilter {
                actor_user_id: Some("1".into()),
                recipient_user_id: Some("3".into()),
                liked_recipient: Some(true),
                ..Default::default()
            }
        );
        assert_eq!(calls[0].1, "");
    }

    #[tokio::test]
    async fn test_put_decision_reverse_pass_is_not_mutual() {
        let store = MockStore::with_rows(&[Decision::new("1", "3", false, 1)]);
        let service = DecisionService::new(store).with_clock(|| 10);

        let resp = service.put_decision(&put("3", "1", true)).await.unwrap();
        assert!(!resp.mutual_likes);
    }

    #[tokio::test]
    async fn test_put_decision_upsert_error() {
        let store = MockStore::default();
        store.fail_upsert.store(true, Ordering::SeqCst);
        let service = DecisionService::new(store).with_clock(|| 10);

        let err = service.put_decision(&put("1", "2", true)).await.unwrap_err();
        assert!(matches!(err, DecisionError::Upsert(_)));
        assert!(err.partial_response().is_none());
        assert!(service.store().list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_put_decision_match_check_error_keeps_upsert() {
        let store = MockStore::with_rows(&[Decision::new("2", "1", true, 1)]);
        store.fail_reverse_lookup.store(true, Ordering::SeqCst);
        let service = DecisionService::new(store).with_clock(|| 10);

        let err = service.put_decision(&put("1", "2", true)).await.unwrap_err();

        assert_eq!(
            err.partial_response(),
            Some(PutDecisionResponse { mutual_likes: false })
        );
        assert!(err.to_string().starts_with("failed to check if it's mutual"));
        assert_eq!(
            service.store().get("1", "2"),
            Some(Decision::new("1", "2", true, 10))
        );
    }

    #[tokio::test]
    async fn test_put_decision_empty_ids_rejected() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        let err = service.put_decision(&put("", "2", true)).await.unwrap_err();
        assert!(matches!(err, DecisionError::InvalidRequest(_)));
        let err = service.put_decision(&put("1", "", true)).await.unwrap_err();
        assert!(matches!(err, DecisionError::InvalidRequest(_)));
        assert!(service.store().get("", "2").is_none());
    }

    #[tokio::test]
    async fn test_scenario_counts_and_matches() {
        let service = DecisionService::new(MockStore::default()).with_clock(|| 10);

        assert!(!service.put_decision(&put("1", "2", false)).await.unwrap().mutual_likes);
        assert!(!service.put_decision(&put("1", "3", true)).await.unwrap().mutual_likes);
        assert!(service.put_decision(&put("3", "1", true)).await.unwrap().mutual_likes);

        assert_eq!(service.count_liked_you("1").await.unwrap().count, 1);
        assert_eq!(service.count_liked_you("2").await.unwrap().count, 0);
        assert_eq!(service.count_liked_you("3").await.unwrap().count, 1);

        // Repeating the decision still reports the match.
        assert!(service.put_decision(&put("3", "1", true)).await.unwrap().mutual_likes);
        // Fresh pair with no reverse decision.
        assert!(!service.put_decision(&put("2", "1", true)).await.unwrap().mutual_likes);
    }
}
