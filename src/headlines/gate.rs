use super::generation::Generator;
use super::session::SessionState;
use super::style::HeadlineStyle;
use super::{FREE_LIMIT, HeadlineError};

#[derive(Debug, PartialEq, Eq)]
pub enum QuotaStatus {
    Unlimited,
    Free { used: u32, remaining: u32, limit: u32 },
}

/// Decides whether a submission reaches the generator and keeps the
/// session's request counter in step with it.
///
/// The unlock code is a single shared string compared for equality. It
/// grants no per-user identity and can't be revoked short of a restart.
pub struct RequestGate<G> {
    generator: G,
    unlock_code: Option<String>,
    limit: u32,
}

impl<G: Generator> RequestGate<G> {
    pub fn new(generator: G, unlock_code: Option<String>) -> Self {
        Self {
            generator,
            unlock_code: unlock_code.filter(|code| !code.is_empty()),
            limit: FREE_LIMIT,
        }
    }

    pub fn is_unlocked(&self, unlock_input: &str) -> bool {
        self.unlock_code.as_deref().is_some_and(|code| code == unlock_input)
    }

    pub fn status(&self, session: &SessionState, unlock_input: &str) -> QuotaStatus {
        self.quota(session.request_count(), unlock_input)
    }

    /// Quota as it will stand once the pending request is recorded.
    pub fn status_after_request(&self, session: &SessionState, unlock_input: &str) -> QuotaStatus {
        self.quota(session.request_count().saturating_add(1), unlock_input)
    }

    fn quota(&self, used: u32, unlock_input: &str) -> QuotaStatus {
        if self.is_unlocked(unlock_input) {
            return QuotaStatus::Unlimited;
        }

        QuotaStatus::Free { used, remaining: self.limit.saturating_sub(used), limit: self.limit }
    }

    /// Rejects a submission that must not reach the generator.
    pub fn check(
        &self,
        session: &SessionState,
        topic: &str,
        unlock_input: &str,
    ) -> Result<(), HeadlineError> {
        if topic.trim().is_empty() {
            return Err(HeadlineError::Validation);
        }

        if !self.is_unlocked(unlock_input) && session.request_count() >= self.limit {
            log::info!("quota of {} exhausted", self.limit);
            return Err(HeadlineError::QuotaExceeded { limit: self.limit });
        }

        Ok(())
    }

    /// Runs one submission through [`Self::check`] and the generator. The
    /// counter is not touched here: a successful result is charged with
    /// [`Self::record`] once it has been shown.
    pub async fn attempt(
        &self,
        session: &SessionState,
        topic: &str,
        style: HeadlineStyle,
        unlock_input: &str,
    ) -> Result<String, HeadlineError> {
        self.check(session, topic, unlock_input)?;

        let result = self.generator.generate(topic.trim(), style).await;

        if let Err(err) = &result {
            log::warn!("headline generation failed: {err}");
        }

        result
    }

    pub fn record(&self, session: &mut SessionState, unlock_input: &str) {
        if !self.is_unlocked(unlock_input) {
            session.record_request();
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    const SECRET: &str = "TurboTitle2025";

    struct FakeGenerator {
        calls: Mutex<Vec<(String, HeadlineStyle)>>,
        result: Result<String, HeadlineError>,
    }

    impl FakeGenerator {
        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Generator for FakeGenerator {
        async fn generate(
            &self,
            topic: &str,
            style: HeadlineStyle,
        ) -> Result<String, HeadlineError> {
            self.calls.lock().unwrap().push((topic.into(), style));
            self.result.clone()
        }
    }

    fn gate(result: Result<String, HeadlineError>) -> RequestGate<FakeGenerator> {
        let generator = FakeGenerator { calls: Mutex::new(Vec::new()), result };
        RequestGate::new(generator, Some(SECRET.into()))
    }

    fn exhausted_session(count: u32) -> SessionState {
        let mut session = SessionState::default();
        for _ in 0..count {
            session.record_request();
        }
        session
    }

    #[tokio::test]
    async fn test_successful_generation_counts_once_recorded() {
        let gate = gate(Ok("1. Title".into()));
        let mut session = SessionState::default();

        let result = gate.attempt(&session, "rust", HeadlineStyle::Serious, "").await;
        assert_eq!(result.as_deref(), Ok("1. Title"));
        assert_eq!(session.request_count(), 0);
        assert_eq!(
            gate.generator.calls.lock().unwrap().as_slice(),
            [("rust".to_owned(), HeadlineStyle::Serious)]
        );

        let expected = gate.status_after_request(&session, "");
        gate.record(&mut session, "");
        assert_eq!(session.request_count(), 1);
        assert_eq!(gate.status(&session, ""), expected);
        assert_eq!(expected, QuotaStatus::Free { used: 1, remaining: 4, limit: 5 });
    }

    #[tokio::test]
    async fn test_sixth_request_exceeds_quota() {
        let gate = gate(Ok("titles".into()));
        let mut session = SessionState::default();

        for _ in 0..FREE_LIMIT {
            gate.attempt(&session, "topic", HeadlineStyle::Informational, "").await.unwrap();
            gate.record(&mut session, "");
        }
        assert_eq!(session.request_count(), 5);

        let result = gate.attempt(&session, "topic", HeadlineStyle::Informational, "").await;
        assert_eq!(result, Err(HeadlineError::QuotaExceeded { limit: 5 }));
        assert_eq!(session.request_count(), 5);
        assert_eq!(gate.generator.call_count(), 5);
    }

    #[test]
    fn test_check_rejects_before_generation() {
        let gate = gate(Ok("titles".into()));

        assert_eq!(gate.check(&SessionState::default(), "topic", ""), Ok(()));
        assert_eq!(
            gate.check(&exhausted_session(FREE_LIMIT), "topic", ""),
            Err(HeadlineError::QuotaExceeded { limit: FREE_LIMIT })
        );
        assert_eq!(gate.check(&exhausted_session(FREE_LIMIT), "topic", SECRET), Ok(()));
        assert_eq!(
            gate.check(&SessionState::default(), " ", SECRET),
            Err(HeadlineError::Validation)
        );
        assert_eq!(gate.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_remaining_quota() {
        let gate = gate(Ok("titles".into()));
        let mut session = SessionState::default();

        for used in 0..=FREE_LIMIT {
            assert_eq!(
                gate.status(&session, ""),
                QuotaStatus::Free { used, remaining: FREE_LIMIT - used, limit: FREE_LIMIT }
            );
            if gate.attempt(&session, "topic", HeadlineStyle::Humorous, "").await.is_ok() {
                gate.record(&mut session, "");
            }
        }

        assert_eq!(
            gate.status(&session, "wrong"),
            QuotaStatus::Free { used: 5, remaining: 0, limit: 5 }
        );
        assert_eq!(
            gate.status(&exhausted_session(10), ""),
            QuotaStatus::Free { used: 10, remaining: 0, limit: 5 }
        );
        assert_eq!(gate.status(&session, SECRET), QuotaStatus::Unlimited);
        assert_eq!(gate.status_after_request(&session, SECRET), QuotaStatus::Unlimited);
    }

    #[tokio::test]
    async fn test_unlock_code_bypasses_quota() {
        let gate = gate(Ok("titles".into()));
        let mut session = exhausted_session(10);

        let result = gate.attempt(&session, "topic", HeadlineStyle::Clickbait, SECRET).await;
        assert!(result.is_ok());
        gate.record(&mut session, SECRET);
        assert_eq!(gate.generator.call_count(), 1);
        assert_eq!(session.request_count(), 10);
    }

    #[tokio::test]
    async fn test_wrong_unlock_code_is_enforced() {
        let gate = gate(Ok("titles".into()));
        let session = exhausted_session(FREE_LIMIT);

        for input in ["", "TurboTitle", "turbotitle2025", " TurboTitle2025", "TurboTitle20255"] {
            let result = gate.attempt(&session, "topic", HeadlineStyle::Clickbait, input).await;
            let expected = Err(HeadlineError::QuotaExceeded { limit: FREE_LIMIT });
            assert_eq!(result, expected, "{input:?}");
        }
        assert_eq!(gate.generator.call_count(), 0);
    }

    #[test]
    fn test_unconfigured_unlock_code_never_matches() {
        for unlock_code in [None, Some(String::new())] {
            let gate = RequestGate::new(
                FakeGenerator { calls: Mutex::new(Vec::new()), result: Ok(String::new()) },
                unlock_code,
            );
            assert!(!gate.is_unlocked(""));
            assert_eq!(
                gate.status(&SessionState::default(), ""),
                QuotaStatus::Free { used: 0, remaining: 5, limit: 5 }
            );
        }
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected() {
        let gate = gate(Ok("titles".into()));

        for topic in ["", "   ", "\n"] {
            let result =
                gate.attempt(&SessionState::default(), topic, HeadlineStyle::Serious, SECRET).await;
            assert_eq!(result, Err(HeadlineError::Validation));
        }

        let session = exhausted_session(FREE_LIMIT);
        let result = gate.attempt(&session, "", HeadlineStyle::Serious, "").await;
        assert_eq!(result, Err(HeadlineError::Validation));

        assert_eq!(gate.generator.call_count(), 0);
        assert_eq!(session.request_count(), FREE_LIMIT);
    }

    #[tokio::test]
    async fn test_failed_generation_is_not_charged() {
        for error in [
            HeadlineError::MissingCredential,
            HeadlineError::Service("Google error 503: overloaded".into()),
            HeadlineError::Unexpected("connection reset".into()),
        ] {
            let gate = gate(Err(error.clone()));
            let session = SessionState::default();

            let result = gate.attempt(&session, "topic", HeadlineStyle::Serious, "").await;
            assert_eq!(result, Err(error));
            assert_eq!(gate.generator.call_count(), 1);
            assert_eq!(session.request_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_topic_is_trimmed() {
        let gate = gate(Ok("titles".into()));

        let topic = "  cooking pasta \n";
        gate.attempt(&SessionState::default(), topic, HeadlineStyle::Humorous, "").await.unwrap();
        assert_eq!(gate.generator.calls.lock().unwrap()[0].0, "cooking pasta");
    }
}
