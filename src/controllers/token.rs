use std::sync::Arc;

use chrono::Duration;

use crate::core::clock::Clock;
use crate::core::error::{Error, LookupError};
use crate::token::codec::{Claims, TokenCodec};

/// Issues self-describing session tokens and classifies them on lookup.
///
/// Nothing is stored: a token's validity is recomputed from its own issuance
/// time on every lookup.
#[derive(Clone)]
pub(crate) struct TokenController {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenController")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenController {
    pub(crate) fn new(codec: TokenCodec, clock: Arc<dyn Clock>, lifetime: Duration) -> Self {
        Self {
            codec,
            clock,
            lifetime,
        }
    }

    pub(crate) fn issue(&self, username: &str) -> Result<String, Error> {
        let claims = Claims::new(username, self.clock.now_millis());

        Ok(self.codec.encode(&claims)?)
    }

    /// Resolves a token back to itself if it is well formed and not older than
    /// the lifetime. A token exactly one lifetime old is still valid.
    pub(crate) fn resolve(&self, token: &str) -> Result<String, LookupError> {
        if token.is_empty() {
            return Err(LookupError::NullToken);
        }

        let claims = self.codec.decode(token).ok_or(LookupError::NotFound)?;

        let age = self.clock.now_millis().saturating_sub(claims.iat);

        if age > self.lifetime.num_milliseconds() {
            tracing::debug!(user = %claims.sub, age, "token expired");
            return Err(LookupError::Expired);
        }

        Ok(token.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::testing::ManualClock;

    const NOW: i64 = 1_700_000_000_000;
    const MINUTE: i64 = 60 * 1000;

    fn controller() -> (TokenController, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(NOW));
        let controller = TokenController::new(
            TokenCodec::new("secret"),
            clock.clone(),
            Duration::minutes(60),
        );

        (controller, clock)
    }

    fn token_issued_at(issued_at: i64) -> String {
        TokenCodec::new("secret")
            .encode(&Claims::new("usuario1", issued_at))
            .unwrap()
    }

    #[test]
    fn test_issue_then_resolve() {
        let (controller, _) = controller();

        let token = controller.issue("usuario1").unwrap();

        assert!(!token.is_empty());
        assert_eq!(controller.resolve(&token), Ok(token));
    }

    #[test]
    fn test_issued_tokens_are_distinct() {
        let (controller, _) = controller();

        assert_ne!(
            controller.issue("usuario1").unwrap(),
            controller.issue("usuario1").unwrap()
        );
    }

    #[test]
    fn test_resolve_expiry_boundary() {
        let (controller, _) = controller();

        let at_59 = token_issued_at(NOW - 59 * MINUTE);
        let at_60 = token_issued_at(NOW - 60 * MINUTE);
        let past_60 = token_issued_at(NOW - 60 * MINUTE - 1);
        let at_61 = token_issued_at(NOW - 61 * MINUTE);

        assert_eq!(controller.resolve(&at_59), Ok(at_59.clone()));
        assert_eq!(controller.resolve(&at_60), Ok(at_60.clone()));
        assert_eq!(controller.resolve(&past_60), Err(LookupError::Expired));
        assert_eq!(controller.resolve(&at_61), Err(LookupError::Expired));
    }

    #[test]
    fn test_issued_token_expires_as_clock_advances() {
        let (controller, clock) = controller();
        let token = controller.issue("usuario1").unwrap();

        clock.advance(60 * MINUTE);
        assert_eq!(controller.resolve(&token), Ok(token.clone()));

        clock.advance(1);
        assert_eq!(controller.resolve(&token), Err(LookupError::Expired));
    }

    #[test]
    fn test_resolve_future_token_is_valid() {
        let (controller, _) = controller();
        let token = token_issued_at(NOW + 5 * MINUTE);

        assert_eq!(controller.resolve(&token), Ok(token.clone()));
    }

    #[test]
    fn test_resolve_null_token() {
        let (controller, _) = controller();

        assert_eq!(controller.resolve(""), Err(LookupError::NullToken));
    }

    #[test]
    fn test_resolve_not_found() {
        let (controller, _) = controller();

        assert_eq!(
            controller.resolve("no_existe_token"),
            Err(LookupError::NotFound)
        );

        let foreign = TokenCodec::new("other")
            .encode(&Claims::new("usuario1", NOW))
            .unwrap();
        assert_eq!(controller.resolve(&foreign), Err(LookupError::NotFound));
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let (controller, _) = controller();
        let token = controller.issue("usuario1").unwrap();

        assert_eq!(
            controller.resolve(&format!(" {token}")),
            Err(LookupError::NotFound)
        );
        assert_eq!(
            controller.resolve(&format!("{token}x")),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_custom_lifetime() {
        let clock = Arc::new(ManualClock::new(NOW));
        let controller =
            TokenController::new(TokenCodec::new("secret"), clock.clone(), Duration::minutes(5));
        let token = controller.issue("usuario1").unwrap();

        clock.advance(5 * MINUTE + 1);

        assert_eq!(controller.resolve(&token), Err(LookupError::Expired));
    }
}
