//! Wire format for session tokens.
//!
//! A token is a compact HS256 JWS whose claims carry the format version, the
//! username, a random token id and the issuance time in milliseconds. Expiry is
//! not encoded; the holder of the codec decides how old is too old.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub(crate) const TOKEN_VERSION: u8 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct Claims {
    pub(crate) ver: u8,
    pub(crate) sub: String,
    pub(crate) jti: String,
    /// Milliseconds since the Unix epoch.
    pub(crate) iat: i64,
}

impl Claims {
    pub(crate) fn new(username: &str, issued_at: i64) -> Self {
        Self {
            ver: TOKEN_VERSION,
            sub: username.to_owned(),
            jti: Uuid::new_v4().simple().to_string(),
            iat: issued_at,
        }
    }
}

#[derive(Clone)]
pub(crate) struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub(crate) fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
    }

    /// Returns `None` for anything that is not a correctly signed token of a known version.
    pub(crate) fn decode(&self, token: &str) -> Option<Claims> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) if data.claims.ver == TOKEN_VERSION => Some(data.claims),
            Ok(data) => {
                tracing::debug!("unsupported token version {}", data.claims.ver);
                None
            }
            Err(e) => {
                tracing::debug!("token rejected: {:?}", e.kind());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_recovers_claims() {
        let codec = TokenCodec::new("secret");
        let claims = Claims::new("usuario1", 1_700_000_000_123);

        let token = codec.encode(&claims).unwrap();

        assert_eq!(codec.decode(&token), Some(claims));
    }

    #[test]
    fn test_tokens_are_distinct_and_path_safe() {
        let codec = TokenCodec::new("secret");

        let a = codec.encode(&Claims::new("usuario1", 0)).unwrap();
        let b = codec.encode(&Claims::new("usuario1", 0)).unwrap();

        assert_ne!(a, b);
        assert!(
            a.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let codec = TokenCodec::new("secret");

        assert_eq!(codec.decode("no_existe_token"), None);
        assert_eq!(codec.decode("a.b.c"), None);
        assert_eq!(codec.decode(""), None);
    }

    #[test]
    fn test_decode_rejects_foreign_signature() {
        let token = TokenCodec::new("other")
            .encode(&Claims::new("usuario1", 0))
            .unwrap();

        assert_eq!(TokenCodec::new("secret").decode(&token), None);
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let codec = TokenCodec::new("secret");
        let mut claims = Claims::new("usuario1", 0);
        claims.ver = TOKEN_VERSION + 1;

        let token = codec.encode(&claims).unwrap();

        assert_eq!(codec.decode(&token), None);
    }
}
