use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

const CODE_LENGTH: usize = 6;
const TOKEN_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct EmailClaims {
  pub code: String,
  pub exp: usize,
}

/// A freshly issued code and the token that proves it.
#[derive(Debug, Clone)]
pub struct VerificationCode {
  pub code: String,
  pub token: String,
}

#[derive(Clone)]
pub struct EmailTokenIssuer {
  secret: String,
}

impl EmailTokenIssuer {
  pub fn new(secret: impl Into<String>) -> Self {
    Self { secret: secret.into() }
  }

  pub fn generate(&self) -> Result<VerificationCode, jsonwebtoken::errors::Error> {
    let code = generate_code();
    let exp = (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp() as usize;

    let claims = EmailClaims { code: code.clone(), exp };
    let token = encode(
      &Header::default(),
      &claims,
      &EncodingKey::from_secret(self.secret.as_ref()),
    )?;

    Ok(VerificationCode { code, token })
  }

  /// Recovers the code a token was issued for. Fails on a bad signature or an expired token.
  pub fn decode_code(&self, token: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let token_data = decode::<EmailClaims>(
      token,
      &DecodingKey::from_secret(self.secret.as_ref()),
      &Validation::default(),
    )?;

    Ok(token_data.claims.code)
  }
}

fn generate_code() -> String {
  let mut rng = rand::thread_rng();
  (0..CODE_LENGTH)
    .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
    .collect()
}
