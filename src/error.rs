/// Macro to generate common From implementations for service errors
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(VerifyServiceError, InternalServerError);
/// ```
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $internal_variant:ident) => {
    impl From<sqlx::Error> for $error_type {
      fn from(err: sqlx::Error) -> Self {
        <$error_type>::$internal_variant(format!("Database error: {}", err))
      }
    }

    impl From<anyhow::Error> for $error_type {
      fn from(err: anyhow::Error) -> Self {
        <$error_type>::$internal_variant(format!("{:#}", err))
      }
    }

    impl From<jsonwebtoken::errors::Error> for $error_type {
      fn from(err: jsonwebtoken::errors::Error) -> Self {
        <$error_type>::$internal_variant(format!("Token error: {}", err))
      }
    }
  };
}
