use anyhow::{bail, Result};
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{EmailMessage, EmailerConfig};

pub const VERIFICATION_SUBJECT: &str = "Node 驗證碼";

#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send_mail(&self, message: &EmailMessage) -> Result<()>;
}

#[async_trait]
pub trait MailTransportFactory: Send + Sync {
  /// Builds a transport and confirms the provider accepts it.
  async fn transport(&self) -> Result<Box<dyn MailTransport>>;
}

pub fn build_verification_email(to: &str, code: &str) -> EmailMessage {
  EmailMessage::new(
    to.to_string(),
    VERIFICATION_SUBJECT.to_string(),
    format!("<p>使用 {} 做為 Node 帳戶密碼安全性驗證碼</p>", code),
  )
}

const STARTTLS_PORT: u16 = 587;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SmtpSecurity {
  Plain,
  StartTls,
  ImplicitTls,
}

fn smtp_security(config: &EmailerConfig) -> SmtpSecurity {
  if config.host == "localhost" || config.host == "mailhog" {
    SmtpSecurity::Plain
  } else if config.port == STARTTLS_PORT {
    SmtpSecurity::StartTls
  } else {
    SmtpSecurity::ImplicitTls
  }
}

pub struct SmtpMailTransport {
  from_email: String,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
  pub fn new(config: &EmailerConfig) -> Result<Self> {
    let (user, password) = config.credentials()?;
    let creds = Credentials::new(user.to_string(), password.to_string());

    let builder = match smtp_security(config) {
      SmtpSecurity::Plain => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
      SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?,
      SmtpSecurity::ImplicitTls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
    };
    let transporter = builder.credentials(creds).port(config.port).build();

    Ok(SmtpMailTransport {
      from_email: user.to_string(),
      transporter,
    })
  }

  pub async fn verify(&self) -> Result<()> {
    if !self.transporter.test_connection().await? {
      bail!("SMTP server rejected the connection check");
    }
    Ok(())
  }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
  async fn send_mail(&self, message: &EmailMessage) -> Result<()> {
    let email = Message::builder()
      .from(self.from_email.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html.clone())?;

    self.transporter.send(email).await?;
    Ok(())
  }
}

pub struct SmtpTransportFactory {
  config: EmailerConfig,
}

impl SmtpTransportFactory {
  pub fn new(config: EmailerConfig) -> Self {
    SmtpTransportFactory { config }
  }
}

#[async_trait]
impl MailTransportFactory for SmtpTransportFactory {
  async fn transport(&self) -> Result<Box<dyn MailTransport>> {
    let transport = SmtpMailTransport::new(&self.config)?;
    transport.verify().await?;
    tracing::debug!("SMTP transport verified for {}:{}", self.config.host, self.config.port);
    Ok(Box::new(transport))
  }
}
