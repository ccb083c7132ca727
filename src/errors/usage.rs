#[derive(thiserror::Error, Debug)]
pub enum UsageErrorKind {
    #[error("Container isn't configured. `configure` must complete before `create`")]
    NotConfigured,
    #[error("Container is already configured or a `configure` call is in flight")]
    AlreadyConfigured,
}
