use super::usage::UsageErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum ConfigureErrorKind {
    #[error("Module {name} (position {index}) failed to configure: {source}")]
    Module {
        index: usize,
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Usage(#[from] UsageErrorKind),
}
