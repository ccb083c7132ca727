mod configure;
mod create;
mod options;
mod usage;

pub use configure::ConfigureErrorKind;
pub use create::CreateErrorKind;
pub use options::OptionsErrorKind;
pub use usage::UsageErrorKind;
