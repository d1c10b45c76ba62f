pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ProviderError, TimingsProvider, TimingsQuery, fetch_or_unknown};
pub use providers::AladhanProvider;
pub use types::CalculationMethod;
