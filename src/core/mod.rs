pub mod context;

pub use crate::domain::model::{Race, RaceId, RaceResults, Races};
pub use crate::domain::ports::{ConfigProvider, RaceDataClient};
pub use crate::utils::error::Result;
pub use context::{CancelHandle, FetchContext};
