pub mod app;
pub mod clock;
pub mod fortune;
pub mod greeting;

pub use crate::domain::model::{FortuneList, Report};
pub use crate::domain::ports::{Clock, FortuneSource};
