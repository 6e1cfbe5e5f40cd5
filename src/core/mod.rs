pub mod history;
pub mod primitives;
pub mod ruler;
pub mod types;
pub mod view;

pub use history::{DataSpan, HistoricalEvent, History};
pub use ruler::{RulerFrame, Tick};
pub use types::Viewport;
pub use view::{ViewState, ViewTransform, fit_zoom};
