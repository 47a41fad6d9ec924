//! Survey domain: records, filter state, and the immutable store.

pub mod dataset;
pub mod model;
pub mod store;

pub use dataset::survey_store;
pub use model::{EducationSource, FilterState, SurveyRecord, YearSelection};
pub use store::SurveyStore;
