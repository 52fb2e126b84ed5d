mod exam;
mod state;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exam::ExamView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topics::TopicsView;
