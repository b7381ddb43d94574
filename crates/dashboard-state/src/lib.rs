mod snapshot;
mod state;

pub use snapshot::DashboardSnapshot;
pub use state::DashboardState;
