mod guards;
mod metrics;

pub use guards::flag_total_risk_increase;
pub use metrics::DashboardMetrics;

#[cfg(test)]
mod tests;
