mod goals;
mod motivation;
mod report;
mod targeting;
mod tef;

pub use goals::GoalEnvelope;
pub use motivation::MotivationEnvelope;
pub use report::generate_threat_report;
pub use targeting::TargetingEnvelope;
pub use tef::TefEnvelope;

#[cfg(test)]
mod tests;
