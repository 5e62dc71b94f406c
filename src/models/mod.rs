pub mod plan;
pub mod preference;
pub mod trip;
