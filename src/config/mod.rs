pub mod traits;
pub mod evolution;
pub mod constraints;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::EvolutionConfig;
pub use constraints::{ConstraintConfig, SoftConstraintConfig};
pub use traits::ConfigSection;
