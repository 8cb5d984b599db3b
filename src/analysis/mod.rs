pub mod debug;
pub mod score;
pub mod tags;

pub use debug::build_debug_info;
pub use score::calculate_quality_score;
pub use tags::generate_tags;
