pub mod filter_engine;
pub mod marker_renderer;
pub mod pipeline;
pub mod quartiles;
pub mod sampler;
