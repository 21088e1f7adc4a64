pub mod coordinates;
pub mod filter;
pub mod marker;
pub mod pothole;
pub mod route;

pub use coordinates::Coordinates;
pub use filter::{FilterState, Quartile, QuartileChoice, UrbanRuralChoice};
pub use marker::{MapWidget, MarkerSpec};
pub use pothole::{PotholeRecord, PotholeTable};
pub use route::RouteRecord;
