pub mod ids;
pub mod response;
pub mod user;

pub use ids::*;
pub use response::*;
pub use user::*;
