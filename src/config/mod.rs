//! Configuration for the client resolver: named constants, the credentials
//! snapshot, and the static model registries.

pub mod constants;
pub mod credentials;
pub mod models;

pub use credentials::{ResolverCredentials, load_dotenv};
pub use models::ModelPricing;
