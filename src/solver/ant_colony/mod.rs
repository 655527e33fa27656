pub mod construction;
pub mod pheromone;
pub mod probability;
pub mod sampler;
pub mod search;

pub use construction::*;
pub use pheromone::*;
pub use probability::*;
pub use sampler::*;
pub use search::*;
