//! Reference implementations of the ports.
//!
//! - `InMemoryTaskStore`: development/test store (mutexed map)
//! - `HttpDispatcher`: the real backend call (reqwest)

pub mod http_dispatcher;
pub mod memory_store;

pub use self::http_dispatcher::HttpDispatcher;
pub use self::memory_store::InMemoryTaskStore;
