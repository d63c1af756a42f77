// Mock implementations for adapter layer testing
#![allow(dead_code)]

pub mod journal;
pub mod mock_presence;
pub mod mock_provider;
pub mod mock_registry;
pub mod mock_responder;

pub use journal::Journal;
pub use mock_presence::MockPresence;
pub use mock_provider::MockProvider;
pub use mock_registry::MockRegistry;
pub use mock_responder::MockResponder;
