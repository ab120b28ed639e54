/// Network adapters for external API calls
mod mend_client;

pub use mend_client::{MendApiClient, AGENT_NAME};
