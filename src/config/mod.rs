pub mod endpoints;
pub mod environment;

use crate::error::Result;

pub use endpoints::EndpointConfig;
pub use environment::Environment;

/// Look up the endpoints for an externally-resolved environment key.
///
/// The key must name one of the recognized environments; anything else is an
/// error, never a silent fallback, so a misconfigured build cannot end up
/// talking to the wrong host.
pub fn endpoints_for(key: &str) -> Result<EndpointConfig> {
    let env: Environment = key.parse()?;
    Ok(env.endpoints())
}
