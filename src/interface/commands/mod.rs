//! # Bundled Commands
//!
//! Handler units shipped with the crate. Each file holds one command's
//! handler/factory pair; together they exercise every part of the contract:
//! optional parameters (`hello`), the no-parameters sentinel (`ping`),
//! required free text (`echo`) and deferred events (`remind`).

pub mod echo;
pub mod hello;
pub mod ping;
pub mod remind;

use thiserror::Error;

use crate::application::registry::HandlerRegistry;
use crate::domain::error::{ParseSpecError, RegistryError};

/// Failure while setting up the bundled handlers.
#[derive(Debug, Error)]
pub enum BundledSetupError {
    #[error(transparent)]
    ParseSpec(#[from] ParseSpecError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Registers every bundled handler unit with the given registry.
pub fn register_bundled(registry: &mut HandlerRegistry) -> Result<(), BundledSetupError> {
    registry.register(hello::HelloFactory::shared()?)?;
    registry.register(ping::PingFactory::shared())?;
    registry.register(echo::EchoFactory::shared()?)?;
    registry.register(remind::RemindFactory::shared()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_bundled() {
        let mut registry = HandlerRegistry::new();
        register_bundled(&mut registry).unwrap();
        assert_eq!(registry.len(), 4);

        for name in ["hello", "ping", "echo", "remind"] {
            let factory = registry.factory_for(name).unwrap();
            assert_eq!(factory.handled_command().name(), name);
        }
    }
}
