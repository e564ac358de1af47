//! # Handler Registry
//!
//! The registration table a host fills with handler units at load time.
//! Each unit is registered under the name of the command it declares via
//! [`CommandHandlerFactory::handled_command`]; lookups are by name, ignoring
//! case.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::command::Command;
use crate::domain::error::RegistryError;
use crate::domain::traits::CommandHandlerFactory;

/// Maps command names to the handler units servicing them.
#[derive(Default)]
pub struct HandlerRegistry {
    factories: HashMap<String, Arc<dyn CommandHandlerFactory>>,
}

impl HandlerRegistry {
    pub fn new() -> HandlerRegistry {
        HandlerRegistry::default()
    }

    /// Registers a handler unit under the name its descriptor declares.
    /// Registering a second unit for the same name is an error.
    pub fn register(
        &mut self,
        factory: Arc<dyn CommandHandlerFactory>,
    ) -> Result<(), RegistryError> {
        let name = factory.handled_command().name().to_lowercase();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::DuplicateCommand(name));
        }
        tracing::debug!(command = %name, "registered command handler");
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Looks up the handler unit for a command name, ignoring case.
    pub fn factory_for(&self, name: &str) -> Option<&Arc<dyn CommandHandlerFactory>> {
        self.factories.get(&name.to_lowercase())
    }

    /// The descriptors of every registered command, ordered by command type
    /// and then by name.
    pub fn commands(&self) -> Vec<Command> {
        let mut commands: Vec<Command> = self
            .factories
            .values()
            .map(|factory| factory.handled_command().clone())
            .collect();
        commands.sort_by(Command::display_cmp);
        commands
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
