use anyhow::Context;
use std::sync::Arc;

use crate::context::ModuleCtx;
use crate::contracts::Module;

/// Ordered set of modules initialised by the host binary.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .finish()
    }
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module; duplicate names are rejected.
    pub fn register(&mut self, module: Arc<dyn Module>) -> anyhow::Result<()> {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            anyhow::bail!("module '{}' registered twice", module.name());
        }
        self.modules.push(module);
        Ok(())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// Run `init` for every module in registration order, each with a
    /// context scoped to its own name. Stops at the first failure.
    pub async fn init_all(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        for module in &self.modules {
            let name = module.name();
            tracing::debug!(module = name, "initializing module");
            module
                .init(&ctx.for_module(name))
                .await
                .with_context(|| format!("module '{name}' failed to initialize"))?;
        }
        tracing::info!(modules = ?self.names(), "modules initialized");
        Ok(())
    }
}
