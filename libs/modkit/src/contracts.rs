use async_trait::async_trait;

/// Core module contract: wiring only. A module reads its configuration,
/// builds its services and publishes its public API to the `ClientHub`.
#[async_trait]
pub trait Module: Send + Sync + 'static {
    /// Name used to scope configuration and logs.
    fn name(&self) -> &'static str;

    async fn init(&self, ctx: &crate::context::ModuleCtx) -> anyhow::Result<()>;
}
