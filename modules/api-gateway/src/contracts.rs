use axum::Router;

/// A module that exposes REST endpoints through the gateway.
pub trait RestApiCapability: Send + Sync {
    /// Name used in logs when the module's routes are registered.
    fn name(&self) -> &'static str;

    /// Add this module's routes to `router`.
    ///
    /// # Errors
    /// Returns an error if the module cannot build its routes.
    fn register_rest(&self, router: Router) -> anyhow::Result<Router>;
}
