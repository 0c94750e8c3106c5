use crate::error::RouterError;
use crate::handler::handler;
use crate::router::Router;

/// Declare the demo application's routes on `router`.
///
/// # Errors
///
/// Only if a template is rejected, which the fixed demo templates are not.
pub fn demo_router(router: &mut Router) -> Result<(), RouterError> {
    router.group("/user", |r| {
        r.get(
            "/error",
            handler(|_ctx, res| {
                res.status(500);
            }),
        )?;
        r.get(
            "/:name",
            handler(|ctx, res| {
                let name = ctx.param("name").unwrap_or_default();
                res.status(200).json(format!("hello {name}"));
            }),
        )?;
        Ok(())
    })?;
    Ok(())
}
