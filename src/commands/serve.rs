use crate::commands::Out;
use crate::{server, Config, Result};

/// Runs the HTTP server until it is asked to shut down.
pub async fn serve(config: Config) -> Result<Out<()>> {
    server::run_server(&config).await?;
    Ok(Out::new_message("The receipt processor has stopped"))
}
