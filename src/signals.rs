/// Resolves once the process receives SIGINT (Ctrl+C).
pub(crate) async fn sigint()
{
	match tokio::signal::ctrl_c().await {
		Ok(()) => warn!("received SIGINT; shutting down"),
		Err(error) => error!(%error, "failed to receive SIGINT"),
	}
}
