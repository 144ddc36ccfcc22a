use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig
{
	/// The IP address the server should listen on.
	pub ip: IpAddr,

	/// The port the server should listen on.
	pub port: u16,

	/// How long a single request may take before we respond with `408 Request Timeout`
	/// (in seconds).
	#[serde(deserialize_with = "super::deserialize_duration")]
	pub handler_timeout: Duration,
}

impl HttpConfig
{
	pub fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip, self.port)
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
			port: 8000,
			handler_timeout: Duration::from_secs(90),
		}
	}
}
