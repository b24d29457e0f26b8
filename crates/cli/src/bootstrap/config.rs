use anyhow::{anyhow, Context};
use ferrous_lookup_domain::{CliOverrides, Config};
use std::net::Ipv4Addr;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Server the lookup starts from: the command line wins over the config file.
pub fn start_server(config: &Config) -> anyhow::Result<Ipv4Addr> {
    match config.resolver.root_server_addr() {
        Some(Ok(addr)) => Ok(addr),
        Some(Err(e)) => Err(anyhow!(e)),
        None => Err(anyhow!(
            "no root server given; pass one after the domain or set resolver.root_server"
        )),
    }
}
