use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::web;
use std::net::SocketAddr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port } = cmd {
        web::init_tracing();

        let host = bind.as_deref().unwrap_or(&cfg.bind_address);
        let port = port.unwrap_or(cfg.port);
        let addr = resolve_addr(host, port)?;

        // Schema is brought up to date once, before the first request.
        {
            let pool = open_db(cfg)?;
            ttlog_quiet(&pool.conn, "serve", &addr.to_string(), "Web interface started");
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(web::serve(cfg.clone(), addr))?;
    }

    Ok(())
}

fn resolve_addr(host: &str, port: u16) -> AppResult<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid bind address '{host}:{port}': {e}")))
}
