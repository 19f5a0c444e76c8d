use configs::{AppConfig, DatabaseConfig, ServerConfig};

fn memory_config(host: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig { host: host.into(), port: 0, worker_threads: Some(1) },
        database: DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() },
    }
}

#[tokio::test]
async fn run_with_config_binds_a_host_name_and_stops_on_shutdown() -> anyhow::Result<()> {
    // migrations run against the default pool size, then the server stops at once
    server::run_with_config(memory_config("localhost"), async {}).await
}

