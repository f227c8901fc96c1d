use palindrome_messages::infra::config::ServerConfig;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads (all optional):\n\
           PORT (default 8090), BIND_HOST (default 0.0.0.0), S_DELAY (seconds, default 0)\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = ServerConfig::from_env()?;

    println!("> Preflight:");
    println!("  BIND_HOST={}", config.host);
    println!("  PORT={}", config.port);
    println!("  S_DELAY={:?}", config.classification_delay);
    if config.classification_delay.is_zero() {
        println!("  Note: no classification delay, messages resolve almost immediately.");
    }

    // The listener is dropped right away; this only proves the address is usable.
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot bind {}: {}", addr, e))?;
    println!("  Bound {} (ok).", listener.local_addr()?);

    println!("> Preflight OK.");
    Ok(())
}
