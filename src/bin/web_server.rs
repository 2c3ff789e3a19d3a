use dijkstra_viz::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [static_dir]
    let config = ServerConfig::from_args(env::args().skip(1));

    println!("🔧 Starting Dijkstra visualizer...");
    println!("   📡 Address: http://{}", config.addr());
    println!("   📁 Static files: {}", config.static_dir);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!();

    start_server(config).await?;

    Ok(())
}
