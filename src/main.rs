#[tokio::main]
async fn main() {
    if let Err(e) = tokengate::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
