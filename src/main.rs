use color_image_fetcher::{logging, Config, UReqFetcher};

fn main() {
    logging::init_logger();

    let config = Config::default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = color_image_fetcher::run(&config, UReqFetcher::new(), &mut out) {
        tracing::error!("Batch aborted: {}", e);
        std::process::exit(1);
    }
}
