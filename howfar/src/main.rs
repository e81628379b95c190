use clap::Parser;
use howfar::app::HowfarApp;

fn main() {
    env_logger::init();
    let args = HowfarApp::parse();
    log::info!("howfar started at {}", chrono::Local::now().to_rfc3339());
    match args.run() {
        Ok(_) => log::info!("howfar finished at {}", chrono::Local::now().to_rfc3339()),
        Err(e) => {
            log::error!("howfar failed: {e}");
            eprintln!("{e}");
            std::process::exit(1)
        }
    }
}
