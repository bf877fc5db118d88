use bitmapfont_atlas::{cli, debug, generate};

fn main() {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("bitmapfont-gen: error: {e}");
            std::process::exit(1);
        }
    };
    debug::init_log_bridge(options.log_level, options.config.log_level);

    log::info!("Starting bitmapfont-gen ({} variant)", options.config.variant);

    if let Err(e) = generate::run(&options.config) {
        eprintln!("bitmapfont-gen: error: {e:#}");
        std::process::exit(1);
    }
}
