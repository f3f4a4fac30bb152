use anyhow::Result;
use console::style;
use log::debug;
use poster_generator::component::PosterGenerator;
use poster_generator::config::Config;
use poster_generator::init;
use poster_generator::signal::setup_shutdown_signal;
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::new()?;
    let shutdown_signal = setup_shutdown_signal();

    debug!(
        "影片資料夾: {}, 縮圖資料夾: {}",
        config.video_root.display(),
        config.poster_dir.display()
    );

    let generator = PosterGenerator::with_ffmpeg(config, shutdown_signal);
    generator.run()?;

    Ok(())
}
