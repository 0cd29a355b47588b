use fractal_explorer::{PpmFilePresenter, StillConfig, StillController};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = StillConfig::default();
    let output_path = config.output_path.clone();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    info!("writing still render to {}", output_path.display());

    let mut controller = StillController::new(PpmFilePresenter::new(), config);
    controller.generate()?;
    controller.write(&output_path)?;

    Ok(())
}
