fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    fractal_explorer::run_gui(fractal_explorer::ExplorerConfig::default())
}
