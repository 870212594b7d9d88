use guess_the_flag::FlagQuizApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = FlagQuizApp::try_new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Guess The Flag")
            .with_inner_size([420.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Guess The Flag",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}
