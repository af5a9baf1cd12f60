#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use med_quiz::MedQuizApp;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MedQuiz")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MedQuiz",
        options,
        Box::new(|_cc| Ok(Box::new(MedQuizApp::new()?))),
    )
}

// En web el punto de entrada es `web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
