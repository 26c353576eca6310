mod app;
mod color;
mod config;
mod data;
mod session;
mod ui;

use std::io;
use std::process::ExitCode;

use app::WindowPresenter;
use config::AppConfig;
use session::{Session, SessionError};
use ui::panels::NativeFileDialog;

fn main() -> ExitCode {
    env_logger::init();

    let config = AppConfig::default();
    let mut presenter = WindowPresenter::new(config.window.clone(), &config.query);

    let result = {
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout(), config.query.clone());
        session.run(&mut NativeFileDialog, &mut presenter)
    };

    match result {
        Ok(outcome) => {
            log::info!(
                "{} records matched, {} groups ranked, chart: {:?}",
                outcome.matched,
                outcome.ranking.len(),
                outcome.rendered
            );
            ExitCode::SUCCESS
        }
        Err(SessionError::NoFileSelected) => {
            println!("No file was selected.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let e = anyhow::Error::from(e);
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
