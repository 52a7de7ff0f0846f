use std::process::ExitCode;

use takeout_fix::TakeoutFixError;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = takeout_fix::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            takeout_fix::output::print_error(&format!("{e:#}"));
            let code = e
                .downcast_ref::<TakeoutFixError>()
                .map(|tf| tf.code())
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
