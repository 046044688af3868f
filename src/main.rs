use std::process::ExitCode;

fn main() -> ExitCode {
    match cosmic_curves::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cosmic: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
