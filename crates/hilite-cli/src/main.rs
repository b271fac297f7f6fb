//! Binary entrypoint: highlight `input.cpp` into `output.html` and echo it.
use hilite_core::RunConfig;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    hilite_cli::logging::init();

    // Fixed file names can be overridden with HILITE_INPUT / HILITE_OUTPUT
    let config = RunConfig::from_env();

    match hilite_cli::run(&config) {
        Ok(report) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout
                .write_all(report.echoed.as_bytes())
                .and_then(|_| stdout.flush())
            {
                tracing::warn!("stdout closed early: {}", e);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(?err, "file job failed");
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
