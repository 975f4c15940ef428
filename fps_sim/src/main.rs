use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match fps_sim::run_with_config().await {
        Ok(summary) => {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::warn!(error = %e, "failed to serialize run summary"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            ExitCode::FAILURE
        }
    }
}
