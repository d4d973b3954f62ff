use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    folio_lib::run().await
}
