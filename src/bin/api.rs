pub use meeting_brief::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    meeting_brief::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
