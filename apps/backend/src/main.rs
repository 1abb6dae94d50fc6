#[tokio::main]
async fn main() -> anyhow::Result<()> {
    answer_check_backend::run().await
}
