#[tokio::main]
async fn main() {
    mentorship_backend::run().await;
}
