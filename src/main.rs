#[tokio::main]
async fn main() {
    guestbook_server::run().await;
}
