// One-time server bootstrap shared by the integration tests in a binary.
use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, OnceLock},
    time::Duration,
};

use guestbook_server::{AppState, JsonFileGuestStore};

// The store does not lock its file, so tests that write take turns.
static SERIAL: Mutex<()> = Mutex::new(());

// Base URL and guests file of the shared server, set once it is accepting.
static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    pub data_path: PathBuf,
}

// Hold the returned guard for the whole test body.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// Ensure the test server is running and return its address and data file.
pub fn ensure_server() -> &'static TestServer {
    SERVER.get_or_init(|| {
        // Unique file per test binary so parallel binaries never share state.
        let data_path =
            std::env::temp_dir().join(format!("guestbook-{}.json", uuid::Uuid::new_v4()));
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        let store = JsonFileGuestStore::new(data_path.clone());

        // An OS thread keeps the server alive across `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Ephemeral port avoids collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                guestbook_server::serve(listener, AppState { store })
                    .await
                    .expect("server failed");
            });
        });

        let base_url = wait_for_server_url_and_readiness(published_url);
        TestServer {
            base_url,
            data_path,
        }
    })
}

// Wait for URL publication and then for the socket to accept TCP connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) -> String {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return base_url;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
