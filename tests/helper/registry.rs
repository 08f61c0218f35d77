//! Registry test utilities

use mockito::{Mock, ServerGuard};

/// Build an npm package document publishing the given versions
///
/// The body is written out by hand so the `versions` keys keep the order
/// they were given in.
pub fn versions_body(package: &str, versions: &[&str]) -> String {
    let entries: Vec<String> = versions
        .iter()
        .map(|v| format!(r#""{v}": {{ "version": "{v}" }}"#))
        .collect();

    format!(
        r#"{{ "name": "{}", "versions": {{ {} }} }}"#,
        package,
        entries.join(", ")
    )
}

/// Start a mock npm registry serving one package
pub async fn npm_server(package: &str, versions: &[&str]) -> (ServerGuard, Mock) {
    npm_server_with_body(package, versions_body(package, versions)).await
}

/// Start a mock npm registry serving a raw document for one package
pub async fn npm_server_with_body(package: &str, body: String) -> (ServerGuard, Mock) {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", format!("/{}", package).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    (server, mock)
}
