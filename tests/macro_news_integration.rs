use std::sync::Arc;
use std::time::Duration;

use mockito::Server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::timeout;

use macro_news::service::news::{NewsService, NewsServiceError};
use macro_news::view::{MacroNewsView, NewsState, Theme};

const ONE_ITEM: &str = r#"{"macro_news":[{"source":"Reuters","time_published":"2024-01-01T00:00:00Z","title":"Fed holds rates","url":"https://x.test/a","summary":"A"}]}"#;

/// Mount a view against `server` and wait for it to settle.
async fn mount_against(server: &Server) -> Result<MacroNewsView, Box<dyn std::error::Error>> {
    let service = Arc::new(NewsService::new(&server.url(), None)?);
    let mut view = MacroNewsView::mount_service(service, Theme::default());
    view.settled().await;
    Ok(view)
}

#[tokio::test]
async fn renders_one_card_per_item() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/macro-news")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ONE_ITEM)
        .expect(1)
        .create_async()
        .await;

    let view = mount_against(&server).await?;
    let html = view.render()?;

    assert_eq!(html.matches("class=\"mn-news-item\"").count(), 1);
    assert!(html.contains("By Reuters | 2024-01-01T00:00:00Z"));
    assert!(html.contains("<a href=\"https://x.test/a\" target=\"_blank\" rel=\"noopener noreferrer\">Fed holds rates</a>"));

    // rendering again does not trigger another request
    assert_eq!(view.render()?, html);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn empty_list_renders_empty_notice() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/macro-news")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"macro_news":[]}"#)
        .create_async()
        .await;

    let view = mount_against(&server).await?;
    assert_eq!(view.state(), NewsState::Loaded(Vec::new()));

    let html = view.render()?;
    assert!(html.contains("No macro-economic news available at the moment."));
    assert!(!html.contains("mn-news-item"));
    Ok(())
}

#[tokio::test]
async fn missing_list_field_is_treated_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/macro-news")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let view = mount_against(&server).await?;
    assert!(view
        .render()?
        .contains("No macro-economic news available at the moment."));
    Ok(())
}

#[tokio::test]
async fn server_error_renders_fixed_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/macro-news")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let view = mount_against(&server).await?;
    let html = view.render()?;

    assert_eq!(html.trim(), "<p>Error: Failed to fetch macro news</p>");
    assert!(!html.contains("500"));
    assert!(!html.contains("upstream exploded"));
    Ok(())
}

#[tokio::test]
async fn malformed_body_renders_error_notice() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/macro-news")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create_async()
        .await;

    let service = NewsService::new(&server.url(), None)?;
    let err = service.get_macro_news().await.unwrap_err();
    assert!(matches!(err, NewsServiceError::Parse(_)));

    let view = mount_against(&server).await?;
    let html = view.render()?;
    assert!(html.starts_with("<p>Error: "));
    assert!(!html.contains("mn-news-container"));
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_reports_transport_error() -> Result<(), Box<dyn std::error::Error>> {
    // Port 1 is never listening in the test environment.
    let service = Arc::new(NewsService::new("http://127.0.0.1:1", None)?);
    let mut view = MacroNewsView::mount_service(service, Theme::default());

    match view.settled().await {
        NewsState::Failed(message) => assert!(!message.is_empty()),
        other => panic!("expected failure, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn error_status_settles_without_waiting_for_body() -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    // Status line and headers promise 1000 bytes, then only 7 arrive.
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await?;
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 1000\r\n\r\npartial")
            .await?;
        socket.flush().await?;
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok::<_, std::io::Error>(())
    });

    let service = Arc::new(NewsService::new(&format!("http://{addr}"), None)?);
    let mut view = MacroNewsView::mount_service(service, Theme::default());

    let state = timeout(Duration::from_secs(5), view.settled())
        .await
        .expect("view stayed in Loading after the error status arrived");
    assert_eq!(
        state,
        NewsState::Failed("Failed to fetch macro news".to_string())
    );
    assert_eq!(
        view.render()?.trim(),
        "<p>Error: Failed to fetch macro news</p>"
    );

    server.abort();
    Ok(())
}
