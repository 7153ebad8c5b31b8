use actix_web::{get, post, web, App, HttpResponse, HttpServer};
use reviewer_client::search::{SearchHistory, PENDING_NOTICE};
use reviewer_client::{ClientError, Config, HttpApi, PageController, ReviewApi, SystemBrowser};
use std::sync::Mutex;

// A throwaway review service, bound to an ephemeral port.

type History = web::Data<Mutex<Vec<SearchHistory>>>;

const TICKERS: &str = r#"[
    {"Symbol": "AAPL", "Name": "Apple Inc.", "Market": "NASDAQ",
     "Sector": "Technology", "Industry": "Consumer Electronics"},
    {"Symbol": "MSFT", "Name": "Microsoft Corporation", "Market": "NASDAQ",
     "Sector": "Technology", "Industry": "Software"}
]"#;

#[get("/api/get_tickers")]
async fn serve_tickers() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(TICKERS)
}

#[get("/api/get_images")]
async fn serve_images() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"["comparison_AAPL_VOO.png", "comparison_QQQ_VOO.png"]"#)
}

#[post("/save_search_history")]
async fn save_search_history(history: History, record: web::Json<SearchHistory>) -> HttpResponse {
    history.lock().unwrap().push(record.into_inner());
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"{"success": true}"#)
}

fn serve(history: History) -> std::io::Result<String> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(history.clone())
            .service(serve_tickers)
            .service(serve_images)
            .service(save_search_history)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok(format!("http://{addr}"))
}

fn serve_errors() -> std::io::Result<String> {
    let server = HttpServer::new(|| {
        App::new().default_service(web::to(|| async {
            HttpResponse::InternalServerError().finish()
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok(format!("http://{addr}"))
}

fn api(base_url: &str) -> HttpApi {
    HttpApi::new(Config::default().with_base_url(base_url)).unwrap()
}

#[actix_web::test]
async fn reads_tickers_and_images() {
    let base = serve(History::new(Mutex::new(Vec::new()))).unwrap();
    let api = api(&base);

    let tickers = api.get_tickers().await.unwrap();
    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers[1].symbol, "MSFT");
    assert_eq!(tickers[1].industry, "Software");

    let images = api.get_images().await.unwrap();
    assert_eq!(images, ["comparison_AAPL_VOO.png", "comparison_QQQ_VOO.png"]);
}

#[actix_web::test]
async fn posts_search_history_as_json() {
    let history = History::new(Mutex::new(Vec::new()));
    let base = serve(history.clone()).unwrap();

    let record = SearchHistory {
        stock_name: "ZZZZ".into(),
    };
    let receipt = api(&base).save_search_history(&record).await.unwrap();

    assert!(receipt.success);
    assert_eq!(*history.lock().unwrap(), [record]);
}

#[actix_web::test]
async fn error_status_is_reported() {
    let base = serve_errors().unwrap();
    let err = api(&base).get_images().await.unwrap_err();
    match err {
        ClientError::Status { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/api/get_images"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[actix_web::test]
async fn page_flow_against_live_server() {
    let history = History::new(Mutex::new(Vec::new()));
    let base = serve(history.clone()).unwrap();
    let config = Config::default().with_base_url(&base);
    let api = HttpApi::new(config.clone()).unwrap();
    let browser = SystemBrowser::new(config);

    let mut page = PageController::new();
    let effects = page.init();
    page.run(&api, &browser, effects).await;
    assert_eq!(page.reviews().len(), 2);

    // typed in lower case, found in the second entry
    let effects = page.set_field("qqq");
    page.run(&api, &browser, effects).await;
    let effects = page.enter();
    page.run(&api, &browser, effects).await;
    assert_eq!(page.scrolled_to(), Some(1));
    assert!(history.lock().unwrap().is_empty());

    // picked from the suggestions, but never reviewed
    let effects = page.set_field("micro");
    page.run(&api, &browser, effects).await;
    assert_eq!(page.autocomplete().suggestions().len(), 1);
    let effects = page.select_suggestion(0);
    page.run(&api, &browser, effects).await;

    assert_eq!(page.field(), "MSFT");
    assert_eq!(page.notice(), Some(PENDING_NOTICE));
    assert_eq!(
        *history.lock().unwrap(),
        [SearchHistory {
            stock_name: "MSFT".into()
        }]
    );
}

#[actix_web::test]
async fn unreachable_server_degrades() {
    // nothing listens on the discard port
    let config = Config::default().with_base_url("http://127.0.0.1:9");
    let api = HttpApi::new(config.clone()).unwrap();
    let browser = SystemBrowser::new(config);

    assert!(matches!(
        api.get_tickers().await.unwrap_err(),
        ClientError::Http(_)
    ));

    let mut page = PageController::new();
    let mut effects = page.init();
    effects.extend(page.set_field("aapl"));
    page.run(&api, &browser, effects).await;

    assert!(page.is_loaded());
    assert!(page.reviews().is_empty());
    assert!(page.autocomplete().suggestions().is_empty());
}
