use reqwest::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use tally_pricing::money::round_half_up;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = tally_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn decimal_field(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => n.to_string().parse().unwrap(),
        serde_json::Value::String(s) => s.parse().unwrap(),
        other => panic!("expected a decimal, got {other}"),
    }
}

async fn fetch_price(
    client: &reqwest::Client,
    base_url: &str,
    article_id: &str,
    customer_id: Option<&str>,
) -> Decimal {
    let url = match customer_id {
        Some(customer_id) => {
            format!("{base_url}/articles/{article_id}/price?customerId={customer_id}")
        }
        None => format!("{base_url}/articles/{article_id}/price"),
    };

    let res = client.get(url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    body.trim().parse().expect("price body should be a bare decimal")
}

#[tokio::test]
async fn health_endpoint_is_live() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn article_price_is_stable_across_calls() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = fetch_price(&client, &srv.base_url, "article-5", None).await;
    let second = fetch_price(&client, &srv.base_url, "article-5", None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn discounted_price_relates_to_the_full_price() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let full = fetch_price(&client, &srv.base_url, "article-1", None).await;
    let discounted = fetch_price(&client, &srv.base_url, "article-1", Some("customer-1")).await;

    assert_eq!(discounted, round_half_up(full * dec!(0.90)));
}

#[tokio::test]
async fn unknown_customer_pays_the_full_price() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let full = fetch_price(&client, &srv.base_url, "article-2", None).await;
    let quoted = fetch_price(&client, &srv.base_url, "article-2", Some("customer-42")).await;

    assert_eq!(quoted, full);
}

#[tokio::test]
async fn priced_basket_totals_are_consistent_with_quoted_prices() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Quote the articles first; the priced basket must agree.
    let price_a = fetch_price(&client, &srv.base_url, "article-a", None).await;
    let price_b = fetch_price(&client, &srv.base_url, "article-b", None).await;

    let res = client
        .post(format!("{}/baskets", srv.base_url))
        .json(&json!({
            "customerId": null,
            "entries": [
                { "articleId": "article-a", "quantity": 2 },
                { "articleId": "article-b", "quantity": 3 },
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["customerId"].is_null());

    let entries = &body["pricedBasketEntries"];
    assert_eq!(decimal_field(&entries["article-a"]), dec!(2) * price_a);
    assert_eq!(decimal_field(&entries["article-b"]), dec!(3) * price_b);
    assert_eq!(
        decimal_field(&body["totalAmount"]),
        dec!(2) * price_a + dec!(3) * price_b
    );
}

#[tokio::test]
async fn quantity_of_ten_is_accepted() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(format!("{}/baskets", srv.base_url))
        .json(&json!({
            "customerId": "customer-1",
            "entries": [{ "articleId": "article-1", "quantity": 10 }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(format!("{}/baskets", srv.base_url))
        .json(&json!({
            "customerId": "customer-1",
            "entries": [{ "articleId": "article-1", "quantity": 0 }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Quantity should be greater than zero");
    assert_eq!(body["code"], "100");
}

#[tokio::test]
async fn excessive_quantity_is_rejected_with_the_literal_value() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(format!("{}/baskets", srv.base_url))
        .json(&json!({
            "customerId": "customer-1",
            "entries": [{ "articleId": "article-1", "quantity": 11 }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Quantity 11 exceeds the available amount");
    assert_eq!(body["code"], "100");
}

#[tokio::test]
async fn missing_entries_are_rejected() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(format!("{}/baskets", srv.base_url))
        .json(&json!({ "customerId": "customer-1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Basket should not be empty.");
    assert_eq!(body["code"], "100");
}

#[tokio::test]
async fn entry_without_an_article_id_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(format!("{}/baskets", srv.base_url))
        .json(&json!({
            "customerId": "customer-1",
            "entries": [{ "quantity": 2 }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid article");
    assert_eq!(body["code"], "100");
}
