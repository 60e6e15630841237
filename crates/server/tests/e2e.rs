use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::build_app(true);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_menu_crud_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let menu = format!("{}/api/menu", app.base_url);

    // Create
    let res = c.post(&menu)
        .json(&json!({
            "name": "Grilled Salmon",
            "description": "Fresh salmon grilled to perfection with lemon butter",
            "price": 15.99,
            "category": "entree",
            "ingredients": ["salmon", "lemon", "butter"],
            "available": true
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["id"], 7);

    // Replace
    let res = c.put(format!("{}/7", menu))
        .json(&json!({
            "name": "Salmon Bowl",
            "description": "Salmon over rice with pickled ginger",
            "price": 16.5,
            "category": "entree",
            "ingredients": ["salmon", "rice", "ginger"],
            "available": false
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let replaced = res.json::<serde_json::Value>().await?;
    assert_eq!(replaced["id"], 7);
    assert_eq!(replaced["available"], false);

    // List ends with the replaced item
    let list = c.get(&menu).send().await?.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 7);
    assert_eq!(list[6], replaced);

    // Delete, then 404
    let res = c.delete(format!("{}/7", menu)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/7", menu)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_payload_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().post(format!("{}/api/menu", app.base_url))
        .json(&json!({
            "name": "Soup",
            "description": "Tomato soup with basil",
            "price": 0,
            "category": "entree",
            "ingredients": ["tomato"]
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["errors"][0]["path"], "price");
    assert_eq!(body["errors"][0]["msg"], "Price must be greater than 0");
    Ok(())
}
