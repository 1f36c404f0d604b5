use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sitesmith::{
    config::Config,
    pipeline::Pipeline,
    routes::{router, AppState},
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "<!DOCTYPE html><html><head><title>Fresh</title></head><body>fresh</body></html>";

async fn spawn(config: Config) -> String {
    let pipeline = Pipeline::new(&config).expect("pipeline");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router(AppState::new(pipeline))).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn post_generate(base: &str, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .json(&body)
        .send()
        .await
        .expect("request");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

#[tokio::test]
async fn blank_prompt_is_rejected_without_calling_providers() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
    let base = spawn(Config::default().with_provider("openai", "sk").with_base_url("openai", server.uri())).await;

    for body in [json!({ "prompt": "   " }), json!({}), json!({ "projectName": "Nameless" })] {
        let (status, body) = post_generate(&base, body).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "Prompt is required" }));
    }
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let base = spawn(Config::default()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test]
async fn restaurant_prompt_without_keys_renders_demo_site() {
    let base = spawn(Config::default()).await;
    let (status, body) = post_generate(
        &base,
        json!({ "prompt": "Create a modern restaurant website with dark theme", "projectName": "Bella Vista" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["provider"], "Advanced Demo");
    assert_eq!(body["metadata"]["industry"], "restaurant");
    let code = body["code"].as_str().unwrap();
    assert!(code.starts_with("<!DOCTYPE html>"));
    assert!(code.contains("<h3 class=\"footer-title\">Bella Vista</h3>"));
    assert!(body.get("warning").is_none());
}

#[tokio::test]
async fn wrongly_typed_optional_fields_do_not_reject_the_prompt() {
    let base = spawn(Config::default()).await;
    let prompt = "Create a modern restaurant website";

    for body in [
        json!({ "prompt": prompt, "features": "menu" }),
        json!({ "prompt": prompt, "complexity": 3 }),
        json!({ "prompt": prompt, "mode": "AI" }),
        json!({ "prompt": prompt, "templateId": "tech-blog", "templateType": "saas-landing" }),
    ] {
        let (status, resp) = post_generate(&base, body.clone()).await;
        assert_eq!(status, 200, "{body}");
        assert_eq!(resp["provider"], "Advanced Demo", "{body}");
        assert_eq!(resp["metadata"]["industry"], "restaurant");
    }

    let (status, resp) = post_generate(
        &base,
        json!({ "prompt": prompt, "mode": "template", "templateId": "tech-blog", "templateType": "saas-landing" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(resp["metadata"]["templateUsed"], "tech-blog");
}

#[tokio::test]
async fn first_failing_provider_falls_through_to_the_next() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/groq/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/chat/completions"))
        .and(header("authorization", "Bearer sk-live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": format!("```html\n{PAGE}\n```") } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::default()
        .with_provider("groq", "gsk-live")
        .with_base_url("groq", format!("{}/groq", server.uri()))
        .with_provider("openai", "sk-live")
        .with_base_url("openai", format!("{}/openai", server.uri()));
    let base = spawn(config).await;

    let (status, body) = post_generate(&base, json!({ "prompt": "a landing page for a bakery" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["provider"], "OpenAI");
    assert_eq!(body["code"], PAGE);
    assert_eq!(body["message"], "Generated with OpenAI using advanced prompt engineering");
}

#[tokio::test]
async fn every_provider_failing_still_returns_a_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(500)).mount(&server).await;
    let base = spawn(Config::default().with_provider("gemini", "g").with_base_url("gemini", server.uri())).await;

    let (status, body) = post_generate(&base, json!({ "prompt": "medical clinic for families" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["provider"], "Advanced Demo");
    assert!(!body["code"].as_str().unwrap().is_empty());
    assert!(body["warning"].as_str().unwrap().contains("Gemini"));
    assert_eq!(body["metadata"]["attempts"][0]["provider"], "Gemini");
}

#[tokio::test]
async fn template_endpoints() {
    let base = spawn(Config::default()).await;
    let client = reqwest::Client::new();

    let all: Vec<Value> = client.get(format!("{base}/api/templates")).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.len(), 6);

    let found: Vec<Value> = client
        .get(format!("{base}/api/templates?q=pricing"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], "saas-landing");
    assert_eq!(found[0]["colorScheme"], "cyan");

    let rendered = client
        .post(format!("{base}/api/templates/restaurant-deluxe/render"))
        .json(&json!({ "projectName": "Trattoria" }))
        .send()
        .await
        .unwrap();
    assert_eq!(rendered.status().as_u16(), 200);
    let rendered: Value = rendered.json().await.unwrap();
    assert_eq!(rendered["provider"], "Template System");
    assert_eq!(rendered["metadata"]["templateUsed"], "restaurant-deluxe");
    assert!(rendered["code"].as_str().unwrap().contains("Welcome to Trattoria"));

    let no_body = client.post(format!("{base}/api/templates/tech-blog/render")).send().await.unwrap();
    assert_eq!(no_body.status().as_u16(), 200);

    let missing = client.post(format!("{base}/api/templates/nope/render")).send().await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn demo_sites_are_served_with_cache_headers() {
    let base = spawn(Config::default()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/demo-site/bella-vista")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
    assert_eq!(resp.headers()["cache-control"], "public, max-age=3600");
    assert!(resp.text().await.unwrap().contains("Bella Vista"));

    let resp = client.get(format!("{base}/api/demo-site/unknown")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client.get(format!("{base}/api/demo-site/..%2FCargo")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client.get(format!("{base}/api/demo-site/")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn health_lists_configured_providers_in_order() {
    let config = Config::default().with_provider("openai", "sk").with_provider("together", "t");
    let base = spawn(config).await;
    let body: Value = reqwest::get(format!("{base}/api/health")).await.unwrap().json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok", "providers": ["together", "openai"] }));
}
