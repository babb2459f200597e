//! 集成测试辅助工具
//!
//! 每个测试启动一个独立的应用实例，绑定随机端口，
//! 通过真实的HTTP客户端驱动完整的请求管线。

use doorman_web::{AppState, WebConfig};
use serde_json::json;
use std::sync::LazyLock;
use tokio::net::TcpListener;
use uuid::Uuid;

// tracing 全局订阅器只能安装一次
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

/// 测试应用实例
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// 对应用发起GET请求
    async fn get(&self, path_and_query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path_and_query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// 访问门户页面，userId 为可选的查询参数
    pub async fn get_portal(&self, area: &str, user_id: Option<&str>) -> reqwest::Response {
        match user_id {
            Some(id) => self.get(&format!("/portal/{}?userId={}", area, id)).await,
            None => self.get(&format!("/portal/{}", area)).await,
        }
    }

    /// 会员注册
    pub async fn post_member<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/api/members", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// 查询会员信息
    pub async fn get_member(&self, member_id: &str) -> reqwest::Response {
        self.get(&format!("/api/members/{}", member_id)).await
    }

    /// 健康检查
    pub async fn get_health(&self) -> reqwest::Response {
        self.get("/api/health").await
    }

    /// 获取OpenAPI文档
    pub async fn get_openapi(&self) -> reqwest::Response {
        self.get("/api-docs/openapi.json").await
    }
}

/// 启动测试应用
///
/// 监听器在任务启动前已经绑定完成，客户端可以立即连接。
pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind a random port");
    let port = listener.local_addr().unwrap().port();

    let config = WebConfig {
        port,
        dev_mode: true,
        ..WebConfig::default()
    };
    let app = doorman_web::create_app(AppState::new(config));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        port,
        api_client,
    }
}

/// 测试会员数据，名字随机以避免重名冲突
pub struct TestMember {
    pub name: String,
    pub info: Option<String>,
}

impl TestMember {
    pub fn generate() -> Self {
        let suffix = &Uuid::new_v4().to_string()[..8];
        Self {
            name: format!("member_{}", suffix),
            info: Some(format!("integration test member {}", suffix)),
        }
    }

    pub fn to_sign_up_json(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "info": self.info
        })
    }
}
