use std::collections::BTreeMap;

use axum::Json;

use diag_core::api_types::ServiceInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn service_info() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("diagnose".to_string(), "/api/diagnose (POST)".to_string()),
        ("health".to_string(), "/api/health (GET)".to_string()),
    ]);

    Json(ServiceInfo {
        name: "工业设备故障诊断系统".to_string(),
        version: VERSION.to_string(),
        endpoints,
        usage: r#"POST /api/diagnose with {"text": "故障描述"}"#.to_string(),
    })
}
