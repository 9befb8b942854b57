use actix_web::{web, App, HttpServer, HttpResponse};
use actix_cors::Cors;
use jsonorbit_core::{parse_json, visualize, LayoutConfig};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::{ApiError, Result};
use crate::transport::{decode_json_from_url, encode_json_for_url, validate_json_size, MAX_ENCODED_SIZE};

/// Per-request overrides of the server's layout defaults
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutQuery {
    horizontal_spacing: Option<f64>,
    vertical_spacing: Option<f64>,
    radius_multiplier: Option<f64>,
}

impl LayoutQuery {
    fn apply(&self, defaults: &LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            horizontal_spacing: self.horizontal_spacing.unwrap_or(defaults.horizontal_spacing),
            vertical_spacing: self.vertical_spacing.unwrap_or(defaults.vertical_spacing),
            radius_multiplier: self.radius_multiplier.unwrap_or(defaults.radius_multiplier),
        }
    }
}

#[derive(Deserialize)]
struct DataQuery {
    data: String,
}

#[derive(Serialize)]
struct EncodeResponse {
    data: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(config: LayoutConfig, port: u16) -> std::io::Result<()> {
        info!(
            horizontal_spacing = config.horizontal_spacing,
            vertical_spacing = config.vertical_spacing,
            radius_multiplier = config.radius_multiplier,
            "layout defaults"
        );

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(config))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register routes, body limits and extractor error handling; the app must
/// provide `Data<LayoutConfig>`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_ENCODED_SIZE))
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| ApiError::Query(err.to_string()).into()),
        )
        .route("/health", web::get().to(health))
        .route("/visualize", web::get().to(visualize_encoded))
        .route("/visualize", web::post().to(visualize_body))
        .route("/encode", web::post().to(encode));
}

fn render(json: &str, config: &LayoutConfig) -> Result<HttpResponse> {
    let payload = visualize(json, config)?;
    Ok(HttpResponse::Ok().json(payload))
}

async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

async fn visualize_body(
    defaults: web::Data<LayoutConfig>,
    layout: web::Query<LayoutQuery>,
    body: String,
) -> Result<HttpResponse> {
    let config = layout.apply(&defaults);
    render(&body, &config)
}

async fn visualize_encoded(
    defaults: web::Data<LayoutConfig>,
    layout: web::Query<LayoutQuery>,
    query: web::Query<DataQuery>,
) -> Result<HttpResponse> {
    let json = decode_json_from_url(&query.data).ok_or(ApiError::Decode)?;
    validate_json_size(&json)?;

    let config = layout.apply(&defaults);
    render(&json, &config)
}

async fn encode(body: String) -> Result<HttpResponse> {
    parse_json(&body)?;
    validate_json_size(&body)?;

    Ok(HttpResponse::Ok().json(EncodeResponse {
        data: encode_json_for_url(&body),
    }))
}
