use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use carebridge_server::{create_app, CareBridgeServer, ServerConfig};
use medical_ai_service::{AiConfig, AiError, AiResult, GenerationRequest, GenerativeModel, MedicalAssistant, DISCLAIMER};
use serde_json::{json, Value};
use telephony_service::{
    CallContext, CallPlatform, OmnidimClient, TelephonyConfig, TelephonyError, TelephonyResult,
};
use tower::ServiceExt;

const BOUNDARY: &str = "carebridge-test-boundary";

#[derive(Debug, Clone, PartialEq)]
enum PlatformCall {
    Dispatch {
        agent_id: u64,
        to_number: String,
        context: CallContext,
    },
    GetCall(String),
    ListAgents {
        page: u32,
        page_size: u32,
    },
    CallLogs {
        page: u32,
        page_size: u32,
        agent_id: u64,
    },
    Chat {
        agent_id: u64,
        message: String,
    },
}

struct FakePlatform {
    response: Option<Value>,
    calls: Mutex<Vec<PlatformCall>>,
}

impl FakePlatform {
    fn responding(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Some(response),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: PlatformCall) -> TelephonyResult<Value> {
        self.calls.lock().unwrap().push(call);
        self.response.clone().ok_or_else(|| TelephonyError::Api {
            status: 503,
            message: "Platform unavailable".to_string(),
        })
    }
}

#[async_trait]
impl CallPlatform for FakePlatform {
    async fn dispatch_call(&self, agent_id: u64, to_number: &str, context: &CallContext) -> TelephonyResult<Value> {
        self.record(PlatformCall::Dispatch {
            agent_id,
            to_number: to_number.to_string(),
            context: context.clone(),
        })
    }

    async fn get_call(&self, call_id: &str) -> TelephonyResult<Value> {
        self.record(PlatformCall::GetCall(call_id.to_string()))
    }

    async fn list_agents(&self, page: u32, page_size: u32) -> TelephonyResult<Value> {
        self.record(PlatformCall::ListAgents { page, page_size })
    }

    async fn call_logs(&self, page: u32, page_size: u32, agent_id: u64) -> TelephonyResult<Value> {
        self.record(PlatformCall::CallLogs {
            page,
            page_size,
            agent_id,
        })
    }

    async fn chat(&self, agent_id: u64, message: &str, _context: &CallContext) -> TelephonyResult<Value> {
        self.record(PlatformCall::Chat {
            agent_id,
            message: message.to_string(),
        })
    }
}

struct FakeModel {
    reply: Result<String, String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeModel {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, request: GenerationRequest) -> AiResult<String> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone().map_err(|message| AiError::Provider { status: 500, message })
    }
}

fn app_with(platform: Arc<FakePlatform>, model: Arc<FakeModel>) -> Router {
    let assistant = MedicalAssistant::new(model, &AiConfig::new("test-key")).unwrap();
    let server = CareBridgeServer::new(
        ServerConfig::default(),
        &TelephonyConfig::new("test-key"),
        platform,
        Arc::new(assistant),
    );
    create_app(server)
}

fn calls_app(platform: Arc<FakePlatform>) -> Router {
    app_with(platform, FakeModel::replying(""))
}

fn model_app(model: Arc<FakeModel>) -> Router {
    app_with(FakePlatform::responding(json!({})), model)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn upload_request(uri: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

fn png_fixture() -> Vec<u8> {
    let image = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(40, 20, image::Rgb([120, 120, 120])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();
    bytes
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health_reports_provider() {
    let (status, body) = send(calls_app(FakePlatform::responding(json!({}))), get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["model_provider"], "fake");
}

#[tokio::test]
async fn test_call_without_phone_number_is_rejected_before_dispatch() {
    let platform = FakePlatform::responding(json!({"status": "queued"}));

    for uri in [
        "/call-patient",
        "/call-doctor",
        "/call-symptom-screener",
        "/call-med-reminder",
        "/call-postop-followup",
    ] {
        let (status, body) = send(
            calls_app(platform.clone()),
            json_request(Method::POST, uri, json!({"phoneNumber": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "No phoneNumber provided");
    }

    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_med_reminder_fills_defaults() {
    let platform = FakePlatform::responding(json!({"status": "queued", "call_id": 77}));
    let (status, body) = send(
        calls_app(platform.clone()),
        json_request(Method::POST, "/call-med-reminder", json!({"phoneNumber": "+919876543210"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "queued", "call_id": 77}));

    let expected = CallContext::medication_reminder("Demo Patient", "+919876543210", "Paracetamol", "1 tablet", "20:00");
    assert_eq!(
        platform.calls(),
        vec![PlatformCall::Dispatch {
            agent_id: 3257,
            to_number: "+919876543210".to_string(),
            context: expected,
        }]
    );
}

#[tokio::test]
async fn test_call_doctor_uses_request_agent_and_condition_default() {
    let platform = FakePlatform::responding(json!({"status": "queued"}));
    let (status, _) = send(
        calls_app(platform.clone()),
        json_request(
            Method::POST,
            "/call-doctor",
            json!({"phoneNumber": "+15550001111", "agent_id": 4100, "booking_time": "10:30"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let calls = platform.calls();
    let Some(PlatformCall::Dispatch { agent_id, context, .. }) = calls.first() else {
        panic!("expected a dispatch, got {calls:?}");
    };
    assert_eq!(*agent_id, 4100);
    assert_eq!(context.get("condition"), Some(&json!("serious fever")));
    assert_eq!(context.get("booking_date"), Some(&Value::Null));
    assert_eq!(context.get("booking_time"), Some(&json!("10:30")));
}

#[tokio::test]
async fn test_call_patient_defaults_to_appointments_agent() {
    let platform = FakePlatform::responding(json!({"status": "queued"}));
    send(
        calls_app(platform.clone()),
        json_request(Method::POST, "/call-patient", json!({"phoneNumber": "+15550002222"})),
    )
    .await;

    assert_eq!(
        platform.calls(),
        vec![PlatformCall::Dispatch {
            agent_id: 3261,
            to_number: "+15550002222".to_string(),
            context: CallContext::patient(),
        }]
    );
}

#[tokio::test]
async fn test_empty_chat_message_is_rejected() {
    let platform = FakePlatform::responding(json!({}));
    let (status, body) = send(
        calls_app(platform.clone()),
        json_request(Method::POST, "/chat-healthbot", json!({"message": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No user message provided");
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_chat_unwraps_platform_envelope() {
    let platform = FakePlatform::responding(json!({"status": 200, "json": {"reply": "Drink water"}}));
    let (status, body) = send(
        calls_app(platform.clone()),
        json_request(Method::POST, "/chat-healthbot", json!({"message": "I have a headache"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"reply": "Drink water"}));
    assert_eq!(
        platform.calls(),
        vec![PlatformCall::Chat {
            agent_id: 3259,
            message: "I have a headache".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_call_status_passes_other_shapes_through() {
    let raw = json!({"call_status": "completed"});
    let platform = FakePlatform::responding(raw.clone());
    let (status, body) = send(
        calls_app(platform.clone()),
        json_request(Method::POST, "/get-call-status", json!({"call_id": 991})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, raw);
    assert_eq!(platform.calls(), vec![PlatformCall::GetCall("991".to_string())]);
}

#[tokio::test]
async fn test_call_status_requires_call_id() {
    let platform = FakePlatform::responding(json!({}));
    let (status, body) = send(
        calls_app(platform.clone()),
        json_request(Method::POST, "/get-call-status", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No call_id provided");
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_list_agents_forwards_pagination() {
    let platform = FakePlatform::responding(json!({"status": 200, "json": {"bots": []}}));
    let (status, body) = send(calls_app(platform.clone()), get_request("/list-agents?page=2&page_size=25")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bots": []}));
    assert_eq!(platform.calls(), vec![PlatformCall::ListAgents { page: 2, page_size: 25 }]);
}

#[tokio::test]
async fn test_non_numeric_pagination_is_rejected() {
    let platform = FakePlatform::responding(json!({}));
    let (status, _) = send(calls_app(platform.clone()), get_request("/list-agents?page=two")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_call_logs_use_configured_agent_and_defaults() {
    let platform = FakePlatform::responding(json!({"status": 200, "json": {"call_log_data": []}}));
    let (status, _) = send(calls_app(platform.clone()), get_request("/get-call-logs")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        platform.calls(),
        vec![PlatformCall::CallLogs {
            page: 1,
            page_size: 10,
            agent_id: 3015,
        }]
    );
}

#[tokio::test]
async fn test_platform_failure_is_server_error() {
    let (status, body) = send(
        calls_app(FakePlatform::unavailable()),
        json_request(Method::POST, "/call-patient", json!({"phoneNumber": "+15550003333"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Platform unavailable");
    assert!(body["error_id"].is_string());
}

#[tokio::test]
async fn test_xray_without_file_part() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze-xray")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nleft wrist\r\n--{BOUNDARY}--\r\n"
        )))
        .unwrap();
    let (status, body) = send(model_app(FakeModel::replying("ok")), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_xray_with_json_body_reports_missing_upload() {
    let (status, body) = send(
        model_app(FakeModel::replying("ok")),
        json_request(Method::POST, "/analyze-xray", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_xray_with_empty_file_name() {
    let (status, body) = send(
        model_app(FakeModel::replying("ok")),
        upload_request("/analyze-xray", "", &png_fixture()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No selected file");
}

#[tokio::test]
async fn test_xray_sends_scaled_png_to_vision_model() {
    let model = FakeModel::replying("No acute fracture.");
    let (status, body) = send(
        model_app(model.clone()),
        upload_request("/analyze-xray", "chest.png", &png_fixture()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"gemini": "No acute fracture."}));

    let requests = model.requests();
    assert_eq!(requests.len(), 1);
    let image = requests[0].images.first().unwrap();
    assert_eq!(image.mime_type, "image/png");
    let decoded = image::load_from_memory(&image.data).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (500, 250));
}

#[tokio::test]
async fn test_xray_model_failure_is_reported_in_band() {
    let (status, body) = send(
        model_app(FakeModel::failing("quota exceeded")),
        upload_request("/analyze-xray", "chest.png", &png_fixture()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let text = body["gemini"].as_str().unwrap();
    assert!(text.starts_with("Analysis error: "));
    assert!(text.contains("quota exceeded"));
}

#[tokio::test]
async fn test_xray_rejects_undecodable_upload() {
    let (status, _) = send(
        model_app(FakeModel::replying("ok")),
        upload_request("/analyze-xray", "notes.png", b"not an image"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_prescription_json_is_extracted_from_commentary() {
    let reply = "Here is the transcription:\n{\"patient_name\": \"R. Rao\", \"medications\": []}\nLet me know.";
    let (status, body) = send(
        model_app(FakeModel::replying(reply)),
        upload_request("/transcribe-prescription", "rx.png", &png_fixture()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["transcription"]["patient_name"], "R. Rao");
    assert_eq!(body["transcription"]["disclaimer"], DISCLAIMER);
}

#[tokio::test]
async fn test_prescription_without_json_returns_raw_output() {
    let (status, body) = send(
        model_app(FakeModel::replying("I cannot read this handwriting.")),
        upload_request("/transcribe-prescription", "rx.png", &png_fixture()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to parse JSON from AI response");
    assert_eq!(body["raw"], "I cannot read this handwriting.");
}

#[tokio::test]
async fn test_prescription_model_failure_is_server_error() {
    let (status, body) = send(
        model_app(FakeModel::failing("model overloaded")),
        upload_request("/transcribe-prescription", "rx.png", &png_fixture()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "model overloaded");
}

#[tokio::test]
async fn test_analyze_vitals_is_retired() {
    let app = || model_app(FakeModel::replying("ok"));

    let (status, body) = send(app(), json_request(Method::POST, "/analyze-vitals", json!({"entries": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No vitals provided");

    let (status, _) = send(
        app(),
        json_request(Method::POST, "/analyze-vitals", json!({"entries": [{"spo2": 97}]})),
    )
    .await;
    assert_eq!(status, StatusCode::GONE);
}

#[tokio::test]
async fn test_daily_checkin_requires_entries() {
    let (status, body) = send(
        model_app(FakeModel::replying("ok")),
        json_request(Method::POST, "/patient/daily-checkin", json!({"cookieStorage": []})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_daily_checkin_flags_emergency_near_patient() {
    let model = FakeModel::replying("Oxygen saturation is low today.");
    let (status, body) = send(
        model_app(model.clone()),
        json_request(
            Method::POST,
            "/patient/daily-checkin",
            json!({
                "cookieStorage": [{"date": "2025-05-02", "spo2": 88, "heartRate": 96}],
                "location": {"lat": 17.385, "lon": 78.4867}
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emergency"], true);
    assert_eq!(body["summary"], "Oxygen saturation is low today.");
    assert_eq!(body["raw"]["gemini"], "Oxygen saturation is low today.");
    assert!(!body["locations"].as_array().unwrap().is_empty());
    assert_eq!(model.requests()[0].model, "gemini-2.5-flash");
}

#[tokio::test]
async fn test_daily_checkin_falls_back_to_local_analysis() {
    let (status, body) = send(
        model_app(FakeModel::failing("unavailable")),
        json_request(
            Method::POST,
            "/patient/daily-checkin",
            json!({"cookieStorage": [{"date": "2025-05-02", "temperature": 37.0}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["summary"].is_string());
    assert!(body["todayEntry"].is_object());
    assert!(body.get("emergency").is_none());
}

#[tokio::test]
async fn test_health_plan_wraps_model_text() {
    let model = FakeModel::replying("## Nutrition\nMore lentils.");
    let (status, body) = send(
        model_app(model.clone()),
        json_request(
            Method::POST,
            "/patient/health-plan",
            json!({"name": "Asha", "age": 34, "fitness_goal": "endurance"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "plan": "## Nutrition\nMore lentils."}));
    let requests = model.requests();
    assert!(requests[0].prompt.contains("Asha"));
    assert!(requests[0].search_grounding);
}

#[tokio::test]
async fn test_interpret_notice_warns_on_wrong_script() {
    let (status, body) = send(
        model_app(FakeModel::replying("Take one tablet after food.")),
        json_request(
            Method::POST,
            "/gemini/interpret",
            json!({"text": "Tab. PCM 500mg 1-0-1 PC", "language": "te"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Take one tablet after food.");
    assert!(body["langWarning"].as_str().unwrap().contains("Telugu"));
}

#[tokio::test]
async fn test_interpret_notice_model_failure_uses_fallback_text() {
    let (status, body) = send(
        model_app(FakeModel::failing("bad request")),
        json_request(Method::POST, "/gemini/interpret", json!({"text": "notice", "language": "en"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Error: Could not get a valid response from Gemini API.");
    assert_eq!(body["langWarning"], Value::Null);
}

#[tokio::test]
async fn test_video_without_usable_link_uses_final_fallback() {
    let (status, body) = send(
        model_app(FakeModel::replying("")),
        json_request(Method::POST, "/gemini/video", json!({"text": "how to use an inhaler"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["embedUrl"], "https://www.youtube.com/embed/5qap5aO4i9A");
}

#[tokio::test]
async fn test_video_model_failure_is_server_error() {
    let (status, _) = send(
        model_app(FakeModel::failing("unavailable")),
        json_request(Method::POST, "/gemini/video", json!({"text": "inhaler"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/call-patient")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(calls_app(FakePlatform::responding(json!({}))), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_call_doctor_accepts_string_agent_id() {
    let platform = FakePlatform::responding(json!({"status": "queued"}));
    let (status, _) = send(
        calls_app(platform.clone()),
        json_request(
            Method::POST,
            "/call-doctor",
            json!({"phoneNumber": "+15550001111", "agent_id": "3261"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let calls = platform.calls();
    assert!(matches!(calls.first(), Some(PlatformCall::Dispatch { agent_id: 3261, .. })));
}

#[tokio::test]
async fn test_unreachable_model_does_not_leak_api_key() {
    let mut ai_config = AiConfig::new("SECRET-GEMINI-KEY-123");
    ai_config.api_url = "http://127.0.0.1:1/v1beta".to_string();
    ai_config.timeout_secs = 5;
    let assistant = MedicalAssistant::from_config(&ai_config).unwrap();
    let app = create_app(CareBridgeServer::new(
        ServerConfig::default(),
        &TelephonyConfig::new("test-key"),
        FakePlatform::responding(json!({})),
        Arc::new(assistant),
    ));

    let (status, body) = send(app.clone(), json_request(Method::POST, "/patient/health-plan", json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("SECRET-GEMINI-KEY-123"), "{body}");

    let (status, body) = send(app, upload_request("/analyze-xray", "chest.png", &png_fixture())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["gemini"].as_str().unwrap().starts_with("Analysis error: "));
    assert!(!body.to_string().contains("SECRET-GEMINI-KEY-123"), "{body}");
}

#[tokio::test]
async fn test_call_status_id_cannot_reach_other_platform_endpoints() {
    use httpmock::prelude::{MockServer, GET};

    let platform_server = MockServer::start_async().await;
    let agents = platform_server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/agents");
            then.status(200).json_body(json!({"agents": "listed"}));
        })
        .await;

    let mut telephony_config = TelephonyConfig::new("test-key");
    telephony_config.api_url = platform_server.url("/api/v1");
    let client = OmnidimClient::new(&telephony_config).unwrap();
    let assistant = MedicalAssistant::new(FakeModel::replying(""), &AiConfig::new("test-key")).unwrap();
    let app = create_app(CareBridgeServer::new(
        ServerConfig::default(),
        &telephony_config,
        Arc::new(client),
        Arc::new(assistant),
    ));

    let (status, body) = send(
        app.clone(),
        json_request(Method::POST, "/get-call-status", json!({"call_id": "../../agents"})),
    )
    .await;
    assert_ne!(status, StatusCode::OK);
    assert!(!body.to_string().contains("listed"));

    let (status, _) = send(
        app,
        json_request(Method::POST, "/get-call-status", json!({"call_id": ".."})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(agents.hits_async().await, 0);
}
