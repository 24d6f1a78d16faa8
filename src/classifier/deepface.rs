use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{codecs::jpeg::JpegEncoder, RgbImage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{AnalyzeAction, AnalyzeRequest, ClassifyError, EmotionClassifier, FaceAnalysis};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

const JPEG_QUALITY: u8 = 85;

/// Client for a DeepFace REST service (`deepface api`), `POST /analyze`.
pub struct DeepFaceClient {
    agent: ureq::Agent,
    endpoint: String,
}

#[derive(Serialize)]
struct AnalyzePayload<'a> {
    img: String,
    actions: &'a [AnalyzeAction],
    enforce_detection: bool,
}

// Service versions differ on whether faces are wrapped in `results`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalyzeResponse {
    Wrapped { results: Vec<FaceAnalysis> },
    Bare(Vec<FaceAnalysis>),
    Failed { error: String },
}

impl DeepFaceClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmotionClassifier for DeepFaceClient {
    fn analyze(
        &mut self,
        frame: &RgbImage,
        request: &AnalyzeRequest,
    ) -> Result<Vec<FaceAnalysis>, ClassifyError> {
        let payload = AnalyzePayload {
            img: encode_frame(frame)?,
            actions: &request.actions,
            enforce_detection: request.enforce_detection,
        };

        let response = match self.agent.post(&self.endpoint).send_json(&payload) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(ClassifyError::Status { status, body });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ClassifyError::Transport(transport.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|err| ClassifyError::Transport(err.to_string()))?;
        let faces = parse_response(&body)?;
        log_debug!("classifier returned {} face(s)", faces.len());
        Ok(faces)
    }
}

/// JPEG-encode a frame as a base64 data URI.
pub fn encode_frame(frame: &RgbImage) -> Result<String, ClassifyError> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(frame)?;
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)))
}

pub fn parse_response(body: &str) -> Result<Vec<FaceAnalysis>, ClassifyError> {
    let parsed: AnalyzeResponse =
        serde_json::from_str(body).map_err(|err| ClassifyError::Malformed(err.to_string()))?;
    match parsed {
        AnalyzeResponse::Wrapped { results } | AnalyzeResponse::Bare(results) => Ok(results),
        AnalyzeResponse::Failed { error } => Err(ClassifyError::Model(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers one request with a canned HTTP response and returns the
    /// request body it received.
    fn one_shot_server(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/analyze", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut body = vec![0; content_length];
            reader.read_exact(&mut body).unwrap();
            reader.get_mut().write_all(response.as_bytes()).unwrap();
            String::from_utf8(body).unwrap()
        });
        (endpoint, handle)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn frame() -> RgbImage {
        RgbImage::from_pixel(8, 8, image::Rgb([90, 90, 90]))
    }

    #[test]
    fn closed_port_is_a_transport_error() {
        let mut client = DeepFaceClient::new("http://127.0.0.1:1/analyze", Duration::from_secs(2));
        let err = client
            .analyze(&frame(), &AnalyzeRequest::emotion_only())
            .unwrap_err();
        assert!(matches!(err, ClassifyError::Transport(_)), "{err:?}");
    }

    #[test]
    fn error_status_keeps_code_and_body() {
        let (endpoint, server) = one_shot_server(http_response(
            "400 Bad Request",
            r#"{"error": "Face could not be detected"}"#,
        ));
        let mut client = DeepFaceClient::new(endpoint, Duration::from_secs(5));
        let err = client
            .analyze(&frame(), &AnalyzeRequest::emotion_only())
            .unwrap_err();
        server.join().unwrap();
        match err {
            ClassifyError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Face could not be detected"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn successful_call_returns_faces_and_sends_lenient_request() {
        let (endpoint, server) = one_shot_server(http_response(
            "200 OK",
            r#"{"results": [{"emotion": {"happy": 82.0, "fear": 20.0}}]}"#,
        ));
        let mut client = DeepFaceClient::new(endpoint, Duration::from_secs(5));
        let faces = client
            .analyze(&frame(), &AnalyzeRequest::emotion_only())
            .unwrap();
        assert_eq!(faces[0].emotion["happy"], 82.0);

        let sent: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
        assert_eq!(sent["actions"], serde_json::json!(["emotion"]));
        assert_eq!(sent["enforce_detection"], serde_json::json!(false));
        assert!(sent["img"].as_str().unwrap().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn parses_wrapped_results() {
        let body = r#"{"results": [
            {"emotion": {"angry": 1.5, "happy": 90.0, "fear": 2.0},
             "dominant_emotion": "happy",
             "region": {"x": 10, "y": 20, "w": 100, "h": 120}},
            {"emotion": {"sad": 70.0}}
        ]}"#;
        let faces = parse_response(body).unwrap();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].emotion["happy"], 90.0);
        assert_eq!(faces[0].dominant_emotion.as_deref(), Some("happy"));
        assert_eq!(faces[1].emotion["sad"], 70.0);
    }

    #[test]
    fn parses_bare_list() {
        let faces = parse_response(r#"[{"emotion": {"neutral": 55.0}}]"#).unwrap();
        assert_eq!(faces[0].emotion["neutral"], 55.0);
    }

    #[test]
    fn service_error_becomes_model_error() {
        let err = parse_response(r#"{"error": "Face could not be detected"}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::Model(msg) if msg.contains("Face")));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_response("<html>").unwrap_err();
        assert!(matches!(err, ClassifyError::Malformed(_)));
    }

    #[test]
    fn encodes_frame_as_jpeg_data_uri() {
        let frame = RgbImage::from_pixel(16, 16, image::Rgb([200, 10, 10]));
        let uri = encode_frame(&frame).unwrap();
        let encoded = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = STANDARD.decode(encoded).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn payload_shape_matches_service() {
        let request = AnalyzeRequest::emotion_only();
        let payload = AnalyzePayload {
            img: "data:image/jpeg;base64,AA==".into(),
            actions: &request.actions,
            enforce_detection: request.enforce_detection,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["actions"], serde_json::json!(["emotion"]));
        assert_eq!(json["enforce_detection"], serde_json::json!(false));
    }
}
