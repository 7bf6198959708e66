use crate::config::Config;
use crate::payload::{Participant, Payload};
use crate::sources::{ParticipantSource, QuestionSource, ResponseSource, SourceError};
use async_trait::async_trait;
use enrich::catalog::Question;
use enrich::pipeline::Richness;
use enrich::resolver::EnrichedAnswer;
use enrich::response::RawResponse;
use http::StatusCode;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn test_config(target_url: Url) -> Config {
    Config {
        target_url,
        survey_filter: "10, 20,30".parse().unwrap(),
        auth_token: Some("secret".to_string()),
        debug: false,
        richness: Richness::Labeled,
        language: None,
    }
}

pub fn test_payload() -> Payload {
    Payload {
        api_token: Some("secret".into()),
        survey: 42,
        event: "afterSurveyComplete".into(),
        respond_id: 7,
        submit_date: "2024-03-01 10:00:00".into(),
        token: Some("abc123".into()),
        participant: None,
        response: None,
        answers: Some(vec![EnrichedAnswer {
            question: "Would you recommend us?".into(),
            answer: "Yes".into(),
        }]),
        questions: None,
        choices: None,
    }
}

/// Collaborators that serve fixed snapshots.
pub struct StaticSources {
    pub response: RawResponse,
    pub participant: Option<Participant>,
    pub questions: Vec<Question>,
}

#[async_trait]
impl ResponseSource for StaticSources {
    async fn response(&self, _survey_id: i64, _response_id: i64) -> Result<RawResponse, SourceError> {
        Ok(self.response.clone())
    }
}

#[async_trait]
impl ParticipantSource for StaticSources {
    async fn participant(
        &self,
        _survey_id: i64,
        _token: &str,
    ) -> Result<Option<Participant>, SourceError> {
        Ok(self.participant.clone())
    }
}

#[async_trait]
impl QuestionSource for StaticSources {
    async fn questions(
        &self,
        _survey_id: i64,
        _language: Option<&str>,
    ) -> Result<Vec<Question>, SourceError> {
        Ok(self.questions.clone())
    }
}

/// Collaborators whose storage is unreachable.
pub struct FailingSources;

#[async_trait]
impl ResponseSource for FailingSources {
    async fn response(&self, _survey_id: i64, _response_id: i64) -> Result<RawResponse, SourceError> {
        Err(SourceError::Response("storage offline".to_string()))
    }
}

#[async_trait]
impl ParticipantSource for FailingSources {
    async fn participant(
        &self,
        _survey_id: i64,
        _token: &str,
    ) -> Result<Option<Participant>, SourceError> {
        Err(SourceError::Participant("storage offline".to_string()))
    }
}

#[async_trait]
impl QuestionSource for FailingSources {
    async fn questions(
        &self,
        _survey_id: i64,
        _language: Option<&str>,
    ) -> Result<Vec<Question>, SourceError> {
        Err(SourceError::Questions("storage offline".to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    /// Request line and headers, lowercased.
    pub headers: String,
    pub body: String,
}

/// Minimal HTTP/1.1 endpoint that answers every request with one canned
/// response and records what it was sent.
pub struct CannedEndpoint {
    pub url: Url,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CannedEndpoint {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = requests.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let Ok(request) = read_request(&mut stream).await else {
                    continue;
                };
                captured.lock().unwrap().push(request);
                let response = format!(
                    "HTTP/1.1 {} {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or(""),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            url: Url::parse(&format!("http://{addr}/")).unwrap(),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request(stream: &mut TcpStream) -> io::Result<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed mid-request",
            ));
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:")?.trim().parse().ok())
        .unwrap_or(0usize);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = buf.len().min(body_start + content_length);
    Ok(CapturedRequest {
        headers,
        body: String::from_utf8_lossy(&buf[body_start..body_end]).to_string(),
    })
}
