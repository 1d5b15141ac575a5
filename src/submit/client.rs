use crate::form::FormValues;
use serde::Deserialize;

/// Where registrations go. Tests point the client at a local listener.
pub const REGISTRATION_ENDPOINT: &str = "https://webapis.bloomtechdev.com/registration";

const ACCEPTED_FALLBACK: &str = "registration accepted";

#[derive(Debug, Clone, Deserialize)]
struct ServerReply {
    message: String,
}

/// What came back from the registration endpoint. `Rejected` covers both
/// an error status with a message body and a transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    Rejected { message: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message } | Self::Rejected { message } => message.as_str(),
        }
    }
}

pub struct RegistrationClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl RegistrationClient {
    pub fn new() -> Self {
        Self::with_endpoint(REGISTRATION_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload and interpret the response body's `message` field.
    /// Blocking; runs on an executor thread, never on the event loop.
    pub fn register(&self, payload: &FormValues) -> SubmitOutcome {
        match self.agent.post(&self.endpoint).send_json(payload) {
            Ok(response) => match response.into_json::<ServerReply>() {
                Ok(reply) => SubmitOutcome::Accepted {
                    message: reply.message,
                },
                Err(_) => SubmitOutcome::Accepted {
                    message: ACCEPTED_FALLBACK.to_string(),
                },
            },
            Err(ureq::Error::Status(code, response)) => {
                // The message lives in the error response's body.
                let message = response
                    .into_json::<ServerReply>()
                    .map(|reply| reply.message)
                    .unwrap_or_else(|_| format!("registration failed (status {code})"));
                SubmitOutcome::Rejected { message }
            }
            Err(err) => SubmitOutcome::Rejected {
                message: err.to_string(),
            },
        }
    }
}

impl Default for RegistrationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistrationClient, SubmitOutcome};
    use crate::form::FormValues;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned response on a loopback port, capturing the
    /// request body for assertions.
    fn one_shot_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (format!("http://{addr}"), handle)
    }

    fn read_request(stream: &mut std::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            raw.extend_from_slice(&buf[..n]);
            if n == 0 || request_is_complete(&raw) {
                break;
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    fn request_is_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        body.len() >= content_length
    }

    fn payload() -> FormValues {
        FormValues {
            username: "bob".into(),
            fav_language: "rust".into(),
            fav_food: "pizza".into(),
            agreement: true,
        }
    }

    #[test]
    fn success_reads_message_from_body() {
        let (url, server) = one_shot_server("HTTP/1.1 200 OK", r#"{"message":"success!"}"#);
        let client = RegistrationClient::with_endpoint(url);

        let outcome = client.register(&payload());
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                message: "success!".into()
            }
        );

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /"));
        let body = request.split_once("\r\n\r\n").unwrap().1;
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["username"], "bob");
        assert_eq!(json["favLanguage"], "rust");
        assert_eq!(json["favFood"], "pizza");
        assert_eq!(json["agreement"], true);
    }

    #[test]
    fn error_status_reads_message_from_error_body() {
        let (url, server) = one_shot_server(
            "HTTP/1.1 422 Unprocessable Entity",
            r#"{"message":"username taken"}"#,
        );
        let client = RegistrationClient::with_endpoint(url);

        let outcome = client.register(&payload());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "username taken".into()
            }
        );
        server.join().unwrap();
    }

    #[test]
    fn error_body_without_message_falls_back_to_status_text() {
        let (url, server) = one_shot_server("HTTP/1.1 500 Internal Server Error", "oops");
        let client = RegistrationClient::with_endpoint(url);

        let outcome = client.register(&payload());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "registration failed (status 500)".into()
            }
        );
        server.join().unwrap();
    }

    #[test]
    fn transport_failure_is_rejected_with_a_message() {
        // Nothing is listening here.
        let client = RegistrationClient::with_endpoint("http://127.0.0.1:1/registration");

        let outcome = client.register(&payload());
        let SubmitOutcome::Rejected { message } = outcome else {
            panic!("expected rejection");
        };
        assert!(!message.is_empty());
    }
}
