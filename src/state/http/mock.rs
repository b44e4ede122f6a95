//! A throwaway HTTP server for tests. Answers every request with the
//! same status and body and records what it was sent.

use std::convert::Infallible;
use std::net::SocketAddr;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc::{channel, Receiver, Sender};
use tokio::task::{self, JoinHandle};

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct MockServer {
    pub url: String,
    receiver: Receiver<RecordedRequest>,
    runtime: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let (sender, receiver) = channel::<RecordedRequest>(16);

        let service = make_service_fn(move |_| {
            let sender = sender.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    request_handler(req, sender.clone(), status, body)
                }))
            }
        });

        let address: SocketAddr = ([127, 0, 0, 1], 0).into();

        let server = Server::bind(&address).serve(service);
        let url = format!("http://{}", server.local_addr());

        let runtime = task::spawn(async move {
            if let Err(error) = server.await {
                eprintln!("Server error: {error}");
            }
        });

        Self {
            url,
            receiver,
            runtime,
        }
    }

    pub async fn next_request(&mut self) -> RecordedRequest {
        self.receiver
            .recv()
            .await
            .expect("mock server stopped before a request arrived")
    }

    /// Requests already received, without waiting for more.
    pub fn drain(&mut self) -> Vec<RecordedRequest> {
        let mut requests = vec![];

        while let Ok(request) = self.receiver.try_recv() {
            requests.push(request);
        }

        requests
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.runtime.abort();
    }
}

/// A URL nothing is listening on.
pub fn refused_url() -> String {
    let port = portpicker::pick_unused_port().expect("no free port");

    format!("http://127.0.0.1:{port}")
}

/// Accepts one connection and writes `response` to it verbatim, so
/// tests can send truncated or malformed answers.
pub async fn raw_response(response: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind raw listener");
    let url = format!("http://{}", listener.local_addr().expect("no local address"));

    task::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buffer = [0; 4096];
            stream.read(&mut buffer).await.ok();
            stream.write_all(&response).await.ok();
            stream.shutdown().await.ok();
        }
    });

    url
}

async fn request_handler(
    req: Request<Body>,
    sender: Sender<RecordedRequest>,
    status: u16,
    body: &'static str,
) -> Result<Response<Body>, Infallible> {
    let (parts, incoming) = req.into_parts();
    let received = hyper::body::to_bytes(incoming).await.unwrap_or_default();

    let headers = parts
        .headers
        .iter()
        .map(|(key, value)| {
            (
                key.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    sender
        .send(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            headers,
            body: received.to_vec(),
        })
        .await
        .ok();

    Ok(Response::builder()
        .status(status)
        .body(body.into())
        .unwrap())
}
