//! HTTPS endpoint with a freshly generated self-signed certificate
//!
//! Answers every request on every path with the same 200 JSON body. The
//! certificate is not trusted by any root store, so only clients that skip
//! verification get a response.

use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ServerConfig, ServerConnection, StreamOwned};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

pub struct TlsGraylog {
    addr: SocketAddr,
}

impl TlsGraylog {
    /// Starts serving `body` on a background thread
    pub fn start(body: impl Into<String>) -> Self {
        let config = Arc::new(self_signed_config());
        let response = http_response(&body.into());

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind TLS listener");
        let addr = listener.local_addr().expect("Failed to read listener address");

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let Ok(conn) = ServerConnection::new(Arc::clone(&config)) else {
                    continue;
                };
                // A rejected handshake surfaces here as an error; keep serving
                let _ = answer(&mut StreamOwned::new(conn, stream), &response);
            }
        });

        Self { addr }
    }

    /// Base URL, e.g. `https://127.0.0.1:40123`
    pub fn url(&self) -> String {
        format!("https://{}", self.addr)
    }
}

fn self_signed_config() -> ServerConfig {
    let key_pair = rcgen::KeyPair::generate().expect("Failed to generate key pair");
    let params = rcgen::CertificateParams::new(vec!["localhost".to_string()])
        .expect("Failed to build certificate params");
    let cert = params
        .self_signed(&key_pair)
        .expect("Failed to self-sign certificate");

    let cert_der = CertificateDer::from(cert.der().to_vec());
    let key_der =
        PrivateKeyDer::try_from(key_pair.serialize_der()).expect("Failed to encode private key");

    ServerConfig::builder_with_provider(rustls::crypto::ring::default_provider().into())
        .with_safe_default_protocol_versions()
        .expect("Failed to select TLS versions")
        .with_no_client_auth()
        .with_single_cert(vec![cert_der], key_der)
        .expect("Failed to build TLS server config")
}

fn http_response(body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 200 OK\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    )
    .into_bytes()
}

/// Reads one request head and writes the canned response
fn answer(tls: &mut StreamOwned<ServerConnection, TcpStream>, response: &[u8]) -> io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];

    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = tls.read(&mut buf)?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }

    tls.write_all(response)?;
    tls.conn.send_close_notify();
    tls.flush()
}
