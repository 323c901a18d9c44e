#![allow(dead_code)]
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, RecordType};
use std::collections::HashMap;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use super::builders::response_bytes;

#[derive(Debug, Clone)]
pub enum ZoneEntry {
    Answers(Vec<RData>),
    Truncated(Vec<RData>),
    Rcode(ResponseCode),
    Silent,
}

type Zone = HashMap<(String, RecordType), ZoneEntry>;

/// Loopback UDP DNS server answering from a fixed zone.
///
/// Names missing from the zone get NXDOMAIN.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<(String, RecordType)>>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MockDnsServer {
    pub fn start(zone: Zone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0")?;
        socket.set_read_timeout(Some(Duration::from_millis(50)))?;
        let addr = socket.local_addr()?;

        let queries = Arc::new(Mutex::new(Vec::new()));
        let shutdown = Arc::new(AtomicBool::new(false));

        let handle = {
            let queries = Arc::clone(&queries);
            let shutdown = Arc::clone(&shutdown);
            std::thread::spawn(move || {
                let mut buf = vec![0u8; 512];
                while !shutdown.load(Ordering::Relaxed) {
                    let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                        continue;
                    };
                    if let Some(response) = Self::answer(&zone, &queries, &buf[..len]) {
                        let _ = socket.send_to(&response, peer);
                    }
                }
            })
        };

        Ok(Self {
            addr,
            queries,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Questions received so far as (lowercase name without trailing dot, type).
    pub fn queries(&self) -> Vec<(String, RecordType)> {
        self.queries.lock().unwrap().clone()
    }

    fn answer(
        zone: &Zone,
        queries: &Mutex<Vec<(String, RecordType)>>,
        request: &[u8],
    ) -> Option<Vec<u8>> {
        let message = Message::from_vec(request).ok()?;
        let query = message.queries().first()?.clone();
        let id = u16::from_be_bytes([request[0], request[1]]);

        let utf8 = query.name().to_utf8().to_lowercase();
        let key = (
            utf8.strip_suffix('.').unwrap_or(&utf8).to_string(),
            query.query_type(),
        );
        queries.lock().unwrap().push(key.clone());

        let response = match zone.get(&key) {
            Some(ZoneEntry::Answers(answers)) => {
                response_bytes(id, &query, ResponseCode::NoError, false, answers.clone())
            }
            Some(ZoneEntry::Truncated(answers)) => {
                response_bytes(id, &query, ResponseCode::NoError, true, answers.clone())
            }
            Some(ZoneEntry::Rcode(rcode)) => {
                response_bytes(id, &query, *rcode, false, Vec::new())
            }
            Some(ZoneEntry::Silent) => return None,
            None => response_bytes(id, &query, ResponseCode::NXDomain, false, Vec::new()),
        };
        Some(response)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
