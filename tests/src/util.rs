use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reachr_common::network::target::{DnsTarget, HttpTarget, Target, TcpTarget};
use reachr_common::probe::outcome::ProbeOutcome;
use reachr_common::report::{ReportError, ReportResult, Reporter, Section};
use reachr_core::prober::Prober;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/*************************************************************
                     Scripted prober
**************************************************************/

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Tcp(TcpTarget, Duration),
    Http(HttpTarget, Duration),
    Dns(DnsTarget),
}

/// Prober answering from fixed functions and logging every call it receives.
pub struct ScriptedProber {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub tcp: fn(&TcpTarget) -> bool,
    pub http: fn(&HttpTarget) -> ProbeOutcome,
    pub dns: fn(&DnsTarget) -> ProbeOutcome,
}

impl ScriptedProber {
    pub fn new(
        tcp: fn(&TcpTarget) -> bool,
        http: fn(&HttpTarget) -> ProbeOutcome,
        dns: fn(&DnsTarget) -> ProbeOutcome,
    ) -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls: Arc<Mutex<Vec<Call>>> = Arc::new(Mutex::new(Vec::new()));
        let prober = Self {
            calls: calls.clone(),
            tcp,
            http,
            dns,
        };
        (prober, calls)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn tcp(&self, target: &TcpTarget, timeout: Duration) -> bool {
        self.calls.lock().unwrap().push(Call::Tcp(target.clone(), timeout));
        (self.tcp)(target)
    }

    async fn http(&self, target: &HttpTarget, timeout: Duration) -> ProbeOutcome {
        self.calls.lock().unwrap().push(Call::Http(target.clone(), timeout));
        (self.http)(target)
    }

    async fn dns(&self, target: &DnsTarget) -> ProbeOutcome {
        self.calls.lock().unwrap().push(Call::Dns(target.clone()));
        (self.dns)(target)
    }
}

/*************************************************************
                     Recording reporters
**************************************************************/

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Section(Section),
    Started(Target),
    Report(Target, ProbeOutcome),
    Finish,
}

#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn sections(&self) -> Vec<Section> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Section(section) => Some(*section),
                _ => None,
            })
            .collect()
    }

    pub fn reports(&self) -> Vec<(&Target, &ProbeOutcome)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Report(target, outcome) => Some((target, outcome)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn section_start(&mut self, section: Section) -> ReportResult {
        self.events.push(Event::Section(section));
        Ok(())
    }

    fn probe_started(&mut self, target: &Target) -> ReportResult {
        self.events.push(Event::Started(target.clone()));
        Ok(())
    }

    fn report(&mut self, target: &Target, outcome: &ProbeOutcome) -> ReportResult {
        self.events.push(Event::Report(target.clone(), outcome.clone()));
        Ok(())
    }

    fn finish(&mut self) -> ReportResult {
        self.events.push(Event::Finish);
        Ok(())
    }
}

/// Reporter whose sink is gone; every call fails.
#[derive(Default)]
pub struct BrokenReporter {
    pub attempts: usize,
}

impl BrokenReporter {
    fn fail(&mut self) -> ReportResult {
        self.attempts += 1;
        Err(ReportError::Io(std::io::Error::from(
            std::io::ErrorKind::BrokenPipe,
        )))
    }
}

impl Reporter for BrokenReporter {
    fn section_start(&mut self, _section: Section) -> ReportResult {
        self.fail()
    }

    fn report(&mut self, _target: &Target, _outcome: &ProbeOutcome) -> ReportResult {
        self.fail()
    }
}

/*************************************************************
                     Local HTTP fixtures
**************************************************************/

/// Serves canned HTTP/1.1 responses chosen by request path until the test ends.
pub async fn spawn_http_server(respond: fn(&str) -> String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(answer(stream, respond));
        }
    });

    addr
}

async fn answer(mut stream: TcpStream, respond: fn(&str) -> String) {
    let Some(path) = read_request_path(&mut stream).await else {
        return;
    };
    let _ = stream.write_all(respond(&path).as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut request: Vec<u8> = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n: usize = stream.read(&mut buf).await.ok()?;
        if n == 0 {
            return None;
        }
        request.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&request);
    let request_line = head.lines().next()?;
    request_line.split_whitespace().nth(1).map(str::to_string)
}

pub fn response(status: u16, reason: &str, extra_headers: &[(&str, &str)]) -> String {
    let mut head: String = format!("HTTP/1.1 {status} {reason}\r\n");
    for (name, value) in extra_headers {
        head.push_str(&format!("{name}: {value}\r\n"));
    }
    head.push_str("Content-Length: 0\r\nConnection: close\r\n\r\n");
    head
}

/// Accepts connections and reads requests but never answers them.
pub async fn spawn_silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held: Vec<TcpStream> = Vec::new();
        while let Ok((mut stream, _)) = listener.accept().await {
            let _ = read_request_path(&mut stream).await;
            held.push(stream);
        }
    });

    addr
}

/// An address on which nothing is listening.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
