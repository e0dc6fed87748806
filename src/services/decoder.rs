//! QR decoding capability
//!
//! The scanner only needs start/pause/resume/stop and a stream of decode
//! events; how frames become text is up to the implementation. The crate
//! ships [`KeyboardWedgeDecoder`], which reads decoded payloads line by
//! line, the way handheld USB and Bluetooth scanners present codes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::config::ScannerConfig;
use crate::utils::errors::{DecoderError, DecoderResult};

/// Buffered decode events between the decoder and the scanner loop
const EVENT_BUFFER: usize = 32;

/// One decode attempt reported by the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    /// A code was found; carries the raw decoded text
    Decoded(String),
    /// No code found in the frame
    Miss(String),
}

/// Camera selection passed to [`QrDecoder::start`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConstraints {
    pub facing_mode: String,
}

/// Decode loop tuning passed to [`QrDecoder::start`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub fps: u32,
    pub qrbox_width: u32,
    pub qrbox_height: u32,
}

impl From<&ScannerConfig> for CameraConstraints {
    fn from(config: &ScannerConfig) -> Self {
        Self {
            facing_mode: config.facing_mode.clone(),
        }
    }
}

impl From<&ScannerConfig> for ScanConfig {
    fn from(config: &ScannerConfig) -> Self {
        Self {
            fps: config.fps,
            qrbox_width: config.qrbox_size,
            qrbox_height: config.qrbox_size,
        }
    }
}

/// Decoding capability driven by the scanner
#[async_trait]
pub trait QrDecoder: Send {
    /// Start decoding; events arrive on the returned channel until stopped
    async fn start(
        &mut self,
        camera: CameraConstraints,
        config: ScanConfig,
    ) -> DecoderResult<mpsc::Receiver<DecodeEvent>>;

    /// Stop emitting decode events without releasing the device
    async fn pause(&mut self) -> DecoderResult<()>;

    /// Resume emitting decode events after [`QrDecoder::pause`]
    async fn resume(&mut self) -> DecoderResult<()>;

    /// Stop decoding and release the device
    async fn stop(&mut self) -> DecoderResult<()>;
}

/// Decoder fed by a line-oriented reader
///
/// Each non-blank line is one decoded payload. Blank lines and lines that
/// are not UTF-8 are decode misses. Lines read while paused are dropped.
pub struct KeyboardWedgeDecoder<R> {
    reader: Arc<Mutex<BufReader<R>>>,
    paused: Arc<AtomicBool>,
    task: Option<JoinHandle<DecoderResult<()>>>,
}

impl<R> KeyboardWedgeDecoder<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(Mutex::new(BufReader::new(reader))),
            paused: Arc::new(AtomicBool::new(false)),
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }
}

impl KeyboardWedgeDecoder<tokio::io::Stdin> {
    /// Decoder reading from the process's standard input
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

async fn read_lines<R>(
    reader: Arc<Mutex<BufReader<R>>>,
    paused: Arc<AtomicBool>,
    events: mpsc::Sender<DecodeEvent>,
) -> DecoderResult<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut reader = reader.lock().await;
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => {
                debug!("Decoder input closed");
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Decoder input failed");
                return Err(DecoderError::Input(e.to_string()));
            }
        }

        if paused.load(Ordering::SeqCst) {
            trace!("Dropping input read while paused");
            continue;
        }

        let event = match std::str::from_utf8(&line) {
            Ok(text) => {
                let payload = text.trim_end_matches(['\r', '\n']);
                if payload.trim().is_empty() {
                    DecodeEvent::Miss("No code found in input".to_string())
                } else {
                    DecodeEvent::Decoded(payload.to_string())
                }
            }
            Err(e) => {
                debug!(error = %e, bytes = line.len(), "Input line is not UTF-8");
                DecodeEvent::Miss("Unreadable code in input".to_string())
            }
        };

        if events.send(event).await.is_err() {
            return Ok(());
        }
    }
}

#[async_trait]
impl<R> QrDecoder for KeyboardWedgeDecoder<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    async fn start(
        &mut self,
        camera: CameraConstraints,
        config: ScanConfig,
    ) -> DecoderResult<mpsc::Receiver<DecodeEvent>> {
        if self.is_running() {
            return Err(DecoderError::AlreadyRunning);
        }

        debug!(
            facing_mode = %camera.facing_mode,
            fps = config.fps,
            qrbox_width = config.qrbox_width,
            qrbox_height = config.qrbox_height,
            "Starting keyboard wedge decoder"
        );

        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        self.paused.store(false, Ordering::SeqCst);
        self.task = Some(tokio::spawn(read_lines(
            Arc::clone(&self.reader),
            Arc::clone(&self.paused),
            tx,
        )));

        Ok(rx)
    }

    async fn pause(&mut self) -> DecoderResult<()> {
        if self.task.is_none() {
            return Err(DecoderError::NotRunning);
        }
        self.paused.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn resume(&mut self) -> DecoderResult<()> {
        if self.task.is_none() {
            return Err(DecoderError::NotRunning);
        }
        self.paused.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Stop reading; reports the input error that ended the stream, if any
    async fn stop(&mut self) -> DecoderResult<()> {
        let task = self.task.take().ok_or(DecoderError::NotRunning)?;
        task.abort();
        // wait for the reader lock to be released so a restart can reuse it
        let outcome = task.await;
        self.paused.store(false, Ordering::SeqCst);
        match outcome {
            Ok(Err(e)) => Err(e),
            _ => Ok(()),
        }
    }
}
