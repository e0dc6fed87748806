//! Decoder driven by the test instead of a camera

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use checkin_console::services::{CameraConstraints, DecodeEvent, QrDecoder, ScanConfig};
use checkin_console::utils::errors::{DecoderError, DecoderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCall {
    Start,
    Pause,
    Resume,
    Stop,
}

type SenderSlot = Arc<Mutex<Option<mpsc::Sender<DecodeEvent>>>>;
type FailureSlot = Arc<Mutex<Option<String>>>;

/// Decoder whose events are pushed through a [`DecoderHandle`]
pub struct ScriptedDecoder {
    calls: Arc<Mutex<Vec<DecoderCall>>>,
    sender: SenderSlot,
    failure: FailureSlot,
    fail_start: bool,
}

/// Test-side handle of a [`ScriptedDecoder`]
#[derive(Clone)]
pub struct DecoderHandle {
    calls: Arc<Mutex<Vec<DecoderCall>>>,
    sender: SenderSlot,
    failure: FailureSlot,
}

impl ScriptedDecoder {
    pub fn new() -> (Self, DecoderHandle) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sender: SenderSlot = Arc::new(Mutex::new(None));
        let failure: FailureSlot = Arc::new(Mutex::new(None));
        let decoder = Self {
            calls: Arc::clone(&calls),
            sender: Arc::clone(&sender),
            failure: Arc::clone(&failure),
            fail_start: false,
        };
        (decoder, DecoderHandle { calls, sender, failure })
    }

    /// Decoder whose start fails as if the camera were unavailable
    pub fn failing() -> (Self, DecoderHandle) {
        let (mut decoder, handle) = Self::new();
        decoder.fail_start = true;
        (decoder, handle)
    }

    fn record(&self, call: DecoderCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DecoderHandle {
    pub fn calls(&self) -> Vec<DecoderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Queue a decoded payload; returns false when the decoder is not started
    pub async fn decode(&self, text: &str) -> bool {
        let sender = self.sender.lock().unwrap().clone();
        match sender {
            Some(sender) => sender.send(DecodeEvent::Decoded(text.to_string())).await.is_ok(),
            None => false,
        }
    }

    pub async fn miss(&self) -> bool {
        let sender = self.sender.lock().unwrap().clone();
        match sender {
            Some(sender) => sender
                .send(DecodeEvent::Miss("No QR code found".to_string()))
                .await
                .is_ok(),
            None => false,
        }
    }

    /// End the decode stream
    pub fn close(&self) {
        self.sender.lock().unwrap().take();
    }

    /// End the decode stream with an input error, reported on stop
    pub fn fail(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self.close();
    }
}

#[async_trait]
impl QrDecoder for ScriptedDecoder {
    async fn start(
        &mut self,
        _camera: CameraConstraints,
        _config: ScanConfig,
    ) -> DecoderResult<mpsc::Receiver<DecodeEvent>> {
        self.record(DecoderCall::Start);
        if self.fail_start {
            return Err(DecoderError::CameraUnavailable("Permission denied".to_string()));
        }
        let (tx, rx) = mpsc::channel(16);
        *self.sender.lock().unwrap() = Some(tx);
        Ok(rx)
    }

    async fn pause(&mut self) -> DecoderResult<()> {
        self.record(DecoderCall::Pause);
        Ok(())
    }

    async fn resume(&mut self) -> DecoderResult<()> {
        self.record(DecoderCall::Resume);
        Ok(())
    }

    async fn stop(&mut self) -> DecoderResult<()> {
        self.record(DecoderCall::Stop);
        self.sender.lock().unwrap().take();
        match self.failure.lock().unwrap().take() {
            Some(message) => Err(DecoderError::Input(message)),
            None => Ok(()),
        }
    }
}
