use std::sync::Mutex;

use crate::error::AppResult;
use crate::ports::outgoing::imaging::ImagingPort;
use domain::{
    encoding::EncodeParams,
    error::DomainError,
    filters::FilterStep,
    frame::{RGB_CHANNELS, RgbFrame},
    resolution::Resolution,
};

/// Imaging fake that produces blank frames and records every call in order.
pub struct RecordingImaging {
    source: Option<Resolution>,
    calls: Mutex<Vec<String>>,
}

impl RecordingImaging {
    pub fn with_source(width: u32, height: u32) -> Self {
        Self {
            source: Some(Resolution::new(width, height)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn undecodable() -> Self {
        Self {
            source: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn source(&self) -> AppResult<Resolution> {
        self.source
            .ok_or_else(|| DomainError::DecodeError("not an image".to_string()).into())
    }
}

fn blank(resolution: Resolution) -> AppResult<RgbFrame> {
    let len = resolution.width as usize * resolution.height as usize * RGB_CHANNELS;
    Ok(RgbFrame::new(resolution.width, resolution.height, vec![0; len])?)
}

impl ImagingPort for RecordingImaging {
    fn decode(&self, _image: &[u8]) -> AppResult<RgbFrame> {
        self.record("decode".to_string());
        blank(self.source()?)
    }

    fn probe(&self, _image: &[u8]) -> AppResult<Resolution> {
        self.record("probe".to_string());
        self.source()
    }

    fn resize(&self, _frame: RgbFrame, target: Resolution) -> AppResult<RgbFrame> {
        self.record(format!("resize {target}"));
        blank(target)
    }

    fn apply_filter(&self, frame: RgbFrame, step: &FilterStep) -> AppResult<RgbFrame> {
        self.record(format!("filter {}", step.name()));
        Ok(frame)
    }

    fn encode(&self, frame: &RgbFrame, params: &EncodeParams) -> AppResult<Vec<u8>> {
        self.record(format!("encode {} {}", params.format(), frame.resolution()));
        Ok(vec![0xAB; 8])
    }
}
