//! Template Method: `play` fixes the order of steps, implementors fill them in.

use log::info;
#[cfg(test)]
use mockall::automock;

/// Opaque handle to loaded audio data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioStream {
    source: String,
}

impl AudioStream {
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg_attr(test, automock)]
pub trait NativeDecoder {
    fn decode(&self, stream: &AudioStream);
}

pub struct NativeMp3Decoder;
impl NativeDecoder for NativeMp3Decoder {
    fn decode(&self, stream: &AudioStream) {
        info!("NativeMp3Decoder decoding {}", stream.source());
    }
}

pub struct NativeAacDecoder;
impl NativeDecoder for NativeAacDecoder {
    fn decode(&self, stream: &AudioStream) {
        info!("NativeAacDecoder decoding {}", stream.source());
    }
}

pub trait AudioDecoder {
    fn load_stream(&self) -> AudioStream;
    fn decode(&self, stream: &AudioStream);

    fn before_decode(&self) {}
    fn after_decode(&self) {}

    /// Load, then decode between the two hooks. Not meant to be overridden.
    fn play(&self) {
        let stream = self.load_stream();
        self.before_decode();
        self.decode(&stream);
        self.after_decode();
    }
}

pub struct Mp3Decoder<D> {
    decoder: D,
    path: String,
}

impl<D: NativeDecoder> Mp3Decoder<D> {
    pub fn new(decoder: D, path: impl Into<String>) -> Self {
        Self {
            decoder,
            path: path.into(),
        }
    }
}

impl<D: NativeDecoder> AudioDecoder for Mp3Decoder<D> {
    fn load_stream(&self) -> AudioStream {
        AudioStream {
            source: self.path.clone(),
        }
    }

    fn decode(&self, stream: &AudioStream) {
        self.decoder.decode(stream);
    }

    fn before_decode(&self) {
        info!("MP3 starting...");
    }

    fn after_decode(&self) {
        info!("MP3 stopped...");
    }
}

pub struct AacDecoder<D> {
    decoder: D,
    path: String,
}

impl<D: NativeDecoder> AacDecoder<D> {
    pub fn new(decoder: D, path: impl Into<String>) -> Self {
        Self {
            decoder,
            path: path.into(),
        }
    }
}

impl<D: NativeDecoder> AudioDecoder for AacDecoder<D> {
    fn load_stream(&self) -> AudioStream {
        AudioStream {
            source: self.path.clone(),
        }
    }

    fn decode(&self, stream: &AudioStream) {
        self.decoder.decode(stream);
    }

    fn before_decode(&self) {
        info!("AAC starting...");
    }

    fn after_decode(&self) {
        info!("AAC stopped...");
    }
}
