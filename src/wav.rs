//! WAV container encoding.
//!
//! Packs rendered PCM samples into a RIFF/WAVE byte buffer: a 44-byte header
//! (RIFF tag and length, `fmt ` sub-chunk, `data` sub-chunk header) followed
//! by the little-endian sample bytes. The output contains no timestamps or
//! variable metadata, so a fixed input always produces byte-identical output.

/// WAV format parameters.
///
/// The synthesis pipeline always produces mono 16-bit output, but channel
/// count and bit depth are part of the container format and are carried
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format at the given sample rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}

/// Encodes PCM samples into a complete WAV byte buffer.
///
/// # Examples
///
/// ```
/// use tonegen::wav::{WavFormat, encode};
///
/// let bytes = encode(&[0i16; 100], &WavFormat::mono(44100));
/// assert_eq!(bytes.len(), 44 + 200);
/// assert_eq!(&bytes[0..4], b"RIFF");
/// assert_eq!(&bytes[8..12], b"WAVE");
/// ```
pub fn encode(samples: &[i16], format: &WavFormat) -> Vec<u8> {
    let data_len = (samples.len() * usize::from(format.bytes_per_sample())) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt sub-chunk: 16 bytes of linear-PCM description.
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // format code 1 = PCM
    out.extend_from_slice(&format.channels.to_le_bytes());
    out.extend_from_slice(&format.sample_rate.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&format.block_align().to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    // data sub-chunk.
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    fn field_u16(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes(bytes[at..at + 2].try_into().unwrap())
    }

    #[test]
    fn test_header_layout_for_100_samples() {
        let bytes = encode(&[1i16; 100], &WavFormat::mono(44100));
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(field_u32(&bytes, 4), 236, "total length minus 8");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(field_u32(&bytes, 16), 16);
        assert_eq!(field_u16(&bytes, 20), 1, "linear PCM");
        assert_eq!(field_u16(&bytes, 22), 1, "channels");
        assert_eq!(field_u32(&bytes, 24), 44100);
        assert_eq!(field_u32(&bytes, 28), 88200, "byte rate");
        assert_eq!(field_u16(&bytes, 32), 2, "block align");
        assert_eq!(field_u16(&bytes, 34), 16, "bits per sample");
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(field_u32(&bytes, 40), 200, "data length");
        assert_eq!(bytes.len(), 244);
    }

    #[test]
    fn test_samples_are_little_endian() {
        let bytes = encode(&[0x1234, -2], &WavFormat::mono(8000));
        assert_eq!(&bytes[44..], [0x34, 0x12, 0xFE, 0xFF]);
    }

    #[test]
    fn test_encoding_is_reproducible() {
        let samples: Vec<i16> = (0..500).map(|i| (i * 37) as i16).collect();
        let format = WavFormat::mono(22050);
        assert_eq!(encode(&samples, &format), encode(&samples, &format));
    }

    #[test]
    fn test_empty_buffer_is_header_only() {
        let bytes = encode(&[], &WavFormat::mono(44100));
        assert_eq!(bytes.len(), 44);
        assert_eq!(field_u32(&bytes, 4), 36);
        assert_eq!(field_u32(&bytes, 40), 0);
    }

    #[test]
    fn test_derived_rates() {
        let format = WavFormat::mono(4000);
        assert_eq!(format.block_align(), 2);
        assert_eq!(format.byte_rate(), 8000);
    }
}
