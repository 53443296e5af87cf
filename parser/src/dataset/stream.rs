//! Push-based, chunk-fed interpretation of a data set as a stream of tokens.
//!
//! Unlike [`DataSetReader`], which expects a `Read` source that can always
//! supply the bytes it asks for, [`DataSetStreamReader`] is fed chunks of
//! bytes as they arrive (e.g. from a socket) and emits [`DataToken`]s as soon
//! as they are fully buffered. It never emits a token before all of its bytes
//! are present, and if a chunk boundary falls inside a header or a value it
//! simply waits for the next [`process_chunk`](DataSetStreamReader::process_chunk)
//! call.
use std::cell::RefCell;
use std::io::{self, Read};
use std::rc::Rc;

use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;
use dicom_encoding::text::SpecificCharacterSet;
use dicom_encoding::{Decode, TransferSyntaxIndex};
use snafu::Snafu;

use super::read::{is_recoverable, DataSetReader};
use super::DataToken;
use crate::stateful::decode::DynStatefulDecoder;

/// Minimum number of bytes that must be buffered before Part-10 detection
/// (128-byte preamble + the 4-byte `DICM` magic code) can be attempted.
const PART10_PREAMBLE_LEN: usize = 132;

/// Wire size of the File Meta Information Group Length element
/// (tag + `UL` + 16-bit length + 4-byte value), always encoded in
/// explicit VR little endian.
const GROUP_LENGTH_ELEM_SIZE: usize = 12;

/// Defensive cap on the number of elements read out of the file meta group.
const MAX_META_ELEMENTS: usize = 20;

/// A prefix is compacted away once it exceeds this size...
const COMPACT_THRESHOLD: usize = 64 * 1024;

/// ... and makes up at least this fraction of the buffer.
const COMPACT_MIN_FRACTION: f64 = 0.5;

/// Buffer capacity growth factor used when a pushed chunk doesn't fit.
const GROWTH_FACTOR: f64 = 1.5;

/// UID of Implicit VR Little Endian, assumed for any byte stream that does
/// not begin with the Part-10 preamble and magic code.
const IMPLICIT_VR_LITTLE_ENDIAN_UID: &str = "1.2.840.10008.1.2";

/// Default value of [`StreamOptions::max_buffered_size`].
pub const DEFAULT_MAX_BUFFERED_SIZE: usize = 10 * 1024 * 1024;

/// Default value of [`StreamOptions::max_tokens_per_call`].
pub const DEFAULT_MAX_TOKENS_PER_CALL: usize = 1000;

/// The state of a [`DataSetStreamReader`], following the lifecycle of a
/// single byte stream from the first chunk to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// No chunk has been accepted yet.
    Unstarted,
    /// Buffering bytes to determine the container format (Part-10 or raw)
    /// and, for Part-10, to resolve the transfer syntax from the file meta
    /// group.
    Detecting,
    /// The transfer syntax is known and elements are being emitted as they
    /// become fully available.
    Parsing,
    /// `finalize` has been called; a last pass is being made over whatever
    /// remains buffered.
    Draining,
    /// The stream is fully consumed (or ended in error). Terminal: a new
    /// [`DataSetStreamReader`] must be constructed to parse another stream.
    Done,
}

/// Tunables for a [`DataSetStreamReader`].
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions {
    /// Maximum number of not-yet-consumed bytes the driver will hold in
    /// memory. Exceeding it is a terminal [`StreamError::LimitExceeded`].
    pub max_buffered_size: usize,
    /// Maximum number of tokens emitted per `process_chunk`/`finalize` call,
    /// bounding the CPU time of a single call.
    pub max_tokens_per_call: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            max_buffered_size: DEFAULT_MAX_BUFFERED_SIZE,
            max_tokens_per_call: DEFAULT_MAX_TOKENS_PER_CALL,
        }
    }
}

/// A non-terminal condition reported while streaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamWarning {
    /// `finalize` was called with bytes still buffered that could not be
    /// turned into a complete token; they are dropped.
    IncompleteTrailingData,
}

/// A terminal failure of a [`DataSetStreamReader`]. Once returned, the
/// driver moves to [`StreamState::Done`] and will not make further progress.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum StreamError {
    /// The byte stream is not a recognizable DICOM container: either the
    /// Part-10 file meta group is malformed, or the resolved transfer syntax
    /// could not decode an element header.
    #[snafu(display("input is not a recognizable DICOM byte stream"))]
    MalformedHeader,

    /// The transfer syntax named in the file meta group (or assumed for a
    /// raw, non-Part-10 stream) is not known to the registry this reader
    /// was given.
    #[snafu(display("transfer syntax {} is not supported", uid))]
    UnsupportedTransferSyntax { uid: String },

    /// More unconsumed bytes are buffered than [`StreamOptions::max_buffered_size`]
    /// allows.
    #[snafu(display(
        "buffered {} bytes, exceeding the {} byte limit",
        buffered,
        limit
    ))]
    LimitExceeded { buffered: usize, limit: usize },
}

pub type StreamResult<T, E = StreamError> = std::result::Result<T, E>;

/// The shared, growable input buffer of a [`DataSetStreamReader`].
///
/// Held behind an `Rc<RefCell<_>>` so that it can be read from both the
/// driver's own format-detection logic and the [`DataSetReader`] it
/// constructs once the transfer syntax is known, without either of them
/// borrowing from the other.
#[derive(Debug, Default)]
struct BufferState {
    data: Vec<u8>,
    /// Absolute stream offset of `data[0]`.
    base: u64,
    /// Absolute stream offset of the read cursor. Bytes before this have
    /// already been handed out to a reader and may be compacted away.
    pos: u64,
    /// Set by `finalize`: no more bytes will ever be pushed.
    eof: bool,
}

impl BufferState {
    fn local_pos(&self) -> usize {
        (self.pos - self.base) as usize
    }

    fn unread(&self) -> usize {
        self.data.len() - self.local_pos()
    }

    fn push(&mut self, chunk: &[u8]) {
        let needed = self.data.len() + chunk.len();
        if self.data.capacity() < needed {
            let grown = ((self.data.capacity() as f64 * GROWTH_FACTOR) as usize).max(needed);
            self.data.reserve(grown - self.data.len());
        }
        self.data.extend_from_slice(chunk);
    }

    fn compact(&mut self) {
        let consumed = self.local_pos();
        if consumed > COMPACT_THRESHOLD
            && consumed as f64 >= self.data.len() as f64 * COMPACT_MIN_FRACTION
        {
            self.data.drain(0..consumed);
            self.base += consumed as u64;
        }
    }
}

/// A cloneable handle to a [`BufferState`], implementing [`Read`] so that it
/// can be handed to a [`DataSetReader`].
///
/// Unlike a plain byte slice, a read from this type is all-or-nothing: if
/// fewer bytes are currently buffered than requested, it fails with
/// [`io::ErrorKind::WouldBlock`] instead of performing a short read, and
/// consumes nothing. This lets a decode attempt that spans a chunk boundary
/// be retried from scratch, byte for byte, once more data arrives, rather
/// than silently reading a corrupt prefix of a value. Once `finalize` has
/// set `eof`, a genuinely short stream falls back to a normal short read so
/// that callers relying on [`io::ErrorKind::UnexpectedEof`] still see it.
#[derive(Debug, Clone)]
struct BufferReader(Rc<RefCell<BufferState>>);

impl Read for BufferReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }
        let mut st = self.0.borrow_mut();
        let local = st.local_pos();
        let avail = st.data.len() - local;
        if avail < out.len() {
            if !st.eof {
                return Err(io::Error::from(io::ErrorKind::WouldBlock));
            }
            out[..avail].copy_from_slice(&st.data[local..local + avail]);
            st.pos += avail as u64;
            return Ok(avail);
        }
        out.copy_from_slice(&st.data[local..local + out.len()]);
        st.pos += out.len() as u64;
        Ok(out.len())
    }
}

/// Progress already made while resolving the container format, persisted
/// across `process_chunk` calls so that a chunk boundary falling inside the
/// preamble or the file meta group does not lose work already committed.
#[derive(Debug, Default)]
struct DetectState {
    /// `None` until enough bytes have arrived to tell Part-10 from raw.
    part10: Option<bool>,
    /// The File Meta Information Group Length, once read.
    group_length: Option<u32>,
}

enum DetectOutcome {
    NeedMore,
    RawDataset,
    Resolved(String),
}

/// A push-based reader of a DICOM data set, fed chunks of bytes incrementally
/// rather than pulling from a blocking [`Read`] source.
///
/// `R` is a transfer syntax lookup (typically `&TransferSyntaxRegistry` from
/// the `dicom-transfer-syntax-registry` crate), used to resolve the transfer
/// syntax UID found in the Part-10 file meta group (or assumed for a raw,
/// non-Part-10 stream) into a usable [`TransferSyntax`](dicom_encoding::TransferSyntax).
#[derive(Debug)]
pub struct DataSetStreamReader<R> {
    ts_index: R,
    options: StreamOptions,
    state: StreamState,
    buffer: Rc<RefCell<BufferState>>,
    detect: DetectState,
    main: Option<DataSetReader<DynStatefulDecoder<'static>, StandardDataDictionary>>,
}

impl<R> DataSetStreamReader<R>
where
    R: TransferSyntaxIndex,
{
    /// Create a new streaming reader with the default [`StreamOptions`].
    pub fn new(ts_index: R) -> Self {
        Self::with_options(ts_index, StreamOptions::default())
    }

    /// Create a new streaming reader with custom buffering limits.
    pub fn with_options(ts_index: R, options: StreamOptions) -> Self {
        DataSetStreamReader {
            ts_index,
            options,
            state: StreamState::Unstarted,
            buffer: Rc::new(RefCell::new(BufferState::default())),
            detect: DetectState::default(),
            main: None,
        }
    }

    /// The driver's current state.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Feed a chunk of bytes, emitting every token that becomes fully
    /// available as a result through `on_token`, and any non-terminal
    /// condition through `on_warning`.
    ///
    /// Does no work and returns `Ok(())` if the stream has already reached
    /// [`StreamState::Done`].
    pub fn process_chunk(
        &mut self,
        chunk: &[u8],
        mut on_token: impl FnMut(DataToken),
        mut on_warning: impl FnMut(StreamWarning),
    ) -> StreamResult<()> {
        if self.state == StreamState::Done {
            return Ok(());
        }
        if self.state == StreamState::Unstarted {
            self.state = StreamState::Detecting;
        }
        {
            let mut st = self.buffer.borrow_mut();
            st.push(chunk);
            let unread = st.unread();
            if unread > self.options.max_buffered_size {
                drop(st);
                self.state = StreamState::Done;
                return LimitExceededSnafu {
                    buffered: unread,
                    limit: self.options.max_buffered_size,
                }
                .fail();
            }
        }
        let result = self.drive(false, &mut on_token, &mut on_warning);
        if result.is_err() {
            self.state = StreamState::Done;
        }
        self.buffer.borrow_mut().compact();
        result
    }

    /// Signal that no more bytes will ever arrive and make one last pass
    /// over whatever remains buffered.
    ///
    /// Per §4.8, a non-sequence, non-pixel-data element that is still
    /// incomplete at this point is reported once through `on_warning` as
    /// [`StreamWarning::IncompleteTrailingData`] and dropped, rather than
    /// emitted with a truncated value: the truncation rule the original
    /// design sketched out for this case is flagged there as ambiguous, and
    /// silently fabricating a shortened value seems worse than dropping it
    /// with a loud warning.
    pub fn finalize(
        &mut self,
        mut on_token: impl FnMut(DataToken),
        mut on_warning: impl FnMut(StreamWarning),
    ) -> StreamResult<()> {
        if self.state == StreamState::Done {
            return Ok(());
        }
        self.buffer.borrow_mut().eof = true;
        let result = self.drive(true, &mut on_token, &mut on_warning);
        self.state = StreamState::Done;
        result
    }

    fn drive(
        &mut self,
        final_call: bool,
        on_token: &mut dyn FnMut(DataToken),
        on_warning: &mut dyn FnMut(StreamWarning),
    ) -> StreamResult<()> {
        if self.main.is_none() {
            match self.advance_detect(final_call)? {
                DetectOutcome::NeedMore => return Ok(()),
                DetectOutcome::RawDataset => self.begin_parsing(IMPLICIT_VR_LITTLE_ENDIAN_UID)?,
                DetectOutcome::Resolved(uid) => self.begin_parsing(&uid)?,
            }
        }

        let reader = self.main.as_mut().expect("parsing was just started");
        let mut emitted = 0;
        loop {
            if emitted >= self.options.max_tokens_per_call {
                break;
            }
            match reader.next() {
                Some(Ok(token)) => {
                    emitted += 1;
                    on_token(token);
                }
                Some(Err(e)) => {
                    if is_recoverable(&e) {
                        break;
                    }
                    if final_call {
                        on_warning(StreamWarning::IncompleteTrailingData);
                        break;
                    }
                    return Err(StreamError::MalformedHeader);
                }
                None => {
                    self.state = StreamState::Done;
                    break;
                }
            }
        }
        Ok(())
    }

    fn cursor_info(&self) -> (usize, usize) {
        let st = self.buffer.borrow();
        (st.local_pos(), st.unread())
    }

    fn advance_pos(&self, n: u64) {
        self.buffer.borrow_mut().pos += n;
    }

    fn try_read_exact(&self, n: usize) -> StreamResult<Option<Vec<u8>>> {
        let mut buf = vec![0u8; n];
        let mut reader = BufferReader(Rc::clone(&self.buffer));
        match reader.read_exact(&mut buf) {
            Ok(()) => Ok(Some(buf)),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(_) => Err(StreamError::MalformedHeader),
        }
    }

    fn advance_detect(&mut self, final_call: bool) -> StreamResult<DetectOutcome> {
        self.state = StreamState::Detecting;
        if self.detect.part10.is_none() {
            let (local, unread) = self.cursor_info();
            if unread < PART10_PREAMBLE_LEN {
                if !final_call {
                    return Ok(DetectOutcome::NeedMore);
                }
                if unread == 0 {
                    return Ok(DetectOutcome::NeedMore);
                }
                self.detect.part10 = Some(false);
            } else {
                let is_part10 = {
                    let st = self.buffer.borrow();
                    &st.data[local + 128..local + 132] == b"DICM"
                };
                self.detect.part10 = Some(is_part10);
                if is_part10 {
                    self.advance_pos(PART10_PREAMBLE_LEN as u64);
                }
            }
        }

        match self.detect.part10 {
            Some(false) => Ok(DetectOutcome::RawDataset),
            Some(true) => match self.advance_meta_group(final_call)? {
                Some(uid) => Ok(DetectOutcome::Resolved(uid)),
                None => Ok(DetectOutcome::NeedMore),
            },
            None => Ok(DetectOutcome::NeedMore),
        }
    }

    fn advance_meta_group(&mut self, final_call: bool) -> StreamResult<Option<String>> {
        if self.detect.group_length.is_none() {
            match self.try_read_exact(GROUP_LENGTH_ELEM_SIZE)? {
                None => return if final_call { Err(StreamError::MalformedHeader) } else { Ok(None) },
                Some(bytes) => {
                    let tag = Tag(
                        u16::from_le_bytes([bytes[0], bytes[1]]),
                        u16::from_le_bytes([bytes[2], bytes[3]]),
                    );
                    let len = u16::from_le_bytes([bytes[6], bytes[7]]);
                    if tag != Tag(0x0002, 0x0000) || &bytes[4..6] != b"UL" || len != 4 {
                        return Err(StreamError::MalformedHeader);
                    }
                    self.detect.group_length =
                        Some(u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]));
                }
            }
        }

        let group_length = self.detect.group_length.expect("just set") as usize;
        match self.try_read_exact(group_length)? {
            None => {
                if final_call {
                    Err(StreamError::MalformedHeader)
                } else {
                    Ok(None)
                }
            }
            Some(group_bytes) => extract_transfer_syntax(&group_bytes).map(Some),
        }
    }

    fn begin_parsing(&mut self, ts_uid: &str) -> StreamResult<()> {
        let ts = self
            .ts_index
            .get(ts_uid)
            .ok_or_else(|| StreamError::UnsupportedTransferSyntax {
                uid: ts_uid.to_string(),
            })?;
        let reader = DataSetReader::new_with_dictionary(
            BufferReader(Rc::clone(&self.buffer)),
            StandardDataDictionary,
            ts,
            SpecificCharacterSet::Default,
        )
        .map_err(|_| StreamError::MalformedHeader)?;
        self.main = Some(reader);
        self.state = StreamState::Parsing;
        Ok(())
    }
}

/// Read the File Meta Information Group's elements looking for
/// (0002,0010) Transfer Syntax UID, always encoded in explicit VR little
/// endian. Mirrors the approach of `dicom_object::meta::FileMetaTable`,
/// simplified to the one field the streaming driver needs to start parsing
/// the body.
fn extract_transfer_syntax(group_bytes: &[u8]) -> StreamResult<String> {
    let decoder = dicom_encoding::decode::file_header_decoder();
    let mut cursor = io::Cursor::new(group_bytes);
    for _ in 0..MAX_META_ELEMENTS {
        if cursor.position() as usize >= group_bytes.len() {
            break;
        }
        let (header, _) = Decode::decode_header(&decoder, &mut cursor)
            .map_err(|_| StreamError::MalformedHeader)?;
        let len = header.len.get().ok_or(StreamError::MalformedHeader)? as usize;
        let start = cursor.position() as usize;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= group_bytes.len())
            .ok_or(StreamError::MalformedHeader)?;
        if header.tag == Tag(0x0002, 0x0010) {
            let uid = std::str::from_utf8(&group_bytes[start..end])
                .map_err(|_| StreamError::MalformedHeader)?
                .trim_end_matches(['\0', ' '])
                .to_string();
            return Ok(uid);
        }
        cursor.set_position(end as u64);
    }
    Err(StreamError::MalformedHeader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_transfer_syntax_registry::TransferSyntaxRegistry;

    fn sample_part10_bytes() -> Vec<u8> {
        // 128-byte preamble + DICM
        let mut out = vec![0u8; 128];
        out.extend_from_slice(b"DICM");

        // file meta group: group length + transfer syntax UID (explicit VR LE)
        let ts_uid = b"1.2.840.10008.1.2.1\0"; // even-padded
        let mut meta = Vec::new();
        meta.extend_from_slice(&[0x02, 0x00, 0x10, 0x00]); // (0002,0010)
        meta.extend_from_slice(b"UI");
        meta.extend_from_slice(&(ts_uid.len() as u16).to_le_bytes());
        meta.extend_from_slice(ts_uid);

        out.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]); // (0002,0000)
        out.extend_from_slice(b"UL");
        out.extend_from_slice(&4u16.to_le_bytes());
        out.extend_from_slice(&(meta.len() as u32).to_le_bytes());
        out.extend_from_slice(&meta);

        // a single body element in explicit VR LE: (0010,0010) PN "DOE^INFANT"
        out.extend_from_slice(&[0x10, 0x00, 0x10, 0x00]);
        out.extend_from_slice(b"PN");
        out.extend_from_slice(&10u16.to_le_bytes());
        out.extend_from_slice(b"DOE^INFANT");
        out
    }

    #[test]
    fn streams_a_part10_dataset_fed_whole() {
        let registry = TransferSyntaxRegistry;
        let bytes = sample_part10_bytes();
        let mut reader = DataSetStreamReader::new(&registry);
        let mut tokens = Vec::new();
        reader
            .process_chunk(&bytes, |t| tokens.push(t), |_| {})
            .unwrap();
        reader.finalize(|t| tokens.push(t), |_| {}).unwrap();

        assert_eq!(reader.state(), StreamState::Done);
        assert!(matches!(&tokens[0], DataToken::ElementHeader(h) if h.tag == Tag(0x0010, 0x0010)));
        assert!(matches!(&tokens[1], DataToken::PrimitiveValue(v) if v.to_str() == "DOE^INFANT"));
    }

    #[test]
    fn resumes_across_a_chunk_boundary_inside_a_value() {
        // split the stream inside the `DOE^INFANT` value itself (which starts
        // at byte 180 given the fixed-size preamble, meta group and element
        // headers built by `sample_part10_bytes`).
        let bytes = sample_part10_bytes();
        let split_at = 184;
        let (first, second) = bytes.split_at(split_at);

        let registry = TransferSyntaxRegistry;
        let mut reader = DataSetStreamReader::new(&registry);
        let mut tokens = Vec::new();
        let mut warnings = Vec::new();
        reader
            .process_chunk(first, |t| tokens.push(t), |w| warnings.push(w))
            .unwrap();
        reader
            .process_chunk(second, |t| tokens.push(t), |w| warnings.push(w))
            .unwrap();
        reader
            .finalize(|t| tokens.push(t), |w| warnings.push(w))
            .unwrap();

        assert!(warnings.is_empty());
        let values: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                DataToken::PrimitiveValue(v) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].to_str(), "DOE^INFANT");
    }

    #[test]
    fn treats_a_stream_without_the_part10_magic_as_implicit_vr_little_endian() {
        // (0010,0010) PN "DOE^INFANT" in implicit VR LE: tag + u32 length + value
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0x10, 0x00, 0x10, 0x00]);
        bytes.extend_from_slice(&10u32.to_le_bytes());
        bytes.extend_from_slice(b"DOE^INFANT");

        let registry = TransferSyntaxRegistry;
        let mut reader = DataSetStreamReader::new(&registry);
        let mut tokens = Vec::new();
        reader.process_chunk(&bytes, |t| tokens.push(t), |_| {}).unwrap();
        reader.finalize(|t| tokens.push(t), |_| {}).unwrap();

        assert!(matches!(&tokens[0], DataToken::ElementHeader(h) if h.tag == Tag(0x0010, 0x0010)));
    }

    #[test]
    fn rejects_buffering_past_the_configured_limit() {
        let registry = TransferSyntaxRegistry;
        let options = StreamOptions {
            max_buffered_size: 16,
            ..StreamOptions::default()
        };
        let mut reader = DataSetStreamReader::with_options(&registry, options);
        let chunk = vec![0u8; 32];
        let err = reader.process_chunk(&chunk, |_| {}, |_| {}).unwrap_err();
        assert!(matches!(err, StreamError::LimitExceeded { .. }));
        assert_eq!(reader.state(), StreamState::Done);
    }
}
