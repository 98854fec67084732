//! Simulated devices for running the game off the board.
//!
//! Available in tests and with the `sim` feature. Each device records what
//! the game did to it so callers can inspect it afterwards.

use std::{borrow::Cow, collections::VecDeque};

use cpulator::{
    Board,
    button::{ButtonPort, Keys},
    jtag_uart::{ControlWord, DataWord, Uart},
    pixel_buffer::{self, Framebuffer, HEIGHT, SIZE, STRIDE, WIDTH},
    timer::{Control, Status, Timer},
};

pub type SimBoard = Board<MemoryFramebuffer, SimTimer, ScriptedButtons, ScriptedUart>;

/// A board whose timer snapshot reads `snapshot`.
pub fn board(snapshot: u32) -> SimBoard {
    Board::from_parts(
        MemoryFramebuffer::new(),
        SimTimer::new(snapshot),
        ScriptedButtons::default(),
        ScriptedUart::new(),
    )
}

/// Pixel buffer in ordinary memory.
///
/// Stores into the row padding or past the end are kept aside instead of
/// being applied.
#[derive(Clone)]
pub struct MemoryFramebuffer {
    bytes: Vec<u8>,
    writes: Vec<u32>,
    stray: Vec<usize>,
}

impl Default for MemoryFramebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFramebuffer {
    pub fn new() -> Self {
        Self::filled(0)
    }

    pub fn filled(color: u8) -> Self {
        Self {
            bytes: vec![color; SIZE],
            writes: vec![0; SIZE],
            stray: Vec::new(),
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> u8 {
        self.bytes[pixel_buffer::offset(x, y)]
    }

    /// Visible rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(STRIDE).map(|row| &row[..WIDTH as usize])
    }

    /// Visible pixels of `color`.
    pub fn count(&self, color: u8) -> usize {
        self.rows().flatten().filter(|&&c| c == color).count()
    }

    pub fn writes_to(&self, x: i32, y: i32) -> u32 {
        self.writes[pixel_buffer::offset(x, y)]
    }

    pub fn total_writes(&self) -> u64 {
        self.writes.iter().map(|&n| n as u64).sum::<u64>() + self.stray.len() as u64
    }

    /// Offsets of stores that missed the visible 80×60 area.
    pub fn stray_writes(&self) -> &[usize] {
        &self.stray
    }

    pub fn same_pixels(&self, other: &MemoryFramebuffer) -> bool {
        self.rows().eq(other.rows())
    }
}

impl Framebuffer for MemoryFramebuffer {
    fn write(&mut self, offset: usize, color: u8) {
        let (x, y) = pixel_buffer::coords(offset);
        if x >= WIDTH || y >= HEIGHT {
            self.stray.push(offset);
            return;
        }
        self.bytes[offset] = color;
        self.writes[offset] += 1;
    }
}

/// Interval timer that expires only when told to.
#[derive(Clone, Debug)]
pub struct SimTimer {
    status: Status,
    control: Control,
    period: u32,
    snapshot: u32,
    snapshots: u32,
}

impl SimTimer {
    /// `snapshot` is what every snapshot reads back.
    pub fn new(snapshot: u32) -> Self {
        Self {
            status: Status::empty(),
            control: Control::empty(),
            period: 0,
            snapshot,
            snapshots: 0,
        }
    }

    /// Count down to zero: set `TO`.
    pub fn expire(&mut self) {
        self.status.insert(Status::TO);
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn control(&self) -> Control {
        self.control
    }

    /// Snapshots taken so far.
    pub fn snapshots(&self) -> u32 {
        self.snapshots
    }
}

impl Timer for SimTimer {
    fn set_period(&mut self, ticks: u32) {
        self.period = ticks;
    }

    fn set_control(&mut self, control: Control) {
        self.control = control;
        self.status.set(Status::RUN, control.contains(Control::START));
    }

    fn status(&mut self) -> Status {
        self.status
    }

    fn clear_timeout(&mut self) {
        self.status.remove(Status::TO);
    }

    fn snapshot(&mut self) -> u32 {
        self.snapshots += 1;
        self.snapshot
    }
}

/// Push-buttons that replay a script, then report whatever is held.
#[derive(Clone, Debug, Default)]
pub struct ScriptedButtons {
    script: VecDeque<Keys>,
    held: Keys,
}

impl ScriptedButtons {
    pub fn new(script: impl IntoIterator<Item = Keys>) -> Self {
        Self {
            script: script.into_iter().collect(),
            held: Keys::empty(),
        }
    }

    /// Keys reported once the script runs out.
    pub fn hold(&mut self, keys: Keys) {
        self.held = keys;
    }
}

impl ButtonPort for ScriptedButtons {
    fn read(&mut self) -> Keys {
        self.script.pop_front().unwrap_or(self.held)
    }
}

/// UART with a queue of bytes from the host and a capture of bytes sent.
#[derive(Clone, Debug, Default)]
pub struct ScriptedUart {
    input: VecDeque<u8>,
    output: Vec<u8>,
    stalls: u32,
    control_reads: u32,
}

/// Write FIFO space reported when not stalled.
const FIFO_SPACE: u32 = 64;

impl ScriptedUart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut uart = Self::new();
        uart.push_input(bytes);
        uart
    }

    /// Queue bytes as if typed on the host.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Bytes not yet read by the game.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Report a full write FIFO for the next `reads` control reads.
    pub fn stall_writes(&mut self, reads: u32) {
        self.stalls = reads;
    }

    pub fn control_reads(&self) -> u32 {
        self.control_reads
    }

    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Everything sent so far. Invalid UTF-8 shows up as U+FFFD.
    pub fn output(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }
}

impl Uart for ScriptedUart {
    fn read_data(&mut self) -> DataWord {
        match self.input.pop_front() {
            Some(byte) => DataWord((self.input.len() as u32) << 16 | 1 << 15 | byte as u32),
            None => DataWord(0),
        }
    }

    fn read_control(&mut self) -> ControlWord {
        self.control_reads += 1;
        if self.stalls > 0 {
            self.stalls -= 1;
            ControlWord(0)
        } else {
            ControlWord(FIFO_SPACE << 16)
        }
    }

    fn write_data(&mut self, byte: u8) {
        self.output.push(byte);
    }
}
