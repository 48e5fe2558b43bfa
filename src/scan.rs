//! Byte-level scalar decoders used by the parser driver.
//!
//! Every decoder operates on a byte cursor and advances it; none allocate.

use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::nucleotide::Nucleotide;
use memchr::memchr;

/// A cursor over a byte slice, tracking the current read position.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Cursor<'a> {
        Cursor { data, pos: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.data.len());
    }

    /// Skip `n` bytes unconditionally. Used by callers that have already
    /// inspected the bytes being skipped (e.g. a line-prefix dispatch).
    #[inline]
    pub fn skip(&mut self, n: usize) {
        self.advance(n);
    }

    /// Skip any run of `#`-prefixed comment lines at the current position.
    #[inline]
    pub fn skip_comments(&mut self) {
        while self.peek() == Some(b'#') {
            self.skip_line();
        }
    }

    /// Skip a run of whitespace (tab, newline, carriage return — not space).
    #[inline]
    pub fn skip_white(&mut self) {
        while matches!(self.peek(), Some(b) if is_white(b)) {
            self.advance(1);
        }
    }

    /// Advance past the current line, including its terminating `\n`.
    #[inline]
    pub fn skip_line(&mut self) {
        match memchr(b'\n', &self.data[self.pos..]) {
            Some(offset) => self.advance(offset + 1),
            None => self.pos = self.data.len(),
        }
    }

    /// Parse an unsigned base-10 integer. No sign handling, no overflow
    /// checking — matches the input format, which never emits signed or
    /// out-of-range magnitudes here.
    #[inline]
    pub fn parse_u32(&mut self) -> u32 {
        let mut n: u32 = 0;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            n = n.wrapping_mul(10).wrapping_add((b - b'0') as u32);
            self.advance(1);
        }
        n
    }

    /// Parse an unsigned base-10 integer and return it as `i32`, for RSID
    /// magnitudes (the sign is applied by the caller based on the `r`/`i`
    /// line prefix, not by this decoder).
    #[inline]
    pub fn parse_i32(&mut self) -> i32 {
        self.parse_u32() as i32
    }

    /// Parse a single nucleotide letter via the compile-time lookup table.
    #[inline]
    pub fn parse_nucleotide(&mut self) -> Nucleotide {
        match self.peek() {
            Some(b) => {
                self.advance(1);
                NUCLEOTIDE_TABLE[b as usize]
            }
            None => Nucleotide::None,
        }
    }

    /// Parse a genotype: two nucleotides in sequence.
    #[inline]
    pub fn parse_genotype(&mut self) -> Genotype {
        let first = self.parse_nucleotide();
        let second = self.parse_nucleotide();
        Genotype::new(first, second)
    }

    /// Parse a chromosome token: a decimal autosome number, or a single
    /// letter/word for `X`, `Y`, `MT`. Anything else maps to
    /// `Chromosome::None`.
    #[inline]
    pub fn parse_chromosome(&mut self) -> Chromosome {
        match self.peek() {
            Some(b) if b.is_ascii_digit() => {
                let n = self.parse_u32();
                Chromosome::from_autosome_number(n)
            }
            Some(b'X') => {
                self.advance(1);
                Chromosome::X
            }
            Some(b'Y') => {
                self.advance(1);
                Chromosome::Y
            }
            Some(b'M') => {
                self.advance(1);
                if self.peek() == Some(b'T') {
                    self.advance(1);
                }
                Chromosome::Mt
            }
            _ => {
                if !self.is_empty() {
                    self.advance(1);
                }
                Chromosome::None
            }
        }
    }
}

/// Tab/newline/carriage-return — the only whitespace this format uses.
/// Not a space: fields are never space-separated.
#[inline]
pub const fn is_white(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

/// Compile-time nucleotide lookup table, indexed by ASCII byte. Built once
/// at compile time rather than lazily initialized, so there is no init
/// race and no hidden runtime state.
const fn build_nucleotide_table() -> [Nucleotide; 256] {
    let mut table = [Nucleotide::None; 256];
    table[b'A' as usize] = Nucleotide::A;
    table[b'G' as usize] = Nucleotide::G;
    table[b'C' as usize] = Nucleotide::C;
    table[b'T' as usize] = Nucleotide::T;
    table[b'D' as usize] = Nucleotide::D;
    table[b'I' as usize] = Nucleotide::I;
    table
}

static NUCLEOTIDE_TABLE: [Nucleotide; 256] = build_nucleotide_table();
