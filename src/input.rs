use std::{fs, path::Path};

use log::debug;

use crate::{
    core::{Pid, Ticks},
    error::ParseError,
    sim::ProcessSpec,
};

struct IntReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> IntReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn next_int(&mut self, expected: &'static str) -> Result<u32, ParseError> {
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == self.data.len() {
            return Err(ParseError::UnexpectedEof { expected });
        }

        let offset = self.pos;
        let mut value: u32 = 0;
        while let Some(&b) = self.data.get(self.pos).filter(|b| b.is_ascii_digit()) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or(ParseError::Overflow { offset })?;
            self.pos += 1;
        }

        Ok(value)
    }
}

// A count, then that many `id arrival burst` triples. Any non-digit byte
// delimits integers.
pub fn parse_processes(data: impl AsRef<[u8]>) -> Result<Vec<ProcessSpec>, ParseError> {
    let mut reader = IntReader::new(data.as_ref());
    let count = reader.next_int("process count")? as usize;

    // The count is untrusted; let the vector grow past this if it must
    let mut procs = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let pid: Pid = reader.next_int("process id")?;
        let arrival_time = Ticks::from(reader.next_int("arrival time")?);
        let burst_time = Ticks::from(reader.next_int("burst time")?);
        procs.push(ProcessSpec {
            pid,
            arrival_time,
            burst_time,
        });
    }

    Ok(procs)
}

pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, ParseError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let procs = parse_processes(&data)?;
    debug!("loaded {} processes from {}", procs.len(), path.display());
    Ok(procs)
}

// Zero parses; validation rejects it later
pub fn parse_quantum(s: &str) -> Result<Ticks, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidQuantum(s.to_owned()));
    }
    s.parse()
        .map_err(|_| ParseError::InvalidQuantum(s.to_owned()))
}
