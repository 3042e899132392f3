//! Readers with scripted behavior for streaming tests.

use std::collections::VecDeque;
use std::io::{self, Read};

/// One step of a [`ScriptedReader`].
pub(crate) enum Step {
    /// Yield these bytes, possibly over several reads if the buffer is small.
    Data(Vec<u8>),
    /// Fail once with `ErrorKind::Interrupted`.
    Interrupted,
    /// Fail with this raw OS error, and keep failing.
    Fail(i32),
}

/// Reader that replays a fixed script, then reports end of stream.
pub(crate) struct ScriptedReader {
    steps: VecDeque<Step>,
    pub(crate) reads: usize,
}

impl ScriptedReader {
    pub(crate) fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            reads: 0,
        }
    }

    /// `data` served in pieces of at most `piece` bytes.
    pub(crate) fn pieces(data: &[u8], piece: usize) -> Self {
        Self::new(data.chunks(piece).map(|c| Step::Data(c.to_vec())))
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        match self.steps.front_mut() {
            None => Ok(0),
            Some(Step::Fail(code)) => Err(io::Error::from_raw_os_error(*code)),
            Some(Step::Interrupted) => {
                self.steps.pop_front();
                Err(io::Error::from(io::ErrorKind::Interrupted))
            }
            Some(Step::Data(data)) => {
                let n = out.len().min(data.len());
                out[..n].copy_from_slice(&data[..n]);
                data.drain(..n);
                if data.is_empty() {
                    self.steps.pop_front();
                }
                Ok(n)
            }
        }
    }
}
