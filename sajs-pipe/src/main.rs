//! Read JSON from a file or stdin, reformat it through [`sajs`], and write it
//! back out. A thin, allocation-tolerant CLI built on top of an
//! allocation-free core.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sajs::event::EventKind;
use sajs::lexer::{Lexer, State};
use sajs::status::Status;
use sajs::writer::{TextPrefix, Writer};

const DEFAULT_STACK_SIZE: usize = 1024;

/// Read and write JSON.
#[derive(Parser, Debug)]
#[command(name = "sajs-pipe", version)]
struct Args {
    /// Input file (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Write output to FILENAME instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILENAME")]
    output: Option<PathBuf>,

    /// Write terse output without newlines
    #[arg(short = 't')]
    terse: bool,

    /// Number of lexer stack frames to allocate
    #[arg(short = 'k', default_value_t = DEFAULT_STACK_SIZE)]
    stack_size: usize,
}

/// A byte-at-a-time view over a reader that, once exhausted, keeps
/// reporting end of input rather than erroring.
struct ByteStream<R> {
    reader: R,
    done: bool,
}

impl<R: Read> ByteStream<R> {
    fn new(reader: R) -> Self {
        ByteStream { reader, done: false }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.done {
            return Ok(None);
        }
        let mut buf = [0u8; 1];
        let n = self.reader.read(&mut buf).context("failed to read input")?;
        if n == 0 {
            self.done = true;
            Ok(None)
        } else {
            Ok(Some(buf[0]))
        }
    }
}

fn write_newline(indent: u32, out: &mut impl Write) -> Result<()> {
    out.write_all(b"\n")?;
    for _ in 0..indent {
        out.write_all(b"  ")?;
    }
    Ok(())
}

fn write_prefix(prefix: TextPrefix, depth: u32, terse: bool, out: &mut impl Write) -> Result<()> {
    match prefix {
        TextPrefix::None => Ok(()),
        TextPrefix::ObjectStart | TextPrefix::ArrayStart | TextPrefix::ObjectEnd | TextPrefix::ArrayEnd => {
            if terse {
                Ok(())
            } else {
                write_newline(depth, out)
            }
        }
        TextPrefix::MemberColon => {
            if terse {
                out.write_all(b":")?;
            } else {
                out.write_all(b": ")?;
            }
            Ok(())
        }
        TextPrefix::MemberComma | TextPrefix::ArrayComma => {
            out.write_all(b",")?;
            if terse {
                Ok(())
            } else {
                write_newline(depth, out)
            }
        }
    }
}

fn run(args: &Args) -> Result<(Status, u32)> {
    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(File::open(path).with_context(|| format!("failed to open {}", path.display()))?),
        None => Box::new(std::io::stdin()),
    };
    let mut stream = ByteStream::new(input);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("failed to create {}", path.display()))?),
        None => Box::new(std::io::stdout()),
    };
    let mut out = BufWriter::new(out);

    let mut stack = vec![State::default(); args.stack_size.max(1)];
    let mut lexer = Lexer::new(&mut stack).context("failed to set up lexer")?;
    let mut writer = Writer::new();

    let mut depth: i64 = 0;
    let mut num_values: u32 = 0;
    let mut status = Status::Success;

    loop {
        let byte = stream.next_byte()?;
        let r = lexer.read_byte(byte);
        status = r.status;
        if status != Status::Success {
            break;
        }

        let is_top_end = match r.event {
            EventKind::Start(_, _) => {
                depth += 1;
                false
            }
            EventKind::End(_, _) => {
                depth -= 1;
                depth == 0
            }
            EventKind::DoubleEnd(_) => {
                depth -= 2;
                depth == 0
            }
            _ => false,
        };

        let text = writer.write_result(r.event, lexer.last_bytes());
        write_prefix(text.prefix, text.depth, args.terse, &mut out)?;
        if !text.bytes.is_empty() {
            out.write_all(text.bytes)?;
        }

        if is_top_end {
            num_values += 1;
            out.write_all(b"\n")?;
        }
    }

    out.flush()?;

    if status != Status::Success && status != Status::Failure {
        eprintln!("error: {status}");
    }

    Ok((status, num_values))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok((_, num_values)) if num_values != 1 => ExitCode::from(65), // EX_DATAERR
        Ok((Status::Failure, _)) => ExitCode::from(0),
        Ok((status, _)) => ExitCode::from(100u8.saturating_add(status as u8)),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
