use crate::fmt::{ceprintln, BOLD, DIM, RESET};
use crate::parse;
use crate::stats::Totals;
use anyhow::{Context, Result};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

pub struct RunArgs {
    pub every: usize,
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            every: 10,
            json: false,
        }
    }
}

pub async fn run(args: RunArgs) -> Result<()> {
    ceprintln!("{DIM}[logtally] reading access log from stdin — ctrl+c or end of input for the final report{RESET}");

    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let (totals, lines) = accumulate(reader, &mut stdout, &args, shutdown_signal()).await?;

    ceprintln!(
        "{DIM}[logtally]{RESET} {BOLD}{lines}{RESET} {DIM}lines · {} tracked · {} bytes{RESET}",
        totals.tracked_hits(),
        totals.total_file_size
    );
    Ok(())
}

/// Resolves when ctrl+c arrives. A clean exit trigger, not an error; if the
/// handler cannot be installed the loop still terminates on end of input.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Drive the accumulation loop. Each pass races the next line against
/// cancellation; a report goes out every `args.every` lines and once more on
/// termination. Stream exhaustion and cancellation land on the same path.
pub async fn accumulate<R, W, F>(
    reader: R,
    out: &mut W,
    args: &RunArgs,
    shutdown: F,
) -> Result<(Totals, u64)>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = reader.lines();
    let mut totals = Totals::new();
    let mut line_count: u64 = 0;

    loop {
        let line = tokio::select! {
            maybe = lines.next_line() => match maybe.context("reading input")? {
                Some(line) => line,
                None => break,
            },
            _ = &mut shutdown => break,
        };

        totals.apply(parse::parse_line(&line));
        line_count += 1;
        if line_count % args.every as u64 == 0 {
            emit_report(&totals, out, args.json)?;
        }
    }

    emit_report(&totals, out, args.json)?;
    Ok((totals, line_count))
}

fn emit_report(totals: &Totals, out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        totals.write_json_report(out)
    } else {
        totals.write_report(out)
    }
}
