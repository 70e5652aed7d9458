//! Interactive lookup loop
//!
//! Each input line starts a lookup in its own task, so a new request can be
//! typed while an older one is still waiting on the registry or catalog.
//! Results come back through a channel tagged with their session ticket;
//! only the newest request's result is ever shown.
//!
//! At end of input the loop drops its sender and drains the channel. It ends
//! once every lookup task has finished or died, since each task holds a
//! sender clone until then.

use std::future::Future;
use std::process::ExitCode;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use partlookup::config::LookupConfig;
use partlookup::output::{LookupReport, OutputMode};
use partlookup::session::{LookupSession, LookupTicket};

/// Discard the shown result and invalidate in-flight lookups
const CLEAR_COMMAND: &str = ":clear";

/// Stop reading input
const QUIT_COMMAND: &str = ":quit";

/// Run lookups for each line on stdin until EOF or `:quit`
pub async fn shell(config: &LookupConfig, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let orchestrator = config.orchestrator();
    let input = BufReader::new(tokio::io::stdin());

    run_loop(input, mode, move |raw| {
        let orchestrator = orchestrator.clone();
        async move { LookupReport::from_result(&orchestrator.lookup(&raw).await) }
    })
    .await?;

    Ok(ExitCode::SUCCESS)
}

/// Drive the session over `input`, running `lookup` for each request line
async fn run_loop<R, F, Fut>(
    input: R,
    mode: OutputMode,
    lookup: F,
) -> anyhow::Result<LookupSession<LookupReport>>
where
    R: AsyncBufRead + Unpin,
    F: Fn(String) -> Fut,
    Fut: Future<Output = LookupReport> + Send + 'static,
{
    let mut session: LookupSession<LookupReport> = LookupSession::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<(LookupTicket, LookupReport)>();
    let mut tx = Some(tx);
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line(), if tx.is_some() => {
                let Some(line) = line? else {
                    tx = None;
                    continue;
                };

                match line.trim() {
                    "" => {},
                    QUIT_COMMAND => break,
                    CLEAR_COMMAND => {
                        session.clear();
                        if mode == OutputMode::Human {
                            println!("Cleared.");
                        }
                    },
                    _ => {
                        let Some(sender) = tx.clone() else {
                            continue;
                        };
                        let ticket = session.begin();
                        let request = lookup(line.clone());
                        tokio::spawn(async move {
                            let report = request.await;
                            let _ = sender.send((ticket, report));
                        });
                    },
                }
            },
            received = rx.recv() => {
                let Some((ticket, report)) = received else {
                    break;
                };
                if session.apply(ticket, report) {
                    if let Some(report) = session.current() {
                        report.render(mode);
                    }
                } else {
                    debug!("Dropped result for superseded request #{}", ticket.sequence());
                }
            },
        }
    }

    Ok(session)
}
