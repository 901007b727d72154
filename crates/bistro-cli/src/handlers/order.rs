//! Order command handler: the interactive session.
//!
//! Spoken prompts are printed, and speech is typed: while the session is
//! listening, the next line is taken as what the guest said.

use anyhow::Result;
use bistro_core::SessionHandle;
use bistro_voice::TypedFeed;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::bootstrap::{CliContext, OrderSessionParts};
use crate::error::CliError;
use crate::presentation::TerminalPresenter;
use crate::utils::input::{HELP, LineRoute, ReplCommand, route_line};

/// Run one interactive order session on stdin until `quit` or end of input.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    run(ctx, BufReader::new(tokio::io::stdin())).await
}

/// Run one order session reading lines from `input`.
///
/// The driver is shut down and awaited however the input ends. A read
/// failure is reported as [`CliError::Io`].
pub async fn run<R>(ctx: &CliContext, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let OrderSessionParts {
        driver,
        handle,
        feed,
        presenter,
    } = ctx.order_session();
    let driver_task = tokio::spawn(driver.run());

    println!("🍽  {}", ctx.settings.effective_restaurant_name());
    println!("{HELP}\n");
    handle.start();

    let outcome = read_lines(input, &handle, &feed, &presenter).await;

    tracing::debug!(state = %handle.state(), "Leaving order session");
    handle.shutdown();
    driver_task
        .await
        .map_err(|e| CliError::Internal(format!("Session driver failed: {e}")))?;

    Ok(outcome?)
}

async fn read_lines<R>(
    input: R,
    handle: &SessionHandle,
    feed: &TypedFeed,
    presenter: &TerminalPresenter,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match route_line(&line, feed.is_listening()) {
            LineRoute::Speech(text) => {
                if !feed.submit_line(&text) {
                    presenter.notice("Not listening. Type 'start' to begin again.");
                }
            }
            LineRoute::Command(ReplCommand::Start) => handle.start(),
            LineRoute::Command(ReplCommand::Email(email)) => {
                presenter.notice(&format!("Email set to {email}"));
                presenter.set_email(email);
            }
            LineRoute::Command(ReplCommand::Confirm(email)) => {
                if let Some(email) = email {
                    presenter.set_email(email);
                }
                if presenter.confirm_enabled() {
                    handle.confirm(presenter.email());
                } else {
                    presenter.notice("Confirm is not available right now.");
                }
            }
            LineRoute::Command(ReplCommand::Help) => println!("{HELP}"),
            LineRoute::Command(ReplCommand::Quit) => break,
            LineRoute::Invalid(message) => {
                if !message.is_empty() {
                    presenter.notice(&message);
                }
            }
            LineRoute::Empty => {}
        }
    }
    Ok(())
}
