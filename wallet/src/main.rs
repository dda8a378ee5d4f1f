//! Console driver for the passkey wallet.
//!
//! Reads one command per line from stdin and prints a status line after
//! every command and every background result.

use std::sync::Arc;

use passkey_wallet::app::{AppState, AuthStep, Page, WalletStep};
use passkey_wallet::services::api::ApiClient;
use passkey_wallet::utils::format::format_units;
use passkey_wallet::{debug, App, Result, Services, WalletConfig};
use shared::utils::truncate_address;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  accounts              list accounts (quick select)
  create                create a new passkey account
  select <n|id>         connect an account by list number or id
  faucet                request test funds
  send                  start a transfer
  to <handle|address>   set the recipient
  amount <value>        set the amount
  clear                 clear the recipient
  submit                submit the transfer
  cancel                discard the transfer
  back                  leave the transfer result
  explorer              open the last transaction in the browser
  disconnect            disconnect the account
  status                show the current state
  quit                  exit";

enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    debug::init();

    let config = WalletConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, network_id = config.network_id, "Starting passkey wallet");

    let client = Arc::new(ApiClient::new(&config)?);
    let mut app = App::new(Services::from_client(client), config);
    let events = app.event_rx.clone();

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if let Flow::Quit = run_command(&mut app, line.trim()) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            },
            event = events.recv() => match event {
                Ok(event) => app.handle_event(event),
                Err(_) => break,
            },
        }

        println!("{}", status_line(&app.state.read()));
    }

    tracing::info!("Passkey wallet stopped");
    Ok(())
}

fn run_command(app: &mut App, line: &str) -> Flow {
    let (command, arg) = match line.split_once(' ') {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let result = match command {
        "" => Ok(()),
        "help" => {
            println!("{}", HELP);
            Ok(())
        }
        "accounts" => {
            app.handle_auth_step(AuthStep::Connect);
            print_accounts(&app.state.read());
            Ok(())
        }
        "create" => {
            app.handle_auth_step(AuthStep::Create);
            app.handle_create_account()
        }
        "select" => {
            let account_id = {
                let state = app.state.read();
                match arg.parse::<usize>() {
                    Ok(n) if n >= 1 => state.auth.quick_select().get(n - 1).map(|a| a.id.clone()),
                    _ => Some(arg.to_string()),
                }
            };
            match account_id {
                Some(account_id) => app.handle_select_account(account_id),
                None => {
                    println!("no account #{}", arg);
                    Ok(())
                }
            }
        }
        "faucet" => app.handle_request_funds(),
        "send" => app.handle_open_compose(),
        "to" => app.handle_recipient_input(arg.to_string()),
        "amount" => app.handle_amount_input(arg.to_string()),
        "clear" => app.handle_clear_recipient(),
        "submit" => app.handle_submit_transfer(),
        "cancel" => app.handle_cancel_compose(),
        "back" => app.handle_back(),
        "explorer" => app.handle_view_in_explorer().map(|url| println!("{}", url)),
        "disconnect" => app.handle_disconnect(),
        "status" => {
            print_details(&app.state.read());
            Ok(())
        }
        "quit" | "exit" => return Flow::Quit,
        other => {
            println!("unknown command: {} (try `help`)", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        println!("! {}", e);
    }
    Flow::Continue
}

fn print_accounts(state: &AppState) {
    if state.auth.list().is_empty() {
        println!("no accounts yet - `create` one");
        return;
    }
    for (i, account) in state.auth.quick_select().iter().enumerate() {
        println!("  {}. {}", i + 1, account.display_name());
    }
    if state.auth.can_create() {
        println!("  +  create new account ({})", state.auth.next_label());
    }
}

fn balance_text(state: &AppState) -> String {
    match state.session.balance() {
        Some(balance) => format!("{} ETH", format_units(balance, state.config.asset_decimals)),
        None => "-".to_string(),
    }
}

fn status_line(state: &AppState) -> String {
    let page = state.session.page();
    let mut line = format!("[{}]", page.title());

    if let Some(account) = state.session.current_account() {
        line.push_str(&format!(" {} | {}", account.display_name(), balance_text(state)));
    }

    match page {
        Page::Auth => {
            if state.auth.is_busy() {
                line.push_str(" | waiting for passkey...");
            }
            if let Some(error) = &state.auth.error {
                line.push_str(&format!(" | error: {}", error));
            }
        }
        Page::Faucet => {
            line.push_str(&format!(" | {}", state.faucet.label()));
            if let Some(error) = &state.faucet.error {
                line.push_str(&format!(" | error: {}", error));
            }
        }
        Page::Wallet => match state.wallet.step() {
            WalletStep::Home => {}
            WalletStep::Compose => {
                if let Some(draft) = state.wallet.draft() {
                    let status = if draft.is_submitting() {
                        "submitting...".to_string()
                    } else if let Some(error) = state.draft_error() {
                        error
                    } else {
                        "ready".to_string()
                    };
                    line.push_str(&format!(" | send {} to {} | {}", draft.amount_text(), draft.raw_recipient(), status));
                }
            }
            WalletStep::Result => {
                if let Some(id) = state.wallet.outcome().and_then(|o| o.transaction_id.as_deref()) {
                    line.push_str(&format!(" | sent, tx {}", truncate_address(id)));
                }
            }
        },
    }

    if let Some(error) = &state.balance_error {
        line.push_str(&format!(" | balance unavailable: {}", error));
    }
    line
}

fn print_details(state: &AppState) {
    println!("{}", status_line(state));
    if let Some(draft) = state.wallet.draft() {
        println!("  draft {}", draft.id());
        println!("  recipient: {}", draft.raw_recipient());
        if let Some(address) = draft.resolved_address() {
            println!("  resolved:  {}", address);
        }
        println!("  amount:    {}", draft.amount_text());
        if let Some(failure) = &draft.last_failure {
            println!("  last attempt failed: {}", failure.failure_reason.as_deref().unwrap_or("unknown"));
        }
    }
    if let Some(outcome) = state.wallet.outcome() {
        println!(
            "  {:?} at {} - {} to {}",
            outcome.status,
            outcome.submitted_at.format("%H:%M:%S"),
            format_units(outcome.amount, state.config.asset_decimals),
            outcome.recipient
        );
        if let Some(url) = state.explorer_url() {
            println!("  {}", url);
        }
    }
}
