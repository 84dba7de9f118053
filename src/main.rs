use std::io::Write;
use studentlookup::core::{handle_copy, handle_reset, handle_submit, handle_toggle};
use studentlookup::{logger, platform, AppConfig, FormMessage, QueryState};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const HELP: &str = "\
Commands:
  search [number] [name]  look up an account (prompts for missing fields)
  toggle                  show or hide the password
  copy                    copy the Google ID and password to the clipboard
  reset                   clear the form
  help                    show this text
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormCommand {
    Search {
        identifier: Option<String>,
        name: Option<String>,
    },
    Toggle,
    Copy,
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> FormCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => FormCommand::Empty,
        "search" | "s" | "find" => {
            let (identifier, name) = match rest.split_once(char::is_whitespace) {
                Some((id, name)) => (Some(id.to_string()), Some(name.trim().to_string())),
                None if rest.is_empty() => (None, None),
                None => (Some(rest.to_string()), None),
            };
            FormCommand::Search { identifier, name }
        }
        "toggle" | "t" | "show" | "hide" => FormCommand::Toggle,
        "copy" | "c" => FormCommand::Copy,
        "reset" | "r" | "clear" => FormCommand::Reset,
        "help" | "h" | "?" => FormCommand::Help,
        "quit" | "q" | "exit" => FormCommand::Quit,
        other => FormCommand::Unknown(other.to_string()),
    }
}

fn prompt(label: &str) {
    print!("{}", label);
    let _ = std::io::stdout().flush();
}

async fn read_field(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<String, String> {
    prompt(label);
    let line = lines
        .next_line()
        .await
        .map_err(|e| format!("Failed to read input: {}", e))?;
    Ok(line.unwrap_or_default())
}

fn render(state: &QueryState, message: &FormMessage) {
    if !message.is_empty() {
        println!("[{}] {}", message.kind, message.text);
    }
    if let Some(view) = state.view() {
        println!("  Google ID: {}", view.login_id);
        println!("  PW:        {}", view.secret);
    }
}

async fn run() -> Result<(), String> {
    let config = AppConfig::load();
    logger::log_info(&format!(
        "Starting {} (id mode: {}, transliteration: {})",
        env!("CARGO_PKG_NAME"),
        config.identifier_mode,
        config.transliterate
    ));

    let service = config
        .build_service()
        .map_err(|e| format!("Failed to load roster: {}", e))?;
    let exporter = platform::system_exporter();

    println!("Student account lookup ({} records)", service.len());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut state = QueryState::cleared();

    loop {
        prompt("> ");
        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?
        else {
            break;
        };

        let outcome = match parse_command(&line) {
            FormCommand::Search { identifier, name } => {
                let identifier = match identifier {
                    Some(id) => id,
                    None => read_field(&mut lines, "Student number: ").await?,
                };
                let name = match name {
                    Some(name) => name,
                    None => read_field(&mut lines, "Name: ").await?,
                };
                handle_submit(&service, &identifier, &name)
            }
            FormCommand::Toggle => handle_toggle(state),
            FormCommand::Copy => handle_copy(state, &exporter).await,
            FormCommand::Reset => handle_reset(),
            FormCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            FormCommand::Quit => break,
            FormCommand::Empty => continue,
            FormCommand::Unknown(word) => {
                println!("Unknown command '{}'. Type 'help' for commands.", word);
                continue;
            }
        };

        state = outcome.state;
        render(&state, &outcome.message);
    }

    logger::log_info("Exiting");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logger::init_logger();

    if let Err(e) = run().await {
        logger::log_error(&e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
