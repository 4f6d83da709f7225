//! Interactive HealNet directory session.
//!
//! Fetches the practitioner directory once at startup, then drives the
//! view state from a small command loop. The session owns an in-memory
//! navigation history, so `back`/`forward`/`open` exercise the same
//! URL-synchronization protocol a browser host would: every edit rewrites
//! the current entry's query string, every navigation decodes it back.
//!
//! An optional first argument is treated as the startup query string, the
//! way a shared or bookmarked link would arrive:
//!
//! ```text
//! healnet-run "search=rao&sortBy=fees"
//! ```

use std::io::{self, BufRead, Write};

use healnet_core::{
    derive_specialties, project, search_suggestions, ConsultationMode, Practitioner, SortOrder,
    ViewState,
};
use healnet_query::{SessionHistory, UrlSync};
use healnet_source::{Directory, SourceClient, SourceConfig};
use healnet_types::SpecialtyTag;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the interactive session.
///
/// # Environment Variables
/// - `HEALNET_SOURCE_URL`: Directory source URL (default: the bundled mock
///   server address)
///
/// # Errors
/// Returns an error if the logging configuration cannot be initialised, or
/// if the directory cannot be fetched and the user declines to retry.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healnet_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SourceConfig::from_env_value(std::env::var("HEALNET_SOURCE_URL").ok())?;
    tracing::info!(url = %config.source_url(), "++ Starting HealNet session");
    let client = SourceClient::new(config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let directory = fetch_with_retry(&client, &mut input).await?;
    let specialty_index = derive_specialties(&directory.practitioners);

    let initial_query = std::env::args().nth(1).unwrap_or_default();
    let mut sync = UrlSync::new(SessionHistory::new(initial_query));
    sync.on_mount();

    println!(
        "Loaded {} practitioners ({} specialties) at {}. Type 'help' for commands.",
        directory.practitioners.len(),
        specialty_index.len(),
        directory.retrieved_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    print_summary(&directory, &sync);

    prompt()?;
    while let Some(line) = input.next() {
        let line = line?;
        match dispatch(line.trim(), &mut sync, &directory, &specialty_index) {
            Outcome::Continue => {}
            Outcome::Quit => break,
        }
        prompt()?;
    }

    Ok(())
}

enum Outcome {
    Continue,
    Quit,
}

fn dispatch(
    line: &str,
    sync: &mut UrlSync<SessionHistory>,
    directory: &Directory,
    specialty_index: &[SpecialtyTag],
) -> Outcome {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "show" => print_listing(&project(&directory.practitioners, sync.state())),
        "search" => {
            sync.update(|s| s.search_query = rest.to_string());
            print_summary(directory, sync);
        }
        "mode" => {
            match parse_mode(rest) {
                Ok(mode) => {
                    sync.update(|s| s.consultation_type = mode);
                    print_summary(directory, sync);
                }
                Err(()) => println!("Unknown mode {rest:?}; use video, clinic, or none."),
            }
        }
        "spec" => match rest.split_once(char::is_whitespace) {
            Some(("add", tag)) => match SpecialtyTag::new(tag) {
                Ok(tag) => {
                    sync.update(|s| {
                        s.specialties.insert(tag);
                    });
                    print_summary(directory, sync);
                }
                Err(e) => println!("Cannot use specialty {tag:?}: {e}"),
            },
            Some(("rm", tag)) => match SpecialtyTag::new(tag) {
                Ok(tag) => {
                    sync.update(|s| {
                        s.specialties.remove(&tag);
                    });
                    print_summary(directory, sync);
                }
                Err(e) => println!("Cannot use specialty {tag:?}: {e}"),
            },
            _ if rest == "clear" => {
                sync.update(|s| s.specialties.clear());
                print_summary(directory, sync);
            }
            _ => println!("Usage: spec add <tag> | spec rm <tag> | spec clear"),
        },
        "sort" => {
            if rest == "none" || rest.is_empty() {
                sync.update(|s| s.sort_by = None);
                print_summary(directory, sync);
            } else {
                match SortOrder::from_wire(rest) {
                    Some(order) => {
                        sync.update(|s| s.sort_by = Some(order));
                        print_summary(directory, sync);
                    }
                    None => println!(
                        "Unknown sort {rest:?}; use fees, fees-desc, experience, or none."
                    ),
                }
            }
        }
        "specialties" => {
            for tag in specialty_index {
                println!("{tag}");
            }
        }
        "suggest" => {
            let suggestions = search_suggestions(&directory.practitioners, rest);
            if suggestions.is_empty() {
                println!("No suggestions.");
            }
            for practitioner in suggestions {
                println!("{}", practitioner.name);
            }
        }
        "url" => println!("{}", display_url(sync)),
        "open" => {
            sync.history_mut().push_query(rest);
            sync.on_navigate();
            print_summary(directory, sync);
        }
        "back" => {
            if sync.history_mut().back() {
                sync.on_navigate();
                print_summary(directory, sync);
            } else {
                println!("Already at the oldest entry.");
            }
        }
        "forward" => {
            if sync.history_mut().forward() {
                sync.on_navigate();
                print_summary(directory, sync);
            } else {
                println!("Already at the newest entry.");
            }
        }
        "clear" => {
            sync.set_state(ViewState::default());
            print_summary(directory, sync);
        }
        "quit" | "exit" => return Outcome::Quit,
        other => println!("Unknown command {other:?}; type 'help'."),
    }

    Outcome::Continue
}

async fn fetch_with_retry(
    client: &SourceClient,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Directory> {
    loop {
        match client.fetch_directory().await {
            Ok(directory) => return Ok(directory),
            Err(e) => {
                eprintln!("Failed to load practitioners: {e}");
                eprint!("Retry? [y/N] ");
                io::stderr().flush()?;
                let answer = match input.next() {
                    Some(line) => line?,
                    None => String::new(),
                };
                if !answer.trim().eq_ignore_ascii_case("y") {
                    anyhow::bail!("directory unavailable");
                }
            }
        }
    }
}

fn parse_mode(raw: &str) -> Result<Option<ConsultationMode>, ()> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    if raw.eq_ignore_ascii_case("video") {
        return Ok(Some(ConsultationMode::VideoConsult));
    }
    if raw.eq_ignore_ascii_case("clinic") {
        return Ok(Some(ConsultationMode::InClinic));
    }
    ConsultationMode::from_wire(raw).map(Some).ok_or(())
}

fn print_summary(directory: &Directory, sync: &UrlSync<SessionHistory>) {
    let projected = project(&directory.practitioners, sync.state());
    println!(
        "{} {} found · {}",
        projected.len(),
        if projected.len() == 1 {
            "practitioner"
        } else {
            "practitioners"
        },
        display_url(sync)
    );
}

fn print_listing(projected: &[&Practitioner]) {
    if projected.is_empty() {
        println!("No practitioners found.");
        return;
    }
    for practitioner in projected {
        let specialties = practitioner
            .specialties
            .iter()
            .map(SpecialtyTag::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let clinic = practitioner
            .clinic
            .as_ref()
            .map(|c| format!(" · {}, {}", c.name, c.city))
            .unwrap_or_default();
        println!(
            "{} | {} | {} yrs | fee {}{}",
            practitioner.name, specialties, practitioner.experience_years, practitioner.fee, clinic
        );
    }
}

fn display_url(sync: &UrlSync<SessionHistory>) -> String {
    let encoded = healnet_query::encode(sync.state());
    if encoded.is_empty() {
        "(no active filters)".to_string()
    } else {
        format!("?{encoded}")
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <text>        set the name search (empty to clear)");
    println!("  mode video|clinic|none   filter by consultation mode");
    println!("  spec add|rm <tag>    select or unselect a specialty");
    println!("  spec clear           unselect all specialties");
    println!("  sort fees|fees-desc|experience|none");
    println!("  show                 print the current projection");
    println!("  specialties          list available specialty options");
    println!("  suggest <text>       autocomplete suggestions");
    println!("  url                  print the current query string");
    println!("  open <query>         navigate to a query string (new entry)");
    println!("  back / forward       step through navigation history");
    println!("  clear                reset all filters");
    println!("  quit                 leave the session");
}

fn prompt() -> io::Result<()> {
    print!("healnet> ");
    io::stdout().flush()
}
