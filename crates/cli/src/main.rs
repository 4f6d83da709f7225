use clap::{Parser, Subcommand};
use healnet_core::{
    derive_specialties, project, search_suggestions, ConsultationMode, Practitioner, SortOrder,
    ViewState,
};
use healnet_source::{SourceClient, SourceConfig};
use healnet_types::SpecialtyTag;

#[derive(Parser)]
#[command(name = "healnet")]
#[command(about = "HealNet practitioner directory CLI")]
struct Cli {
    /// Directory source URL (falls back to HEALNET_SOURCE_URL, then the
    /// bundled mock address)
    #[arg(long, global = true)]
    source_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List practitioners matching a view
    List {
        /// Raw URL query string, e.g. "search=rao&sortBy=fees"
        #[arg(long, conflicts_with_all = ["search", "consultation", "specialties", "sort"])]
        query: Option<String>,
        /// Free-text name search
        #[arg(long)]
        search: Option<String>,
        /// Consultation mode label ("Video Consult" or "In Clinic")
        #[arg(long)]
        consultation: Option<String>,
        /// Specialty tag (repeatable)
        #[arg(long = "specialty")]
        specialties: Vec<String>,
        /// Sort directive: fees, fees-desc, or experience
        #[arg(long)]
        sort: Option<String>,
    },
    /// List the available specialty filter options
    Specialties,
    /// Show autocomplete suggestions for a partial query
    Suggest {
        /// Partial name or specialty text
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_url = cli
        .source_url
        .clone()
        .or_else(|| std::env::var("HEALNET_SOURCE_URL").ok());
    let config = SourceConfig::from_env_value(env_url)?;
    let client = SourceClient::new(config)?;
    let directory = client.fetch_directory().await?;

    match cli.command {
        Some(Commands::List {
            query,
            search,
            consultation,
            specialties,
            sort,
        }) => {
            let state = match query {
                Some(raw) => healnet_query::decode(&raw),
                None => state_from_flags(search, consultation, specialties, sort),
            };
            let projected = project(&directory.practitioners, &state);
            print_listing(&projected);
            if !state.is_default() {
                println!("View: ?{}", healnet_query::encode(&state));
            }
        }
        Some(Commands::Specialties) => {
            for tag in derive_specialties(&directory.practitioners) {
                println!("{tag}");
            }
        }
        Some(Commands::Suggest { query }) => {
            let suggestions = search_suggestions(&directory.practitioners, &query);
            if suggestions.is_empty() {
                println!("No suggestions.");
            } else {
                for practitioner in suggestions {
                    println!("{} ({})", practitioner.name, specialty_list(practitioner));
                }
            }
        }
        None => {
            println!("Use 'healnet --help' for commands");
        }
    }

    Ok(())
}

fn state_from_flags(
    search: Option<String>,
    consultation: Option<String>,
    specialties: Vec<String>,
    sort: Option<String>,
) -> ViewState {
    let mut state = ViewState::default();

    if let Some(search) = search {
        state.search_query = search;
    }

    if let Some(label) = consultation {
        state.consultation_type = ConsultationMode::from_wire(&label);
        if state.consultation_type.is_none() {
            eprintln!("Ignoring unknown consultation mode: {label}");
        }
    }

    for raw in specialties {
        match SpecialtyTag::new(&raw) {
            Ok(tag) => {
                state.specialties.insert(tag);
            }
            Err(e) => eprintln!("Ignoring specialty {raw:?}: {e}"),
        }
    }

    if let Some(value) = sort {
        state.sort_by = SortOrder::from_wire(&value);
        if state.sort_by.is_none() {
            eprintln!("Ignoring unknown sort directive: {value}");
        }
    }

    state
}

fn print_listing(projected: &[&Practitioner]) {
    if projected.is_empty() {
        println!("No practitioners found.");
        return;
    }

    println!(
        "{} {} found",
        projected.len(),
        if projected.len() == 1 {
            "practitioner"
        } else {
            "practitioners"
        }
    );
    for practitioner in projected {
        let modes = practitioner
            .modes
            .iter()
            .map(|m| m.to_wire())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} | {} | {} yrs | fee {} | {}",
            practitioner.name,
            specialty_list(practitioner),
            practitioner.experience_years,
            practitioner.fee,
            if modes.is_empty() { "-" } else { modes.as_str() }
        );
    }
}

fn specialty_list(practitioner: &Practitioner) -> String {
    if practitioner.specialties.is_empty() {
        return "-".into();
    }
    practitioner
        .specialties
        .iter()
        .map(SpecialtyTag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
