//! Hotel Admin CLI
//!
//! Terminal front end for hotel operations:
//! - Sign in and out as an administrator
//! - Dashboard numbers and recent bookings
//! - Hotels, rooms, room types and bookings management

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hotel_admin::config::{generate_default_config, LoggingConfig};
use hotel_admin::models::{
    BookingStatus, HotelForm, HotelSearch, RoomDraft, RoomStatus, RoomTypeDraft,
};
use hotel_admin::shell::{self, UserBadge};
use hotel_admin::views::{Banner, Confirm, DateBucket};
use hotel_admin::{render, AdminApp, ApiResult, Config, GateDecision, Route, SessionExpired};

#[derive(Parser)]
#[command(name = "hotel-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Administrative client for hotel operations")]
#[command(long_about = "Hotel Admin manages hotels, rooms and bookings on the platform backend.\nSign in with an administrator account first: hotel-admin login --email <EMAIL>")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides configuration)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in as an administrator
    Login {
        #[arg(short, long)]
        email: String,
        /// Read from standard input when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in administrator
    Whoami,

    /// Overview & analytics
    Dashboard,

    /// Manage hotel properties
    Hotels {
        #[command(subcommand)]
        command: HotelCommand,
    },

    /// Manage rooms & availability
    Rooms {
        #[command(subcommand)]
        command: RoomCommand,
    },

    /// Manage room categories and pricing
    RoomTypes {
        #[command(subcommand)]
        command: RoomTypeCommand,
    },

    /// Manage reservations
    Bookings {
        #[command(subcommand)]
        command: BookingCommand,
    },

    /// Print or write a default configuration file
    Config {
        /// Write to this path instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum HotelCommand {
    /// List hotels, optionally filtered by name or city
    List {
        /// Case-insensitive match against name, city or address
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Show one hotel
    Show { id: i64 },
    /// Search hotels on the backend
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        min_rating: Option<f64>,
    },
    /// Create a hotel
    Create(HotelFields),
    /// Update a hotel; omitted fields keep their value
    Update {
        id: i64,
        #[command(flatten)]
        fields: HotelFields,
    },
    /// Delete a hotel
    Delete { id: i64 },
}

#[derive(Args)]
pub struct HotelFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    rating: Option<f64>,
}

impl HotelFields {
    fn apply(self, form: &mut HotelForm) {
        let text_fields = [
            (self.name, &mut form.name),
            (self.address, &mut form.address),
            (self.city, &mut form.city),
            (self.country, &mut form.country),
            (self.state, &mut form.state),
            (self.postal_code, &mut form.postal_code),
            (self.phone, &mut form.phone),
            (self.email, &mut form.email),
            (self.description, &mut form.description),
        ];
        for (value, slot) in text_fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(rating) = self.rating {
            form.rating = rating;
        }
    }
}

#[derive(Subcommand)]
pub enum RoomCommand {
    /// List rooms with hotel, type and price
    List {
        #[arg(long)]
        hotel: Option<i64>,
        #[arg(long)]
        status: Option<RoomStatus>,
        /// Only applies together with --hotel
        #[arg(long)]
        room_type: Option<i64>,
    },
    /// Show one room
    Show { id: i64 },
    /// Change a room's status
    SetStatus { id: i64, status: RoomStatus },
    /// Create a room
    Create {
        #[arg(long)]
        hotel: i64,
        #[arg(long)]
        room_type: i64,
        #[arg(long)]
        number: String,
        #[arg(long)]
        floor: Option<i32>,
        #[arg(long, default_value = "AVAILABLE")]
        status: RoomStatus,
    },
    /// Delete a room
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum RoomTypeCommand {
    /// List room types
    List {
        #[arg(long)]
        hotel: Option<i64>,
    },
    /// Show one room type
    Show { id: i64 },
    /// Create a room type
    Create {
        #[arg(long)]
        hotel: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        capacity: u32,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a room type
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum BookingCommand {
    /// List bookings
    List {
        #[arg(long)]
        status: Option<BookingStatus>,
        #[arg(long)]
        hotel: Option<i64>,
        /// Check-in window: today, week, month or past
        #[arg(long)]
        range: Option<DateBucket>,
    },
    /// Show one booking
    Show { id: i64 },
    /// Change a booking's status
    SetStatus { id: i64, status: BookingStatus },
    /// Cancel a booking
    Cancel {
        id: i64,
        #[arg(long, default_value = "Cancelled by admin")]
        reason: String,
    },
    /// Status history of a booking
    History { id: i64 },
    /// Check whether a room is free for a stay
    Availability {
        room: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    /// Bookings of a hotel with check-in inside a date range
    Range {
        hotel: i64,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Asks the operator to type the hotel name back
struct TypedConfirmation {
    expected: String,
    assume_yes: bool,
}

impl Confirm for TypedConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprintln!("{}", prompt);
        match prompt_line("Type the hotel name to confirm: ") {
            Ok(answer) => answer == self.expected,
            Err(_) => false,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_tracing(&config.logging);

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let mut app = AdminApp::with_file_store(config).context("Failed to build the backend client")?;
    app.start().await;

    let format = cli.format;
    let assume_yes = cli.yes;

    match cli.command {
        Commands::Config { .. } => Ok(()),

        Commands::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_line("Password: ")?,
            };
            app.open(Route::Login).await;
            let user = app.login(&email, &password).await?;
            println!("Signed in as {} ({})", user.display_name(), user.email);
            Ok(())
        }

        Commands::Logout => {
            app.logout().await;
            println!("Signed out");
            Ok(())
        }

        Commands::Whoami => {
            let principal = app.session().principal().await;
            if principal.is_none() {
                bail!("Not signed in. Run `hotel-admin login --email <EMAIL>` first.");
            }
            let badge = UserBadge::for_user(principal.as_ref());
            println!("{} [{}]", badge.name, badge.initials);
            println!("  {}", badge.email);
            println!("  {}", badge.role_label);
            Ok(())
        }

        Commands::Dashboard => {
            enter(&mut app, Route::Dashboard).await?;
            let mut view = app.dashboard_view();
            let loaded = view.load().await;
            settle(&mut app, loaded)?;

            if let Some(message) = view.error() {
                bail!("{}", message);
            }
            let stats = view.stats().cloned().unwrap_or_default();
            match format {
                OutputFormat::Json => print_json(&stats)?,
                OutputFormat::Table => {
                    print!(
                        "{}",
                        render::dashboard(&stats, &view.recent_bookings(), |id| view.hotel_name(id))
                    );
                }
            }
            Ok(())
        }

        Commands::Hotels { command } => {
            enter(&mut app, Route::Hotels).await?;
            hotels(&mut app, command, format, assume_yes).await
        }

        Commands::Rooms { command } => {
            enter(&mut app, Route::Rooms).await?;
            rooms(&mut app, command, format).await
        }

        Commands::RoomTypes { command } => {
            enter(&mut app, Route::Rooms).await?;
            room_types(&mut app, command, format).await
        }

        Commands::Bookings { command } => {
            enter(&mut app, Route::Bookings).await?;
            bookings(&mut app, command, format).await
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hotel_admin={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let contents = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote default configuration to {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}

/// Pass the page's gate or explain why not
async fn enter(app: &mut AdminApp, route: Route) -> anyhow::Result<()> {
    match app.open(route).await {
        GateDecision::Allow => {
            let (title, description) = (shell::page_title(route), shell::page_description(route));
            tracing::debug!(%route, "{}: {}", title, description);
            Ok(())
        }
        GateDecision::Redirect(Route::Login) | GateDecision::Loading => {
            bail!("Not signed in. Run `hotel-admin login --email <EMAIL>` first.")
        }
        GateDecision::Redirect(other) => bail!("Page unavailable; redirected to {}", other),
    }
}

fn session_expired() -> anyhow::Error {
    anyhow!(SessionExpired).context("Run `hotel-admin login` to sign in again")
}

/// Unwrap a view outcome, turning session expiry into a failure
fn settle<T>(app: &mut AdminApp, outcome: Result<T, SessionExpired>) -> anyhow::Result<T> {
    app.observe(outcome).ok_or_else(session_expired)
}

/// Unwrap a direct gateway result; expiry is routed like a view outcome
fn checked<T>(app: &mut AdminApp, result: ApiResult<T>) -> anyhow::Result<T> {
    app.observe_call(result).map_err(|err| {
        if err.is_authentication_expired() {
            session_expired()
        } else {
            err.into()
        }
    })
}

/// Print a success banner, or fail with an error banner
fn report(banner: Option<&Banner>) -> anyhow::Result<()> {
    match banner {
        Some(banner) if banner.is_error() => bail!("{}", banner.text),
        Some(banner) => {
            println!("{}", banner.text);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn hotels(
    app: &mut AdminApp,
    command: HotelCommand,
    format: OutputFormat,
    assume_yes: bool,
) -> anyhow::Result<()> {
    let mut view = app.hotels_view();

    match command {
        HotelCommand::List { search, city } => {
            let loaded = view.load().await;
            settle(app, loaded)?;
            report(view.banner())?;

            view.filter.search = search.unwrap_or_default();
            view.filter.city = city;
            let visible = view.visible();
            match format {
                OutputFormat::Json => print_json(&visible)?,
                OutputFormat::Table => match view.empty_message() {
                    Some(message) => println!("{}", message),
                    None => {
                        print!("{}", render::hotels_table(&visible));
                        println!();
                        println!("{}", view.summary());
                    }
                },
            }
        }

        HotelCommand::Show { id } => {
            let fetched = app.client().hotels().get(id).await;
            let hotel = checked(app, fetched)?;
            match format {
                OutputFormat::Json => print_json(&hotel)?,
                OutputFormat::Table => print!("{}", render::hotel_detail(&hotel)),
            }
        }

        HotelCommand::Search {
            name,
            city,
            country,
            min_rating,
        } => {
            let search = HotelSearch {
                name,
                city,
                country,
                min_rating,
            };
            let searched = app.client().hotels().search(&search).await;
            let found = checked(app, searched)?;
            match format {
                OutputFormat::Json => print_json(&found)?,
                OutputFormat::Table if found.is_empty() => println!("No hotels found"),
                OutputFormat::Table => {
                    let rows: Vec<_> = found.iter().collect();
                    print!("{}", render::hotels_table(&rows));
                }
            }
        }

        HotelCommand::Create(fields) => {
            let mut form = HotelForm::default();
            fields.apply(&mut form);
            let saved = view.save(None, &form).await;
            settle(app, saved)?;
            report(view.banner())?;
        }

        HotelCommand::Update { id, fields } => {
            let fetched = app.client().hotels().get(id).await;
            let current = checked(app, fetched)?;
            let mut form = HotelForm::from_hotel(&current);
            fields.apply(&mut form);
            let saved = view.save(Some(id), &form).await;
            settle(app, saved)?;
            report(view.banner())?;
        }

        HotelCommand::Delete { id } => {
            let loaded = view.load().await;
            settle(app, loaded)?;
            report(view.banner())?;

            let expected = view
                .hotels()
                .iter()
                .find(|h| h.id == id)
                .map(|h| h.name.clone())
                .unwrap_or_else(|| format!("Hotel {}", id));
            let confirmation = TypedConfirmation {
                expected,
                assume_yes,
            };

            let deleted = view.delete(id, &confirmation).await;
            if !settle(app, deleted)? && view.banner().is_none() {
                println!("Deletion cancelled");
            }
            report(view.banner())?;
        }
    }
    Ok(())
}

async fn rooms(app: &mut AdminApp, command: RoomCommand, format: OutputFormat) -> anyhow::Result<()> {
    let mut view = app.rooms_view();

    match command {
        RoomCommand::List {
            hotel,
            status,
            room_type,
        } => {
            let loaded = view.load().await;
            settle(app, loaded)?;
            report(view.banner())?;

            view.filter.select_hotel(hotel);
            view.filter.select_room_type(room_type);
            view.filter.status = status;

            let rows = view.rows();
            match format {
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Table => match view.empty_message() {
                    Some(message) => println!("{}", message),
                    None => {
                        let counts = view.counts();
                        print!("{}", render::rooms_table(&rows));
                        println!();
                        println!(
                            "Total {} · Available {} · Occupied {} · Maintenance {} · Out of Order {}",
                            counts.total,
                            counts.available,
                            counts.occupied,
                            counts.maintenance,
                            counts.out_of_order
                        );
                    }
                },
            }
        }

        RoomCommand::Show { id } => {
            let fetched = app.client().rooms().get(id).await;
            let room = checked(app, fetched)?;
            match format {
                OutputFormat::Json => print_json(&room)?,
                OutputFormat::Table => {
                    println!("Room {} (#{})", room.room_number, room.id);
                    println!("  Hotel:  {}", room.hotel_id);
                    println!("  Type:   {}", room.room_type_id);
                    if let Some(floor) = room.floor {
                        println!("  Floor:  {}", floor);
                    }
                    println!("  Status: {}", render::badge(&room.status.badge()));
                }
            }
        }

        RoomCommand::SetStatus { id, status } => {
            let loaded = view.load().await;
            settle(app, loaded)?;
            report(view.banner())?;

            let updated = view.update_status(id, status).await;
            settle(app, updated)?;
            report(view.banner())?;
        }

        RoomCommand::Create {
            hotel,
            room_type,
            number,
            floor,
            status,
        } => {
            let draft = RoomDraft {
                hotel_id: hotel,
                room_type_id: room_type,
                room_number: number,
                floor,
                status,
            };
            let created = app.client().rooms().create(&draft).await;
            let room = checked(app, created)?;
            println!("Room {} created (#{})", room.room_number, room.id);
        }

        RoomCommand::Delete { id } => {
            let deleted = app.client().rooms().delete(id).await;
            checked(app, deleted)?;
            println!("Room {} deleted", id);
        }
    }
    Ok(())
}

async fn room_types(app: &mut AdminApp, command: RoomTypeCommand, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        RoomTypeCommand::List { hotel } => {
            let api = app.client().room_types();
            let fetched = match hotel {
                Some(hotel) => api.by_hotel(hotel).await,
                None => api.list().await,
            };
            let room_types = checked(app, fetched)?;
            match format {
                OutputFormat::Json => print_json(&room_types)?,
                OutputFormat::Table if room_types.is_empty() => println!("No room types found"),
                OutputFormat::Table => print!("{}", render::room_types_table(&room_types)),
            }
        }

        RoomTypeCommand::Show { id } => {
            let fetched = app.client().room_types().get(id).await;
            let room_type = checked(app, fetched)?;
            match format {
                OutputFormat::Json => print_json(&room_type)?,
                OutputFormat::Table => print!("{}", render::room_types_table(&[room_type])),
            }
        }

        RoomTypeCommand::Create {
            hotel,
            name,
            price,
            capacity,
            description,
        } => {
            let draft = RoomTypeDraft {
                hotel_id: hotel,
                name,
                description,
                base_price: price,
                max_occupancy: capacity,
            };
            let created = app.client().room_types().create(&draft).await;
            let created = checked(app, created)?;
            println!("Room type {} created (#{})", created.name, created.id);
        }

        RoomTypeCommand::Delete { id } => {
            let deleted = app.client().room_types().delete(id).await;
            checked(app, deleted)?;
            println!("Room type {} deleted", id);
        }
    }
    Ok(())
}

async fn bookings(app: &mut AdminApp, command: BookingCommand, format: OutputFormat) -> anyhow::Result<()> {
    let mut view = app.bookings_view();
    let today = Local::now().date_naive();

    match command {
        BookingCommand::List {
            status,
            hotel,
            range,
        } => {
            let loaded = view.load().await;
            settle(app, loaded)?;
            report(view.banner())?;

            view.filter.status = status;
            view.filter.hotel = hotel;
            view.filter.bucket = range;

            let visible = view.visible(today);
            match format {
                OutputFormat::Json => print_json(&visible)?,
                OutputFormat::Table => match view.empty_message(today) {
                    Some(message) => println!("{}", message),
                    None => {
                        let counts = view.counts(today);
                        print!(
                            "{}",
                            render::bookings_table(&visible, |id| view.hotel_name(id), today)
                        );
                        println!();
                        println!(
                            "Total {} · Pending {} · Confirmed {} · Checked In {} · Checked Out {} · Cancelled {}",
                            counts.total,
                            counts.pending,
                            counts.confirmed,
                            counts.checked_in,
                            counts.checked_out,
                            counts.cancelled
                        );
                    }
                },
            }
        }

        BookingCommand::Show { id } => {
            let (bookings_api, hotels_api) = (app.client().bookings(), app.client().hotels());
            let fetched = tokio::try_join!(bookings_api.get(id), hotels_api.list());
            let (booking, hotels) = checked(app, fetched)?;
            let hotel_name = hotels
                .iter()
                .find(|h| h.id == booking.hotel_id)
                .map(|h| h.name.clone())
                .unwrap_or_else(|| format!("Hotel {}", booking.hotel_id));
            match format {
                OutputFormat::Json => print_json(&booking)?,
                OutputFormat::Table => print!("{}", render::booking_detail(&booking, &hotel_name, today)),
            }
        }

        BookingCommand::SetStatus { id, status } => {
            let updated = view.update_status(id, status).await;
            settle(app, updated)?;
            report(view.banner())?;
        }

        BookingCommand::Cancel { id, reason } => {
            let cancelled = view.cancel(id, &reason).await;
            settle(app, cancelled)?;
            report(view.banner())?;
        }

        BookingCommand::History { id } => {
            let fetched = view.history(id).await;
            let Some(entries) = settle(app, fetched)? else {
                return report(view.banner());
            };
            match format {
                OutputFormat::Json => print_json(&entries)?,
                OutputFormat::Table => print!("{}", render::history_table(&entries)),
            }
        }

        BookingCommand::Availability {
            room,
            check_in,
            check_out,
        } => {
            let answered = app
                .client()
                .bookings()
                .check_availability(room, check_in, check_out)
                .await;
            let answer = checked(app, answered)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "available": answer.is_available() }))?,
                OutputFormat::Table if answer.is_available() => {
                    println!("Room {} is available from {} to {}", room, check_in, check_out)
                }
                OutputFormat::Table => {
                    println!("Room {} is not available from {} to {}", room, check_in, check_out)
                }
            }
        }

        BookingCommand::Range { hotel, start, end } => {
            let (bookings_api, hotels_api) = (app.client().bookings(), app.client().hotels());
            let fetched = tokio::try_join!(
                bookings_api.by_date_range(hotel, start, end),
                hotels_api.list()
            );
            let (found, hotels) = checked(app, fetched)?;
            let rows: Vec<_> = found.iter().collect();
            match format {
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Table if rows.is_empty() => println!("No bookings in range"),
                OutputFormat::Table => {
                    let hotel_name = |id: i64| {
                        hotels
                            .iter()
                            .find(|h| h.id == id)
                            .map(|h| h.name.clone())
                            .unwrap_or_else(|| format!("Hotel {}", id))
                    };
                    print!("{}", render::bookings_table(&rows, hotel_name, today));
                }
            }
        }
    }
    Ok(())
}
