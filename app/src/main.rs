//! `projectmate` command-line front end for the marketplace state core.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use projectmate::config::AppSettings;
use projectmate::domain::{
    ApplicationInput, AuthProvider, Marketplace, ProjectId, ProjectQuery, RegistrationProfile,
    Role,
};
use projectmate::outbound::catalogue::CatalogueSource;
use projectmate::outbound::session_store::FileSessionStore;
use projectmate::outbound::simulated_api::SimulatedApi;

type App = Marketplace<SimulatedApi, FileSessionStore>;

/// Wired state core plus the catalogue's category pool.
struct Wired {
    app: App,
    categories: Vec<String>,
}

/// `projectmate` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "projectmate",
    about = "Browse projects, apply and manage your session against the simulated marketplace",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List projects, optionally filtered.
    Projects {
        /// Case-insensitive text search.
        #[arg(long)]
        search: Option<String>,
        /// Exact category.
        #[arg(long)]
        category: Option<String>,
        /// Only paid (`true`) or unpaid (`false`) projects.
        #[arg(long)]
        paid: Option<bool>,
        /// Required skill; repeat to match any of several.
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Only projects created by the signed-in user.
        #[arg(long)]
        mine: bool,
    },
    /// Count projects per category.
    Categories,
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        /// `creator` or `contributor`.
        #[arg(long)]
        role: Role,
    },
    /// Sign in with `google` or `github`.
    Provider { provider: AuthProvider },
    /// End the current session.
    Logout,
    /// Show the current session.
    Whoami,
    /// Apply to a project as the signed-in contributor.
    Apply {
        #[arg(long)]
        project: Uuid,
        #[arg(long)]
        cover_letter: String,
        #[arg(long)]
        availability: String,
        #[arg(long)]
        compensation: Option<String>,
        #[arg(long)]
        portfolio: Option<String>,
    },
    /// Show the signed-in user's profile, applying any edits given.
    Profile {
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Replace the skill list; repeat for several.
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> Result<()> {
    let settings = AppSettings::load_from_iter([OsString::from("projectmate")])
        .wrap_err("load settings")?;
    let context = wire(&settings)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    run(&context, args.command, cancel).await
}

fn wire(settings: &AppSettings) -> Result<Wired> {
    let catalogue = CatalogueSource::load(
        settings.catalogue_path(),
        settings.generated_projects(),
        settings.generator_seed(),
    )
    .wrap_err("load project catalogue")?;
    let categories = catalogue.categories().to_vec();
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let transport = Arc::new(SimulatedApi::new(
        catalogue,
        settings.latency(),
        Arc::clone(&clock),
    ));
    let sessions =
        Arc::new(FileSessionStore::open(&settings.session_dir()).wrap_err("open session store")?);
    Ok(Wired {
        app: Marketplace::new(transport, sessions, clock),
        categories,
    })
}

async fn run(context: &Wired, command: Command, cancel: CancellationToken) -> Result<()> {
    let app = &context.app;
    let mut out = io::stdout().lock();
    match command {
        Command::Projects {
            search,
            category,
            paid,
            skills,
            mine,
        } => {
            let mut query = ProjectQuery::default();
            if let Some(search) = search {
                query = query.with_search(search);
            }
            if let Some(category) = category {
                query = query.with_category(category);
            }
            if let Some(paid) = paid {
                query = query.with_paid(paid);
            }
            for skill in skills {
                query = query.with_skill(skill);
            }
            if mine {
                let session = app
                    .auth()
                    .session()
                    .ok_or_else(|| eyre!("sign in to list your own projects"))?;
                query = query.with_creator(session.id);
            }
            app.projects().fetch_all(cancel).await?;
            for project in app.projects().filter(&query) {
                let budget = if project.is_paid {
                    format!("${}", project.budget)
                } else {
                    "unpaid".to_owned()
                };
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    project.id,
                    project.title,
                    project.category,
                    budget,
                    project.deadline.date_naive()
                )?;
            }
        }
        Command::Categories => {
            app.projects().fetch_all(cancel).await?;
            let counts = app
                .store()
                .read(|state| state.projects().category_counts(&context.categories));
            for (name, count) in counts {
                writeln!(out, "{name}\t{count}")?;
            }
        }
        Command::Login { email, password } => {
            let session = app.auth().login(&email, &password, cancel).await?;
            writeln!(out, "signed in as {} ({})", session.email, session.role)?;
        }
        Command::Register {
            email,
            password,
            name,
            role,
        } => {
            let session = app
                .auth()
                .register(&email, &password, RegistrationProfile { name, role }, cancel)
                .await?;
            writeln!(out, "registered {} as {}", session.email, session.role)?;
        }
        Command::Provider { provider } => {
            let session = app.auth().login_with_provider(provider, cancel).await?;
            writeln!(out, "signed in as {} ({})", session.email, session.role)?;
        }
        Command::Logout => {
            app.auth().logout();
            writeln!(out, "signed out")?;
        }
        Command::Whoami => match app.auth().session() {
            Some(session) => writeln!(
                out,
                "{}\t{}\t{}\t{}",
                session.id, session.name, session.email, session.role
            )?,
            None => writeln!(out, "not signed in")?,
        },
        Command::Apply {
            project,
            cover_letter,
            availability,
            compensation,
            portfolio,
        } => {
            if !app.auth().has_role(Role::Contributor) {
                return Err(eyre!("sign in as a contributor to apply"));
            }
            app.projects().fetch_all(cancel.clone()).await?;
            let target = app
                .projects()
                .find(ProjectId::from_uuid(project))
                .ok_or_else(|| eyre!("project {project} not found"))?;
            let input = ApplicationInput {
                cover_letter,
                expected_compensation: compensation,
                availability,
                portfolio_url: portfolio,
            };
            let application = app.applications().create(&target, input, cancel).await?;
            writeln!(
                out,
                "applied to {} ({}), status {:?}",
                target.title, application.id, application.status
            )?;
        }
        Command::Profile {
            bio,
            location,
            skills,
        } => {
            let session = app
                .auth()
                .session()
                .ok_or_else(|| eyre!("sign in to view your profile"))?;
            let mut profile = app.user().fetch(session.id, cancel.clone()).await?;
            let edited = bio.is_some() || location.is_some() || !skills.is_empty();
            if let Some(bio) = bio {
                profile.bio = bio;
            }
            if let Some(location) = location {
                profile.location = location;
            }
            if !skills.is_empty() {
                profile.skills = skills;
            }
            if edited {
                profile = app.user().update(profile, cancel).await?;
            }
            writeln!(out, "{}\t{}", profile.name, profile.email)?;
            writeln!(out, "bio: {}", profile.bio)?;
            writeln!(out, "location: {}", profile.location)?;
            writeln!(out, "skills: {}", profile.skills.join(", "))?;
        }
    }
    Ok(())
}
