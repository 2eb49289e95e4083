//! Subcommand implementations

use anyhow::{Context, anyhow, bail};
use equus_client::{
    BreedBiotypeInfo, EquineInfo, EquusApiClient, HealthBookMinInfo, RecordId, ResourceClient,
    StableInfo, TravelFilters, TravelInfo, UserInfo,
};
use equus_console::{ConsoleError, ControllerConfig, PaginatedController, screens};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{ListArgs, Resource};

/// Log in and print the issued token
pub async fn login(api: &EquusApiClient, email: &str, password: &str) -> anyhow::Result<()> {
    let data = api
        .login(email, password)
        .await
        .map_err(|e| anyhow!(e.user_message()))?;
    println!("Sesión iniciada como {}", email);
    println!("{}", data.token);
    Ok(())
}

pub async fn list(
    api: &EquusApiClient,
    mut config: ControllerConfig,
    args: &ListArgs,
) -> anyhow::Result<()> {
    if let Some(size) = args.size {
        if !config.is_allowed_page_size(size) {
            bail!("page size must be one of {:?}", config.allowed_page_sizes);
        }
        config = config.with_page_size(size);
    }

    if args.has_travel_filters() && args.resource != Resource::Travels {
        warn!("Status and date filters only apply to travels, ignoring them");
    }

    match args.resource {
        Resource::Users => show_page(screens::users(api, config), args, user_row).await,
        Resource::Equines => show_page(screens::equines(api, config), args, equine_row).await,
        Resource::HealthBooks => {
            show_page(screens::health_books(api, config), args, health_book_row).await
        }
        Resource::Stables => show_page(screens::stables(api, config), args, stable_row).await,
        Resource::Travels => {
            let filters = TravelFilters {
                status: args.status,
                date_from: args.from,
                date_to: args.to,
                ..Default::default()
            };
            let controller = screens::travels(api, config, &filters)?;
            show_page(controller, args, travel_row).await
        }
        Resource::Breeds => show_page(screens::breeds(api, config), args, breed_row).await,
    }
}

pub async fn get(api: &EquusApiClient, resource: Resource, id: RecordId) -> anyhow::Result<()> {
    match resource {
        Resource::Users => print_record(&api.users(), id).await,
        Resource::Equines => print_record(&api.equines(), id).await,
        Resource::HealthBooks => {
            let detail = api
                .health_book_detail(id)
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print_json(&detail)
        }
        Resource::Stables => print_record(&api.stables(), id).await,
        Resource::Travels => print_record(&api.travels(), id).await,
        Resource::Breeds => print_record(&api.breeds(), id).await,
    }
}

pub async fn delete(api: &EquusApiClient, resource: Resource, id: RecordId) -> anyhow::Result<()> {
    let removed = match resource {
        Resource::Users => api.users().remove(id).await,
        Resource::Equines => api.equines().remove(id).await,
        Resource::HealthBooks => api.health_books().remove(id).await,
        Resource::Stables => api.stables().remove(id).await,
        Resource::Travels => api.travels().remove(id).await,
        Resource::Breeds => api.breeds().remove(id).await,
    }
    .map_err(|e| anyhow!(e.user_message()))?;

    if removed {
        info!("Removed {:?} {}", resource, id);
        println!("Registro {} eliminado", id);
    } else {
        println!("El registro {} no fue eliminado", id);
    }
    Ok(())
}

async fn show_page<C>(
    controller: PaginatedController<C>,
    args: &ListArgs,
    row: fn(&C::Entity) -> String,
) -> anyhow::Result<()>
where
    C: ResourceClient,
    C::Entity: Clone,
{
    controller.load().await.map_err(user_error)?;

    if args.page > 0 {
        controller
            .go_to_page(args.page)
            .await
            .map_err(user_error)
            .with_context(|| format!("cannot show page {}", args.page))?;
    }

    if let Some(term) = &args.search {
        controller.set_search_term(term);
    }

    let state = controller.snapshot();
    for record in &state.filtered_content {
        println!("{}", row(record));
    }
    println!("{}", state.range_label());
    println!(
        "Página {} de {}",
        state.current_page + 1,
        state.total_pages.max(1)
    );
    Ok(())
}

async fn print_record<C>(client: &C, id: RecordId) -> anyhow::Result<()>
where
    C: ResourceClient,
    C::Entity: Serialize,
{
    let record = client
        .get(id)
        .await
        .map_err(|e| anyhow!(e.user_message()))?;
    print_json(&record)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn user_error(error: ConsoleError) -> anyhow::Error {
    match error {
        ConsoleError::OutOfRange { page, total_pages } => {
            anyhow!("page {} does not exist ({} pages)", page, total_pages)
        }
        other => anyhow!(other.user_message()),
    }
}

// ============== Rows ==============

pub(crate) fn user_row(user: &UserInfo) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        user.id,
        user.full_name(),
        user.email,
        user.profile.as_deref().unwrap_or("-")
    )
}

pub(crate) fn equine_row(equine: &EquineInfo) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        equine.id, equine.name, equine.chip, equine.owner_name
    )
}

pub(crate) fn health_book_row(book: &HealthBookMinInfo) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        book.id, book.identification, book.equine_name, book.state
    )
}

pub(crate) fn stable_row(stable: &StableInfo) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        stable.id, stable.name, stable.alias, stable.renspa
    )
}

pub(crate) fn travel_row(travel: &TravelInfo) -> String {
    format!(
        "{}\t{}\t{} -> {}\t{}",
        travel.id,
        travel.reference,
        travel.origin.stable_name,
        travel.destination.stable_name,
        travel.travel_status.label()
    )
}

pub(crate) fn breed_row(breed: &BreedBiotypeInfo) -> String {
    format!("{}\t{}", breed.id, breed.name)
}
