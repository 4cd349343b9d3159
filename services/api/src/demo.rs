use crate::infra::seeded_directory;
use clap::Args;
use std::sync::Arc;
use tow_dispatch::dispatch::DispatchService;
use tow_dispatch::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// City name fragment to search for (case-insensitive)
    #[arg(long)]
    pub(crate) city: String,
}

/// Console rendition of the dispatch search, for demos without an HTTP
/// client at hand.
pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let fragment = args.city.trim().to_string();
    if fragment.is_empty() {
        return Err(AppError::InvalidArgument(
            "city fragment must not be empty".to_string(),
        ));
    }

    let directory = Arc::new(seeded_directory());
    let service = DispatchService::new(directory);
    let candidates = service.search_by_city(&fragment)?;

    println!("Dispatch search demo");
    println!("City fragment: {fragment}");

    if candidates.is_empty() {
        println!("No active operators serve that city.");
        return Ok(());
    }

    for candidate in &candidates {
        println!(
            "\n{} — license {} — {} ({})",
            candidate.name,
            candidate.license_category.label(),
            candidate.company_name,
            candidate.phone
        );

        for annotated in &candidate.trucks {
            let verdict = if annotated.is_license_compatible {
                "ok"
            } else {
                "license mismatch"
            };
            println!(
                "  [{verdict}] {} {} ({})",
                annotated.truck.plate,
                annotated.truck.model,
                annotated.truck.trailer_type.label()
            );
        }

        for yard in &candidate.yards {
            match &yard.phone {
                Some(phone) => println!("  yard: {} ({phone})", yard.name),
                None => println!("  yard: {}", yard.name),
            }
        }

        for body in &candidate.government_bodies {
            println!("  affiliation: {}", body.name);
        }
    }

    Ok(())
}
