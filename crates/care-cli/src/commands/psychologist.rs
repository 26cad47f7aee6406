use care_core::entities::{Psychologist, PsychologistDraft, PsychologistPatch};
use care_store::ResourceStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PsychologistCommands, PsychologistCreateArgs, PsychologistUpdateArgs};
use crate::commands::shared::notify::report;
use crate::commands::shared::query::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `carectl psychologist`.
pub async fn handle(
    action: &PsychologistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut store: ResourceStore<Psychologist> = ResourceStore::new(ctx.client.clone());

    match action {
        PsychologistCommands::List {
            list,
            organization,
            active,
        } => {
            let mut query = list_query(list, flags, &ctx.config.general)?;
            if let Some(organization) = organization {
                query = query.filter("organization", organization);
            }
            if let Some(active) = active {
                query = query.filter("isActive", active.to_string());
            }
            with_spinner("Fetching psychologists", store.fetch(query)).await?;
            let page = care_core::pagination::Page {
                items: store.items().to_vec(),
                pagination: *store.pagination(),
            };
            output_page(&page, flags.format)
        }
        PsychologistCommands::Get { id } => {
            let psychologist = with_spinner("Fetching psychologist", store.fetch_one(id)).await?;
            output(psychologist, flags.format)
        }
        PsychologistCommands::Create(args) => {
            let draft = draft_from_args(args);
            let created = with_spinner("Creating psychologist", store.create(&draft)).await?;
            report(&store);
            created.map_or(Ok(()), |p| output(&p, flags.format))
        }
        PsychologistCommands::Update(args) => {
            let patch = patch_from_args(args)?;
            let updated =
                with_spinner("Updating psychologist", store.update(&args.id, &patch)).await?;
            report(&store);
            output(&updated, flags.format)
        }
        PsychologistCommands::Delete { id } => {
            with_spinner("Deleting psychologist", store.delete(id)).await?;
            report(&store);
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        PsychologistCommands::Activate { id } => set_active(&mut store, id, true, flags).await,
        PsychologistCommands::Deactivate { id } => set_active(&mut store, id, false, flags).await,
    }
}

async fn set_active(
    store: &mut ResourceStore<Psychologist>,
    id: &str,
    active: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let message = if active {
        "Activating psychologist"
    } else {
        "Deactivating psychologist"
    };
    let updated = with_spinner(message, store.set_active(id, active)).await?;
    report(store);
    output(&updated, flags.format)
}

fn draft_from_args(args: &PsychologistCreateArgs) -> PsychologistDraft {
    PsychologistDraft {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        specialization: args.specialization.clone(),
        license_number: args.license_number.clone(),
        phone: args.phone.clone(),
        organization: args.organization.clone(),
        is_active: args.inactive.then_some(false),
    }
}

fn patch_from_args(args: &PsychologistUpdateArgs) -> anyhow::Result<PsychologistPatch> {
    let patch = PsychologistPatch {
        name: args.name.clone(),
        email: args.email.clone(),
        specialization: args.specialization.clone(),
        license_number: args.license_number.clone(),
        phone: args.phone.clone(),
        is_active: None,
    };
    if patch == PsychologistPatch::default() {
        anyhow::bail!("Nothing to update: pass at least one field flag");
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_flag_sets_explicit_false() {
        let args = PsychologistCreateArgs {
            name: "Dr. Okafor".into(),
            email: "okafor@clinic.example".into(),
            password: "long-enough".into(),
            specialization: None,
            license_number: None,
            phone: None,
            organization: Some("o1".into()),
            inactive: true,
        };
        assert_eq!(draft_from_args(&args).is_active, Some(false));
        let active = PsychologistCreateArgs {
            inactive: false,
            ..args
        };
        assert_eq!(draft_from_args(&active).is_active, None);
    }

    #[test]
    fn empty_update_is_rejected() {
        let args = PsychologistUpdateArgs {
            id: "p1".into(),
            name: None,
            email: None,
            specialization: None,
            license_number: None,
            phone: None,
        };
        assert!(patch_from_args(&args).is_err());
    }
}
