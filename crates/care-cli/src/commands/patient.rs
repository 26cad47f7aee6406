use care_core::entities::{Patient, PatientDraft, PatientPatch};
use care_core::pagination::{Page, Pagination};
use care_store::ResourceStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PatientCommands, PatientCreateArgs, PatientUpdateArgs};
use crate::commands::shared::notify::report;
use crate::commands::shared::query::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `carectl patient`.
pub async fn handle(
    action: &PatientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut store: ResourceStore<Patient> = ResourceStore::new(ctx.client.clone());

    match action {
        PatientCommands::List {
            list,
            include_deleted,
        } => {
            let mut query = list_query(list, flags, &ctx.config.general)?;
            if *include_deleted {
                query = query.filter("includeDeleted", "true");
            }
            with_spinner("Fetching patients", store.fetch(query)).await?;
            let page = visible_patients(store.items(), *store.pagination(), *include_deleted);
            output_page(&page, flags.format)
        }
        PatientCommands::Get { id } => {
            let patient = with_spinner("Fetching patient", store.fetch_one(id)).await?;
            output(patient, flags.format)
        }
        PatientCommands::Create(args) => {
            let created = with_spinner("Registering patient", store.create(&draft_from_args(args)))
                .await?;
            report(&store);
            created.map_or(Ok(()), |p| output(&p, flags.format))
        }
        PatientCommands::Update(args) => {
            let patch = patch_from_args(args)?;
            let updated = with_spinner("Updating patient", store.update(&args.id, &patch)).await?;
            report(&store);
            output(&updated, flags.format)
        }
        PatientCommands::Delete { id } => {
            with_spinner("Deleting patient", store.delete(id)).await?;
            report(&store);
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

/// Soft-deleted patients stay hidden unless asked for, even if the server
/// returns them. Hidden rows are taken off the reported total.
fn visible_patients(
    items: &[Patient],
    mut pagination: Pagination,
    include_deleted: bool,
) -> Page<Patient> {
    let visible: Vec<Patient> = items
        .iter()
        .filter(|p| include_deleted || !p.is_deleted)
        .cloned()
        .collect();
    for _ in visible.len()..items.len() {
        pagination.record_removed();
    }
    Page {
        items: visible,
        pagination,
    }
}

fn draft_from_args(args: &PatientCreateArgs) -> PatientDraft {
    PatientDraft {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        date_of_birth: args.dob,
        gender: args.gender.clone(),
        psychologist: args.psychologist.clone(),
        organization: args.organization.clone(),
    }
}

fn patch_from_args(args: &PatientUpdateArgs) -> anyhow::Result<PatientPatch> {
    let patch = PatientPatch {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        date_of_birth: args.dob,
        gender: args.gender.clone(),
        psychologist: args.psychologist.clone(),
    };
    if patch == PatientPatch::default() {
        anyhow::bail!("Nothing to update: pass at least one field flag");
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn patient(id: &str, deleted: bool) -> Patient {
        serde_json::from_value(serde_json::json!({"_id": id, "name": id, "isDeleted": deleted}))
            .unwrap()
    }

    #[test]
    fn deleted_patients_are_hidden_by_default() {
        let items = vec![patient("a", false), patient("b", true)];
        let pagination = Pagination::single_page(2);

        let page = visible_patients(&items, pagination, false);
        let ids: Vec<String> = page.items.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a"]);
        assert_eq!(page.pagination.total, 1);

        let page = visible_patients(&items, pagination, true);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total, 2);
    }

    #[test]
    fn hidden_rows_come_off_the_footer_total() {
        let items = vec![patient("a", false), patient("b", true), patient("c", true)];
        let pagination = Pagination {
            page: 1,
            pages: 2,
            total: 12,
            limit: 10,
        };

        let page = visible_patients(&items, pagination, false);

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 10);
        assert_eq!(page.pagination.pages, 1);
    }
}
