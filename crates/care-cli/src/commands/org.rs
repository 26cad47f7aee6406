use care_core::entities::{Organization, OrganizationAdmin, OrganizationDraft, OrganizationPatch};
use care_core::enums::SubscriptionStatus;
use care_core::pagination::Page;
use care_store::ResourceStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{OrgCommands, OrgCreateArgs, OrgUpdateArgs};
use crate::commands::shared::notify::report;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::query::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Organization plus the figures operators read off the list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationView {
    #[serde(flatten)]
    organization: Organization,
    display_status: SubscriptionStatus,
    available_seats: u32,
    days_remaining: Option<i64>,
}

impl OrganizationView {
    fn new(organization: Organization, now: DateTime<Utc>) -> Self {
        Self {
            display_status: organization.display_status(now),
            available_seats: organization.available_seats(),
            days_remaining: organization.days_remaining(now),
            organization,
        }
    }
}

/// Handle `carectl org`.
pub async fn handle(action: &OrgCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut store: ResourceStore<Organization> = ResourceStore::new(ctx.client.clone());
    let now = Utc::now();

    match action {
        OrgCommands::List { list, status } => {
            let mut query = list_query(list, flags, &ctx.config.general)?;
            if let Some(status) = status {
                let status = parse_enum::<SubscriptionStatus>(status, "status")?;
                query = query.filter("status", status.as_str());
            }
            with_spinner("Fetching organizations", store.fetch(query)).await?;
            let page = Page {
                items: store
                    .items()
                    .iter()
                    .cloned()
                    .map(|o| OrganizationView::new(o, now))
                    .collect(),
                pagination: *store.pagination(),
            };
            output_page(&page, flags.format)
        }
        OrgCommands::Get { id } => {
            let org = with_spinner("Fetching organization", store.fetch_one(id)).await?.clone();
            output(&OrganizationView::new(org, now), flags.format)
        }
        OrgCommands::Create(args) => {
            let draft = draft_from_args(args)?;
            let created = with_spinner("Creating organization", store.create(&draft)).await?;
            report(&store);
            match created {
                Some(org) => output(&OrganizationView::new(org, now), flags.format),
                None => Ok(()),
            }
        }
        OrgCommands::Update(args) => {
            let patch = patch_from_args(args)?;
            let updated = with_spinner("Updating organization", store.update(&args.id, &patch)).await?;
            report(&store);
            output(&OrganizationView::new(updated, now), flags.format)
        }
        OrgCommands::Delete { id } => {
            with_spinner("Deleting organization", store.delete(id)).await?;
            report(&store);
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

fn draft_from_args(args: &OrgCreateArgs) -> anyhow::Result<OrganizationDraft> {
    Ok(OrganizationDraft {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        address: args.address.clone(),
        admin: OrganizationAdmin {
            name: args.admin_name.clone(),
            email: args.admin_email.clone(),
            phone: args.admin_phone.clone(),
        },
        subscription_status: args
            .status
            .as_deref()
            .map(|s| parse_enum(s, "status"))
            .transpose()?,
        subscription_start_date: args.start,
        subscription_end_date: args.end,
        total_seats: args.seats,
    })
}

fn patch_from_args(args: &OrgUpdateArgs) -> anyhow::Result<OrganizationPatch> {
    let admin = match (&args.admin_name, &args.admin_email) {
        (Some(name), Some(email)) => Some(OrganizationAdmin {
            name: name.clone(),
            email: email.clone(),
            phone: args.admin_phone.clone(),
        }),
        _ => None,
    };
    let patch = OrganizationPatch {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        address: args.address.clone(),
        admin,
        subscription_status: args
            .status
            .as_deref()
            .map(|s| parse_enum(s, "status"))
            .transpose()?,
        subscription_start_date: args.start,
        subscription_end_date: args.end,
        total_seats: args.seats,
    };
    if patch == OrganizationPatch::default() {
        anyhow::bail!("Nothing to update: pass at least one field flag");
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn update_args() -> OrgUpdateArgs {
        OrgUpdateArgs {
            id: "o1".into(),
            name: None,
            email: None,
            phone: None,
            address: None,
            admin_name: None,
            admin_email: None,
            admin_phone: None,
            status: None,
            start: None,
            end: None,
            seats: None,
        }
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(patch_from_args(&update_args()).is_err());
    }

    #[test]
    fn status_flag_is_parsed() {
        let args = OrgUpdateArgs {
            status: Some("Trial".into()),
            ..update_args()
        };
        let patch = patch_from_args(&args).unwrap();
        assert_eq!(patch.subscription_status, Some(SubscriptionStatus::Trial));
    }

    #[test]
    fn view_marks_lapsed_subscription_expired() {
        let org: Organization = serde_json::from_value(serde_json::json!({
            "_id": "o1",
            "name": "Northside",
            "subscriptionStatus": "active",
            "subscriptionEndDate": "2026-01-31",
            "totalSeats": 10,
            "usedSeats": 4
        }))
        .unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();

        let view = serde_json::to_value(OrganizationView::new(org, now)).unwrap();

        assert_eq!(view["displayStatus"], "expired");
        assert_eq!(view["availableSeats"], 6);
        assert_eq!(view["subscriptionStatus"], "active");
        assert_eq!(view["id"], "o1");
        assert_eq!(view["daysRemaining"], -258);
    }

    #[test]
    fn admin_phone_travels_with_the_admin() {
        let args = OrgUpdateArgs {
            admin_name: Some("Ada Reyes".into()),
            admin_email: Some("ada@northside.example".into()),
            admin_phone: Some("555-0100".into()),
            ..update_args()
        };
        let admin = patch_from_args(&args).unwrap().admin.unwrap();
        assert_eq!(admin.phone.as_deref(), Some("555-0100"));
    }
}
